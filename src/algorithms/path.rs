use crate::grid::Position;
use rustc_hash::FxHashMap;

/// Walks the predecessor map back from `goal` and returns the cells from the
/// one after the start up to and including `goal`. The start has no
/// predecessor, which ends the walk; a goal equal to the start yields an
/// empty path.
pub fn reconstruct_path(
    came_from: &FxHashMap<Position, Position>,
    goal: Position,
) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = goal;

    while let Some(&previous) = came_from.get(&current) {
        path.push(current);
        current = previous;
        // A well-formed map is acyclic and has at most one entry per cell.
        if path.len() > came_from.len() {
            break;
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn path_excludes_start_and_includes_goal() {
        let mut came_from = FxHashMap::default();
        came_from.insert(pos(0, 1), pos(0, 0));
        came_from.insert(pos(1, 1), pos(0, 1));
        came_from.insert(pos(1, 2), pos(1, 1));
        // Unrelated branch must not leak into the result.
        came_from.insert(pos(1, 0), pos(0, 0));

        assert_eq!(
            reconstruct_path(&came_from, pos(1, 2)),
            vec![pos(0, 1), pos(1, 1), pos(1, 2)]
        );
    }

    #[test]
    fn goal_without_predecessor_is_empty() {
        let came_from = FxHashMap::default();
        assert!(reconstruct_path(&came_from, pos(3, 3)).is_empty());
    }
}
