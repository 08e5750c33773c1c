use crate::grid::Position;

/// Manhattan distance between two cells. Admissible and consistent for
/// 4-connected movement with unit step cost.
pub fn manhattan(a: Position, b: Position) -> u32 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u32
}
