use crate::grid::{Grid, Position};
use crate::heuristic::manhattan;
use pathfinding::prelude::{astar, bfs_reach};

/// Successors straight from the barrier layout, ignoring cached neighbour lists.
fn successors(grid: &Grid, pos: Position) -> Vec<Position> {
    let mut next = Vec::with_capacity(4);
    let (row, col) = (pos.row as isize, pos.col as isize);

    for (dr, dc) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
        let (nr, nc) = (row + dr, col + dc);
        if nr < 0 || nc < 0 || nr >= grid.rows as isize || nc >= grid.rows as isize {
            continue;
        }
        let candidate = Position::new(nr as usize, nc as usize);
        if !grid.cell(candidate).is_barrier() {
            next.push(candidate);
        }
    }
    next
}

/// Shortest edge count between two cells computed by the `pathfinding` crate,
/// or `None` when the goal is unreachable or either cell is off the grid.
pub fn shortest_distance(grid: &Grid, start: Position, goal: Position) -> Option<usize> {
    if !grid.in_bounds(start) || !grid.in_bounds(goal) {
        return None;
    }
    astar(
        &start,
        |p| successors(grid, *p).into_iter().map(|s| (s, 1usize)),
        |p| manhattan(*p, goal) as usize,
        |p| *p == goal,
    )
    .map(|(_, cost)| cost)
}

/// Every cell reachable from `start`, in breadth-first order.
pub fn reachable(grid: &Grid, start: Position) -> Vec<Position> {
    if !grid.in_bounds(start) {
        return Vec::new();
    }
    bfs_reach(start, |p| successors(grid, *p)).collect()
}
