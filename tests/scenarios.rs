use grid_astar::algorithms::reference::{reachable, shortest_distance};
use grid_astar::{AStar, CellState, Grid, GridError, Position, SearchOutcome, Silent, StepControl};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

fn prepared(rows: usize, barriers: &[Position]) -> Grid {
    let mut grid = Grid::build(rows, rows * 16);
    for &barrier in barriers {
        grid.set_barrier(barrier).unwrap();
    }
    grid.compute_neighbors();
    grid
}

fn random_grid(seed: u64, rows: usize, barriers: usize) -> (Grid, Position, Position) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::build(rows, rows * 16);
    let start = pos(rng.gen_range(0..rows), rng.gen_range(0..rows));
    let mut end = pos(rng.gen_range(0..rows), rng.gen_range(0..rows));
    while end == start {
        end = pos(rng.gen_range(0..rows), rng.gen_range(0..rows));
    }
    grid.set_start(start).unwrap();
    grid.set_end(end).unwrap();
    grid.scatter_barriers(barriers, &mut rng);
    grid.compute_neighbors();
    (grid, start, end)
}

fn assert_walkable(grid: &Grid, start: Position, path: &[Position]) {
    let mut previous = start;
    for &step in path {
        assert_eq!(
            previous.row.abs_diff(step.row) + previous.col.abs_diff(step.col),
            1,
            "{:?} -> {:?} is not a single step",
            previous,
            step
        );
        assert_ne!(grid.state(step).unwrap(), CellState::Barrier);
        previous = step;
    }
}

#[test]
fn open_three_by_three_corner_to_corner() {
    let mut grid = prepared(3, &[]);
    let result = AStar::new()
        .search(&mut grid, pos(0, 0), pos(2, 2), &mut Silent)
        .unwrap();

    let path = result.path().unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path.last(), Some(&pos(2, 2)));
    assert_walkable(&grid, pos(0, 0), path);
    // Every cell is within cost 4 of the start and gets a recorded cost.
    assert_eq!(result.g_scores.len(), 9);
}

#[test]
fn full_barrier_column_blocks_the_goal() {
    let mut grid = prepared(3, &[pos(0, 1), pos(1, 1), pos(2, 1)]);
    let result = AStar::new()
        .search(&mut grid, pos(0, 0), pos(2, 2), &mut Silent)
        .unwrap();

    assert_eq!(result.outcome, SearchOutcome::NoPath);
    assert!(!result.success());
    assert_eq!(grid.count_state(CellState::Path), 0);
    // Only the left column was reachable.
    assert_eq!(result.g_scores.len(), 3);
}

#[test]
fn start_equal_to_end_is_an_empty_success() {
    let mut grid = prepared(3, &[]);
    let mut steps = 0usize;
    let result = AStar::new()
        .search(&mut grid, pos(1, 1), pos(1, 1), &mut |_: &Grid| {
            steps += 1;
            StepControl::Continue
        })
        .unwrap();

    assert_eq!(result.outcome, SearchOutcome::Found(Vec::new()));
    assert_eq!(result.statistics.path_length, Some(0));
    assert_eq!(result.statistics.expanded, 0);
    assert_eq!(steps, 0);
}

#[test]
fn barrier_off_the_shortest_routes_changes_nothing() {
    let mut grid = prepared(5, &[pos(4, 4)]);
    let result = AStar::new()
        .search(&mut grid, pos(0, 0), pos(2, 2), &mut Silent)
        .unwrap();

    let path = result.path().unwrap();
    assert_eq!(path.len(), 4);
    assert_walkable(&grid, pos(0, 0), path);
}

#[test]
fn missing_end_is_reported_before_searching() {
    let mut grid = prepared(4, &[]);
    grid.set_start(pos(0, 0)).unwrap();
    let err = AStar::new().search_grid(&mut grid, &mut Silent).unwrap_err();
    assert_eq!(err, GridError::MissingEnd);
    assert_eq!(grid.count_state(CellState::Closed), 0);
}

#[test]
fn path_lengths_match_reference_solver() {
    for seed in 0..60 {
        let (mut grid, start, end) = random_grid(seed, 12, 45);
        let expected = shortest_distance(&grid, start, end);
        let result = AStar::new().search(&mut grid, start, end, &mut Silent).unwrap();

        match (&result.outcome, expected) {
            (SearchOutcome::Found(path), Some(distance)) => {
                assert_eq!(path.len(), distance, "seed {}", seed);
                assert_walkable(&grid, start, path);
                assert_eq!(path.last(), Some(&end));
            }
            (SearchOutcome::NoPath, None) => {
                // Everything reachable from the start was examined.
                assert_eq!(
                    result.g_scores.len(),
                    reachable(&grid, start).len(),
                    "seed {}",
                    seed
                );
            }
            (outcome, expected) => {
                panic!("seed {}: got {:?}, reference {:?}", seed, outcome, expected)
            }
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    for seed in [3, 17, 29] {
        let (grid, start, end) = random_grid(seed, 15, 50);

        let mut first_grid = grid.clone();
        let first = AStar::new()
            .search(&mut first_grid, start, end, &mut Silent)
            .unwrap();
        let mut second_grid = grid.clone();
        let second = AStar::new()
            .search(&mut second_grid, start, end, &mut Silent)
            .unwrap();

        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.came_from, second.came_from);
        assert_eq!(first.statistics.expanded, second.statistics.expanded);
    }
}

#[test]
fn closed_cells_hold_their_true_distance() {
    for seed in 100..120 {
        let (mut grid, start, end) = random_grid(seed, 10, 30);
        let result = AStar::new().search(&mut grid, start, end, &mut Silent).unwrap();

        for cell in grid.cells.iter().flatten().filter(|cell| cell.is_closed()) {
            let truth = shortest_distance(&grid, start, cell.position).unwrap();
            assert_eq!(
                result.cost(cell.position) as usize,
                truth,
                "seed {} cell {:?}",
                seed,
                cell.position
            );
        }
    }
}

#[test]
fn later_search_leaves_earlier_marks_until_cleared() {
    let mut grid = prepared(6, &[pos(2, 2)]);
    AStar::new()
        .search(&mut grid, pos(0, 0), pos(5, 5), &mut Silent)
        .unwrap();
    let marked = grid.count_state(CellState::Closed) + grid.count_state(CellState::Path);
    assert!(marked > 0);

    // A second, shorter search does not wipe the first one's markings.
    AStar::new()
        .search(&mut grid, pos(0, 0), pos(0, 1), &mut Silent)
        .unwrap();
    assert!(grid.count_state(CellState::Closed) + grid.count_state(CellState::Path) > 0);

    grid.clear_search_marks();
    assert_eq!(grid.count_state(CellState::Closed), 0);
    assert_eq!(grid.count_state(CellState::Path), 0);
    assert_eq!(grid.count_state(CellState::Open), 0);
    assert_eq!(grid.barrier_count(), 1);
}

#[test]
fn each_cell_enters_the_frontier_once_and_is_expanded_once() {
    for seed in 200..260 {
        let rows = 6 + (seed as usize % 9);
        let (mut grid, start, end) = random_grid(seed, rows, rows * rows / 3);
        let mut steps = 0usize;
        let result = AStar::new()
            .search(&mut grid, start, end, &mut |_: &Grid| {
                steps += 1;
                StepControl::Continue
            })
            .unwrap();

        assert_eq!(
            result.statistics.pushed,
            result.g_scores.len(),
            "seed {}",
            seed
        );
        assert_eq!(steps, result.statistics.expanded, "seed {}", seed);

        // Expanded cells are the start plus every closed cell; on success the
        // path cells before the goal were expanded too, then repainted.
        let closed = grid.count_state(CellState::Closed);
        let expected = match &result.outcome {
            SearchOutcome::Found(path) => closed + path.len(),
            _ => closed + 1,
        };
        assert_eq!(steps, expected, "seed {}", seed);
    }
}
