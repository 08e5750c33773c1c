use crate::algorithms::a_star::{AStar, SearchOutcome};
use crate::algorithms::common::StepControl;
use crate::algorithms::reference;
use crate::config::Config;
use crate::error::GridError;
use crate::grid::{Grid, Position};
use crate::render;
use crate::statistics::SearchStatistics;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RunReport {
    pub start: Position,
    pub end: Position,
    pub outcome: SearchOutcome,
    pub statistics: SearchStatistics,
    /// Observer invocations, one per expansion.
    pub steps: usize,
}

impl RunReport {
    pub fn success(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }
}

/// A grid scenario plus the settings used to animate a search over it.
pub struct Simulation {
    config: Config,
    grid: Grid,
    start: Position,
    end: Position,
}

impl Simulation {
    /// Builds the grid, places the endpoints and scatters barriers. Explicit
    /// endpoints outside the grid are rejected.
    pub fn new(config: Config) -> Result<Self, GridError> {
        let rows = config.rows();
        if rows == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut grid = Grid::build(rows, config.width);

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Random endpoints keep the start in the top-left quadrant and the end
        // in the bottom-right one.
        let half = rows / 2;
        let start = match config.start {
            Some(pos) => pos,
            None => Position::new(
                rng.gen_range(0..half.max(1)),
                rng.gen_range(0..half.max(1)),
            ),
        };
        let end = match config.end {
            Some(pos) => pos,
            None => Position::new(rng.gen_range(half..rows), rng.gen_range(half..rows)),
        };
        grid.check(start)?;
        grid.check(end)?;

        grid.set_start(start)?;
        if end != start {
            grid.set_end(end)?;
        }
        let placed = grid.scatter_barriers(config.num_barriers, &mut rng);
        grid.compute_neighbors();

        info!(
            "Generated {}x{} grid - start: ({}, {}), end: ({}, {}), barriers: {}",
            rows, rows, start.row, start.col, end.row, end.col, placed
        );

        Ok(Simulation {
            config,
            grid,
            start,
            end,
        })
    }

    /// Wraps an already prepared grid. Neighbour lists are recomputed here.
    pub fn with_grid(config: Config, mut grid: Grid) -> Result<Self, GridError> {
        let (start, end) = grid.endpoints()?;
        grid.compute_neighbors();
        Ok(Simulation {
            config,
            grid,
            start,
            end,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn endpoints(&self) -> (Position, Position) {
        (self.start, self.end)
    }

    pub fn run(&mut self) -> Result<RunReport, GridError> {
        let (start, end) = (self.start, self.end);
        let visualize = !self.config.no_visualization;
        let delay = Duration::from_millis(self.config.delay_ms);
        let max_steps = self.config.max_steps;
        let mut steps = 0usize;

        if visualize {
            render::print_frame(&self.grid, "=== A* SEARCH === Step: 0");
            thread::sleep(delay);
        }

        let mut observer = |grid: &Grid| {
            steps += 1;
            if visualize {
                let header = format!(
                    "=== A* SEARCH === Step: {} | Start: ({}, {}) | End: ({}, {})",
                    steps, start.row, start.col, end.row, end.col
                );
                render::print_frame(grid, &header);
                thread::sleep(delay);
            }
            match max_steps {
                Some(limit) if steps >= limit => StepControl::Cancel,
                _ => StepControl::Continue,
            }
        };

        let result = AStar::new().search(&mut self.grid, start, end, &mut observer)?;
        let mut statistics = result.statistics;

        if self.config.verify {
            statistics.reference_length = reference::shortest_distance(&self.grid, start, end);
            if statistics.matches_reference() == Some(false) {
                warn!(
                    "Path length {:?} differs from reference {:?}",
                    statistics.path_length, statistics.reference_length
                );
            }
        }

        match &result.outcome {
            SearchOutcome::Found(path) => info!("Path found with {} steps", path.len()),
            SearchOutcome::NoPath => info!("No path exists between start and end"),
            SearchOutcome::Cancelled => info!("Search stopped after {} expansions", steps),
        }

        if visualize {
            let header = match &result.outcome {
                SearchOutcome::Found(_) => "=== SEARCH COMPLETE === SUCCESS",
                SearchOutcome::NoPath => "=== SEARCH COMPLETE === NO PATH",
                SearchOutcome::Cancelled => "=== SEARCH CANCELLED ===",
            };
            render::print_frame(&self.grid, header);
        }

        Ok(RunReport {
            start,
            end,
            outcome: result.outcome,
            statistics,
            steps,
        })
    }
}
