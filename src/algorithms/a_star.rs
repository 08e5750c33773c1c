use crate::algorithms::common::{SearchObserver, StepControl};
use crate::algorithms::path::reconstruct_path;
use crate::error::GridError;
use crate::grid::{CellState, Grid, Position};
use crate::heuristic::manhattan;
use crate::statistics::SearchStatistics;
use log::{debug, trace, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Cost recorded for cells the search has not reached.
pub const UNREACHED: u32 = u32::MAX;

/// A frontier entry. Ordered by estimated total cost, then by push order, and
/// reversed so the `BinaryHeap` pops the smallest first. Cells themselves are
/// never compared.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct FrontierEntry {
    f_score: u32,
    sequence: u64,
    pos: Position,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Cells from the one after the start up to and including the goal.
    Found(Vec<Position>),
    /// The frontier emptied without reaching the goal.
    NoPath,
    /// The observer asked the search to stop.
    Cancelled,
}

/// Everything one search invocation produced. Owned by the caller and
/// dropped once consumed; nothing here is written back to the grid.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub came_from: FxHashMap<Position, Position>,
    pub g_scores: FxHashMap<Position, u32>,
    pub f_scores: FxHashMap<Position, u32>,
    pub statistics: SearchStatistics,
}

impl SearchResult {
    pub fn success(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&[Position]> {
        match &self.outcome {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Best known cost to `pos`, or `UNREACHED`.
    pub fn cost(&self, pos: Position) -> u32 {
        self.g_scores.get(&pos).copied().unwrap_or(UNREACHED)
    }
}

/// Best-first search over a grid's cached neighbour lists with unit step cost.
#[derive(Clone, Copy)]
pub struct AStar {
    heuristic: fn(Position, Position) -> u32,
}

impl Default for AStar {
    fn default() -> Self {
        AStar { heuristic: manhattan }
    }
}

impl AStar {
    /// Creates a search using the Manhattan heuristic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the heuristic. It must be admissible and consistent for the
    /// returned paths to stay shortest.
    pub fn with_heuristic(heuristic: fn(Position, Position) -> u32) -> Self {
        AStar { heuristic }
    }

    /// Searches between the grid's marked start and end cells.
    pub fn search_grid<O: SearchObserver>(
        &self,
        grid: &mut Grid,
        observer: &mut O,
    ) -> Result<SearchResult, GridError> {
        let (start, end) = grid.endpoints()?;
        self.search(grid, start, end, observer)
    }

    /// Finds a shortest path from `start` to `end`.
    ///
    /// The grid's neighbour lists must be current (see
    /// `Grid::compute_neighbors`). Reached cells are marked open, expanded
    /// cells closed and path cells as path; markings from earlier searches are
    /// left for the caller to clear. `observer` runs after every expansion and
    /// may cancel the search.
    ///
    /// An unreachable goal is reported as `SearchOutcome::NoPath`. Only
    /// coordinates outside the grid are errors, and they are rejected before
    /// any state is touched.
    pub fn search<O: SearchObserver>(
        &self,
        grid: &mut Grid,
        start: Position,
        end: Position,
        observer: &mut O,
    ) -> Result<SearchResult, GridError> {
        grid.check(start)?;
        grid.check(end)?;

        let h = self.heuristic;
        let started = Instant::now();
        debug!(
            "[AStar] search: start=({},{}) end=({},{}) rows={}",
            start.row, start.col, end.row, end.col, grid.rows
        );

        let mut g_scores: FxHashMap<Position, u32> = FxHashMap::default();
        let mut f_scores: FxHashMap<Position, u32> = FxHashMap::default();
        let mut came_from: FxHashMap<Position, Position> = FxHashMap::default();
        let mut frontier = BinaryHeap::new();
        let mut members: FxHashSet<Position> = FxHashSet::default();
        let mut sequence = 0u64;
        let mut statistics = SearchStatistics::default();

        g_scores.insert(start, 0);
        f_scores.insert(start, h(start, end));
        frontier.push(FrontierEntry {
            f_score: h(start, end),
            sequence,
            pos: start,
        });
        members.insert(start);
        statistics.pushed = 1;
        statistics.max_frontier = 1;

        let outcome = loop {
            let Some(entry) = frontier.pop() else {
                break SearchOutcome::NoPath;
            };
            let current = entry.pos;
            // Membership only guards against duplicate enqueuing; whatever is
            // popped gets expanded.
            members.remove(&current);

            if current == end {
                let path = reconstruct_path(&came_from, end);
                for &pos in &path {
                    grid.mark(pos, CellState::Path);
                }
                statistics.path_length = Some(path.len());
                break SearchOutcome::Found(path);
            }

            statistics.expanded += 1;
            let current_g = g_scores.get(&current).copied().unwrap_or(UNREACHED);
            let candidate = current_g.saturating_add(1);
            let neighbors = grid.cell(current).neighbors.clone();

            for neighbor in neighbors {
                let known = g_scores.get(&neighbor).copied().unwrap_or(UNREACHED);
                if candidate >= known {
                    continue;
                }

                came_from.insert(neighbor, current);
                g_scores.insert(neighbor, candidate);
                let f_score = candidate.saturating_add(h(neighbor, end));
                f_scores.insert(neighbor, f_score);

                if members.insert(neighbor) {
                    sequence += 1;
                    frontier.push(FrontierEntry {
                        f_score,
                        sequence,
                        pos: neighbor,
                    });
                    statistics.pushed += 1;
                    grid.mark(neighbor, CellState::Open);
                }
            }
            statistics.max_frontier = statistics.max_frontier.max(frontier.len());

            if current != start {
                grid.mark(current, CellState::Closed);
            }
            trace!(
                "[AStar] expanded ({},{}) g={} f={} frontier={}",
                current.row,
                current.col,
                current_g,
                entry.f_score,
                frontier.len()
            );

            if observer.on_step(grid) == StepControl::Cancel {
                warn!(
                    "[AStar] cancelled after {} expansions",
                    statistics.expanded
                );
                break SearchOutcome::Cancelled;
            }
        };

        statistics.elapsed = started.elapsed();
        match &outcome {
            SearchOutcome::Found(path) => debug!(
                "[AStar] found path of length {} after {} expansions",
                path.len(),
                statistics.expanded
            ),
            SearchOutcome::NoPath => debug!(
                "[AStar] no path after {} expansions",
                statistics.expanded
            ),
            SearchOutcome::Cancelled => {}
        }

        Ok(SearchResult {
            outcome,
            came_from,
            g_scores,
            f_scores,
            statistics,
        })
    }
}
