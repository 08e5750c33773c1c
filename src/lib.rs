//! Shortest paths on a square grid with impassable cells, found by an A*
//! search that reports each expansion to an observer so the caller can
//! animate it.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod render;
pub mod simulation;
pub mod statistics;

pub use algorithms::a_star::{AStar, SearchOutcome, SearchResult};
pub use algorithms::common::{SearchObserver, Silent, StepControl};
pub use error::GridError;
pub use grid::{Cell, CellState, Grid, Position};
