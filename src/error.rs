use std::fmt;

/// Errors raised by grid lookups and by invoking a search on an incomplete grid.
///
/// An unreachable goal is not an error; see `SearchOutcome::NoPath`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate fell outside `[0, rows)` on either axis.
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
    },
    /// The search was requested before a start cell was marked.
    MissingStart,
    /// The search was requested before an end cell was marked.
    MissingEnd,
    /// A grid with zero rows has no cells to place endpoints on.
    EmptyGrid,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col, rows } => {
                write!(
                    f,
                    "cell ({}, {}) is outside a {}x{} grid",
                    row, col, rows, rows
                )
            }
            GridError::MissingStart => write!(f, "no start cell has been set"),
            GridError::MissingEnd => write!(f, "no end cell has been set"),
            GridError::EmptyGrid => write!(f, "the grid has no cells"),
        }
    }
}

impl std::error::Error for GridError {}
