use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStatistics {
    /// Cells popped from the frontier and expanded.
    pub expanded: usize,
    /// Entries pushed onto the frontier, including the start.
    pub pushed: usize,
    pub max_frontier: usize,
    /// Edge count of the reconstructed path, when one was found.
    pub path_length: Option<usize>,
    /// Shortest distance reported by the reference solver, when requested.
    pub reference_length: Option<usize>,
    pub elapsed: Duration,
}

impl SearchStatistics {
    /// `Some(true)` when both lengths are known and agree.
    pub fn matches_reference(&self) -> Option<bool> {
        match (self.path_length, self.reference_length) {
            (Some(found), Some(reference)) => Some(found == reference),
            _ => None,
        }
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cells expanded: {}", self.expanded)?;
        writeln!(f, "Frontier pushes: {}", self.pushed)?;
        writeln!(f, "Peak frontier size: {}", self.max_frontier)?;
        match self.path_length {
            Some(length) => writeln!(f, "Path length: {}", length)?,
            None => writeln!(f, "Path length: -")?,
        }
        if let Some(reference) = self.reference_length {
            writeln!(f, "Reference shortest path: {}", reference)?;
        }
        writeln!(f, "Search time: {:.2?}", self.elapsed)?;

        if let Some(false) = self.matches_reference() {
            writeln!(f, "⚠ Path length differs from the reference solver")?;
        }
        Ok(())
    }
}
