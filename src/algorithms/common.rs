use crate::grid::Grid;

/// What the search should do after a step has been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepControl {
    Continue,
    Cancel,
}

/// Hook invoked once per cell expansion, after the neighbours of the current
/// cell have been relaxed. It is the only point where a running search hands
/// control back, so it is where callers redraw and poll for a quit request.
pub trait SearchObserver {
    fn on_step(&mut self, grid: &Grid) -> StepControl;
}

impl<F> SearchObserver for F
where
    F: FnMut(&Grid) -> StepControl,
{
    fn on_step(&mut self, grid: &Grid) -> StepControl {
        self(grid)
    }
}

/// Observer that never renders and never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SearchObserver for Silent {
    fn on_step(&mut self, _grid: &Grid) -> StepControl {
        StepControl::Continue
    }
}
