use crate::error::GridError;
use rand::Rng;

/// Identity of a cell: its row and column in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// What a cell currently represents. Rendering derives its colours from this
/// and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Unseen,
    Open,
    Closed,
    Start,
    End,
    Barrier,
    Path,
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub position: Position,
    pub state: CellState,
    /// Pixel origin of the cell, `row * size` and `col * size`.
    pub x: usize,
    pub y: usize,
    pub size: usize,
    /// Passable 4-connected neighbours, valid for the barrier layout at the
    /// time `Grid::compute_neighbors` last ran.
    pub neighbors: Vec<Position>,
}

impl Cell {
    fn new(row: usize, col: usize, size: usize) -> Self {
        Cell {
            position: Position { row, col },
            state: CellState::Unseen,
            x: row * size,
            y: col * size,
            size,
            neighbors: Vec::new(),
        }
    }

    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }

    pub fn is_closed(&self) -> bool {
        self.state == CellState::Closed
    }

    pub fn is_endpoint(&self) -> bool {
        matches!(self.state, CellState::Start | CellState::End)
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    pub rows: usize,
    pub width: usize,
    pub cell_size: usize,
    pub cells: Vec<Vec<Cell>>,
    pub start: Option<Position>,
    pub end: Option<Position>,
}

impl Grid {
    /// Builds a `rows x rows` grid of unseen cells. The cell size is the floor
    /// of `width / rows`; leftover pixels are unused.
    pub fn build(rows: usize, width: usize) -> Self {
        let cell_size = if rows == 0 { 0 } else { width / rows };
        let cells = (0..rows)
            .map(|row| (0..rows).map(|col| Cell::new(row, col, cell_size)).collect())
            .collect();

        Grid {
            rows,
            width,
            cell_size,
            cells,
            start: None,
            end: None,
        }
    }

    /// Discards every cell and rebuilds the grid with the same dimensions.
    pub fn clear(&mut self) {
        *self = Grid::build(self.rows, self.width);
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.rows
    }

    pub fn check(&self, pos: Position) -> Result<(), GridError> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.rows,
            })
        }
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        self.check(Position { row, col })?;
        Ok(&self.cells[row][col])
    }

    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, GridError> {
        self.check(Position { row, col })?;
        Ok(&mut self.cells[row][col])
    }

    /// Unchecked lookup for positions already validated by the caller.
    pub(crate) fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.row][pos.col]
    }

    pub fn state(&self, pos: Position) -> Result<CellState, GridError> {
        self.cell_at(pos.row, pos.col).map(|cell| cell.state)
    }

    /// Marks a cell with a search state, leaving start, end and barrier cells as
    /// they are.
    pub(crate) fn mark(&mut self, pos: Position, state: CellState) {
        let cell = &mut self.cells[pos.row][pos.col];
        if !cell.is_endpoint() && !cell.is_barrier() {
            cell.state = state;
        }
    }

    /// Returns both endpoints, or the first one that is missing.
    pub fn endpoints(&self) -> Result<(Position, Position), GridError> {
        let start = self.start.ok_or(GridError::MissingStart)?;
        let end = self.end.ok_or(GridError::MissingEnd)?;
        Ok((start, end))
    }

    fn passable(&self, row: usize, col: usize) -> bool {
        !self.cells[row][col].is_barrier()
    }

    /// Passable neighbours of `pos` in the order down, up, right, left.
    fn passable_neighbors(&self, pos: Position) -> Vec<Position> {
        let Position { row, col } = pos;
        let mut neighbors = Vec::with_capacity(4);

        if row + 1 < self.rows && self.passable(row + 1, col) {
            neighbors.push(Position { row: row + 1, col });
        }
        if row > 0 && self.passable(row - 1, col) {
            neighbors.push(Position { row: row - 1, col });
        }
        if col + 1 < self.rows && self.passable(row, col + 1) {
            neighbors.push(Position { row, col: col + 1 });
        }
        if col > 0 && self.passable(row, col - 1) {
            neighbors.push(Position { row, col: col - 1 });
        }
        neighbors
    }

    /// Recomputes every cell's neighbour list from the current barrier layout.
    /// Must be called after barrier edits and before each search.
    pub fn compute_neighbors(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.rows {
                let neighbors = self.passable_neighbors(Position { row, col });
                self.cells[row][col].neighbors = neighbors;
            }
        }
    }

    fn set_state_unchecked(&mut self, pos: Position, state: CellState) {
        if self.start == Some(pos) {
            self.start = None;
        }
        if self.end == Some(pos) {
            self.end = None;
        }
        self.cells[pos.row][pos.col].state = state;
    }

    pub fn set_start(&mut self, pos: Position) -> Result<(), GridError> {
        self.check(pos)?;
        if let Some(previous) = self.start.take() {
            self.cells[previous.row][previous.col].state = CellState::Unseen;
        }
        self.set_state_unchecked(pos, CellState::Start);
        self.start = Some(pos);
        Ok(())
    }

    pub fn set_end(&mut self, pos: Position) -> Result<(), GridError> {
        self.check(pos)?;
        if let Some(previous) = self.end.take() {
            self.cells[previous.row][previous.col].state = CellState::Unseen;
        }
        self.set_state_unchecked(pos, CellState::End);
        self.end = Some(pos);
        Ok(())
    }

    /// Turns a cell into a barrier. A start or end cell loses that role.
    /// Keeping room for both endpoints is up to the caller.
    pub fn set_barrier(&mut self, pos: Position) -> Result<(), GridError> {
        self.check(pos)?;
        self.set_state_unchecked(pos, CellState::Barrier);
        Ok(())
    }

    /// Primary-click editing: the first free click places the start, the next
    /// the end, and every later click on an ordinary cell places a barrier.
    pub fn paint(&mut self, pos: Position) -> Result<CellState, GridError> {
        self.check(pos)?;
        if self.start.is_none() && self.end != Some(pos) {
            self.set_start(pos)?;
        } else if self.end.is_none() && self.start != Some(pos) {
            self.set_end(pos)?;
        } else if self.start != Some(pos) && self.end != Some(pos) {
            self.set_barrier(pos)?;
        }
        self.state(pos)
    }

    /// Secondary-click editing: resets the cell and forgets it as an endpoint.
    pub fn erase(&mut self, pos: Position) -> Result<(), GridError> {
        self.check(pos)?;
        self.set_state_unchecked(pos, CellState::Unseen);
        Ok(())
    }

    /// Resets open, closed and path markings left by a previous search.
    pub fn clear_search_marks(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if matches!(cell.state, CellState::Open | CellState::Closed | CellState::Path) {
                cell.state = CellState::Unseen;
            }
        }
    }

    /// Maps a pixel coordinate to the cell under it. The first pixel axis
    /// selects the row, matching the cell origins.
    pub fn position_at_pixel(&self, x: usize, y: usize) -> Result<Position, GridError> {
        if self.cell_size == 0 {
            return Err(GridError::OutOfBounds {
                row: x,
                col: y,
                rows: self.rows,
            });
        }
        let pos = Position {
            row: x / self.cell_size,
            col: y / self.cell_size,
        };
        self.check(pos)?;
        Ok(pos)
    }

    /// Places up to `count` barriers on random unseen cells, never on the start
    /// or end, and never more than `rows² - 2` barriers in total so two cells
    /// stay free for the endpoints. Gives up after `count * 3` attempts and
    /// returns how many were placed.
    pub fn scatter_barriers<R: Rng>(&mut self, count: usize, rng: &mut R) -> usize {
        if self.rows == 0 {
            return 0;
        }
        let capacity = (self.rows * self.rows).saturating_sub(2);
        let count = count.min(capacity.saturating_sub(self.barrier_count()));
        let mut placed = 0;
        let mut attempts = 0;
        while placed < count && attempts < count * 3 {
            let pos = Position {
                row: rng.gen_range(0..self.rows),
                col: rng.gen_range(0..self.rows),
            };
            if self.cell(pos).state == CellState::Unseen {
                self.cells[pos.row][pos.col].state = CellState::Barrier;
                placed += 1;
            }
            attempts += 1;
        }
        placed
    }

    pub fn barrier_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_barrier()).count()
    }

    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.state == state).count()
    }
}
