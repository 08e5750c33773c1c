use crate::grid::{CellState, Grid};
use std::fmt::Write as _;

const RESET: &str = "\x1B[0m";

/// Character drawn for a cell in plain output.
pub fn glyph(state: CellState) -> char {
    match state {
        CellState::Unseen => '.',
        CellState::Open => 'o',
        CellState::Closed => 'x',
        CellState::Start => 'S',
        CellState::End => 'E',
        CellState::Barrier => '#',
        CellState::Path => '*',
    }
}

/// ANSI foreground colour for a cell: green open, red closed, orange start,
/// turquoise end, purple path.
pub fn color_code(state: CellState) -> &'static str {
    match state {
        CellState::Unseen => "\x1B[37m",
        CellState::Open => "\x1B[32m",
        CellState::Closed => "\x1B[31m",
        CellState::Start => "\x1B[38;5;208m",
        CellState::End => "\x1B[36m",
        CellState::Barrier => "\x1B[90m",
        CellState::Path => "\x1B[35m",
    }
}

/// Draws the grid one row per line with column numbers on top.
pub fn draw_grid(grid: &Grid, colored: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for col in 0..grid.rows {
        let _ = write!(out, "{:2}", col % 10);
    }
    out.push('\n');

    for (row, cells) in grid.cells.iter().enumerate() {
        let _ = write!(out, "{:2} ", row);
        for cell in cells {
            if colored {
                let _ = write!(out, "{}{}{} ", color_code(cell.state), glyph(cell.state), RESET);
            } else {
                let _ = write!(out, "{} ", glyph(cell.state));
            }
        }
        out.push('\n');
    }
    out
}

/// Clear the terminal screen.
pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

/// Clears the screen and prints `header` followed by the coloured grid.
pub fn print_frame(grid: &Grid, header: &str) {
    clear_screen();
    println!("{}", header);
    println!("Legend: S=Start, E=End, #=Barrier, o=Open, x=Closed, *=Path");
    print!("{}", draw_grid(grid, true));
}
