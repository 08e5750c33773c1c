use crate::grid::Position;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Grid side length in cells
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: u16,

    /// Total pixel width; each cell is width / rows pixels
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    #[arg(long, default_value_t = 300)]
    pub num_barriers: usize,

    /// Seed for barrier and endpoint placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start cell as ROW,COL (random when omitted)
    #[arg(long, value_parser = parse_position)]
    pub start: Option<Position>,

    /// End cell as ROW,COL (random when omitted)
    #[arg(long, value_parser = parse_position)]
    pub end: Option<Position>,

    #[arg(long, default_value_t = 20)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Abandon the search after this many expansions
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Check the path length against an independent solver
    #[arg(long, default_value_t = false)]
    pub verify: bool,
}

impl Config {
    pub fn rows(&self) -> usize {
        usize::from(self.rows)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: 50,
            width: 800,
            num_barriers: 300,
            seed: None,
            start: None,
            end: None,
            delay_ms: 20,
            no_visualization: false,
            max_steps: None,
            verify: false,
        }
    }
}

/// Parses `ROW,COL` into a position.
pub fn parse_position(value: &str) -> Result<Position, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got '{}'", value))?;
    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid row '{}': {}", row.trim(), e))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid column '{}': {}", col.trim(), e))?;
    Ok(Position::new(row, col))
}
