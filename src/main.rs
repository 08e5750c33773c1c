use clap::Parser;

use grid_astar::config::Config;
use grid_astar::simulation::Simulation;
use grid_astar::SearchOutcome;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    println!("Starting A* search...");
    println!("Grid size: {}x{}", config.rows, config.rows);
    println!("Barriers: {}", config.num_barriers);
    if config.no_visualization {
        println!("Visualization disabled - running in fast mode");
    } else {
        println!("Visualization enabled with {}ms delay", config.delay_ms);
        println!("Press Ctrl+C to stop the search");
    }
    println!();

    let mut simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("Failed to set up the grid: {}", e);
            std::process::exit(1);
        }
    };

    let report = match simulation.run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Search failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("\n=== FINAL RESULTS ===");
    match &report.outcome {
        SearchOutcome::Found(path) => {
            println!("SUCCESS: reached ({}, {})", report.end.row, report.end.col);
            if path.len() > 1 {
                println!("First moves: {:?}", &path[..path.len().min(3)]);
            }
        }
        SearchOutcome::NoPath => {
            println!("No path exists from start to end");
            println!("Try reducing --num-barriers or increasing --rows");
        }
        SearchOutcome::Cancelled => {
            println!("Search cancelled after {} steps", report.steps);
        }
    }
    println!("{}", report.statistics);
}
