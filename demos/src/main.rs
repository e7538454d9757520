//! Run one grid search from the command line.
//!
//! Run: cargo run --bin gridpath -- maze.txt
//!      cargo run --bin gridpath -- --random 40x20 --density 0.3 --seed 7

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use gridpath_core::Point;
use gridpath_demos::{load, parse_density, parse_size, random_grid, run};
use gridpath_paths::SearchConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Layout file (`#` wall, `.` floor, `S` start, `F` finish); stdin if omitted
    layout: Option<PathBuf>,

    /// Generate a random WIDTHxHEIGHT grid instead of reading a layout
    #[arg(long, value_parser = parse_size, conflicts_with = "layout")]
    random: Option<Point>,

    /// Wall probability for --random
    #[arg(long, default_value_t = 0.3, value_parser = parse_density)]
    density: f64,

    /// Seed for --random
    #[arg(long)]
    seed: Option<u64>,

    /// Restrict movement to the four orthogonal directions
    #[arg(long)]
    no_diagonal: bool,

    /// Also print the full settled order
    #[arg(long)]
    order: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let grid = match args.random {
        Some(size) => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            random_grid(&mut rng, size, args.density)
        }
        None => {
            let text = match &args.layout {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            load(&text)?
        }
    };
    log::debug!("loaded {}x{} grid with {} walls", grid.width(), grid.height(), grid.wall_count());

    let config = if args.no_diagonal {
        SearchConfig::orthogonal()
    } else {
        SearchConfig::default()
    };
    let report = run(&grid, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("{report}");
    if args.order {
        println!("order: {}", report.order_line());
    }
    Ok(())
}
