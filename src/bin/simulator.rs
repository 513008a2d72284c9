//! twenty48 Headless Simulator
//!
//! Plays many games without any UI using the same state machine as the
//! terminal game, and prints aggregate statistics.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N          Number of games (default: 100)
//!   --seed N          RNG seed; game i uses seed + i (default: 42)
//!   --size N          Board side length (default: 4)
//!   --target N        Target tile (default: 2048)
//!   --strategy NAME   random | greedy | corner (default: greedy)
//!   --max-moves N     Move cap per game (default: 100000)
//!   --json            Print the report as JSON
//!   --verbose         Per-game logging
//!   --quiet           Only final summary line

use env_logger::Env;
use log::info;
use std::io;
use twenty48::simulator::{run_simulation, SimConfig, Strategy};

// ── CLI Configuration ────────────────────────────────────────────────

struct CliOptions {
    sim: SimConfig,
    json: bool,
    quiet: bool,
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|v| v.parse().ok()) {
        Some(v) => v,
        None => {
            eprintln!("{flag} requires a valid value");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        sim: SimConfig::default(),
        json: false,
        quiet: false,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                options.sim.num_runs = parse_value(&args, i, "--runs");
            }
            "--seed" => {
                i += 1;
                options.sim.seed = Some(parse_value(&args, i, "--seed"));
            }
            "--size" => {
                i += 1;
                options.sim.board_size = parse_value(&args, i, "--size");
            }
            "--target" => {
                i += 1;
                options.sim.target_tile = parse_value(&args, i, "--target");
            }
            "--strategy" => {
                i += 1;
                options.sim.strategy = parse_value::<Strategy>(&args, i, "--strategy");
            }
            "--max-moves" => {
                i += 1;
                options.sim.max_moves_per_run = parse_value(&args, i, "--max-moves");
            }
            "--json" => options.json = true,
            "--verbose" => options.sim.verbosity = 2,
            "--quiet" => {
                options.quiet = true;
                options.sim.verbosity = 0;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    options
}

fn print_usage() {
    eprintln!(
        "twenty48 Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N          Number of games (default: 100)\n\
         \x20 --seed N          RNG seed; game i uses seed + i (default: 42)\n\
         \x20 --size N          Board side length (default: 4)\n\
         \x20 --target N        Target tile (default: 2048)\n\
         \x20 --strategy NAME   random | greedy | corner (default: greedy)\n\
         \x20 --max-moves N     Move cap per game (default: 100000)\n\
         \x20 --json            Print the report as JSON\n\
         \x20 --verbose         Per-game logging\n\
         \x20 --quiet           Only final summary line\n\
         \x20 --help, -h        Show this help"
    );
}

fn main() -> io::Result<()> {
    let options = parse_args();

    let default_filter = if options.sim.verbosity >= 2 { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!(
        "Simulating {} games ({} strategy, {}x{} board)",
        options.sim.num_runs,
        options.sim.strategy.name(),
        options.sim.board_size,
        options.sim.board_size
    );
    let report = match run_simulation(&options.sim) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if options.json {
        println!("{}", report.to_json());
    } else if options.quiet {
        println!("{}", report.summary_line());
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
