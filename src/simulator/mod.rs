//! Headless simulator for Monte Carlo analysis.
//!
//! Plays many seeded games with a fixed move strategy to measure:
//! - Average and best scores
//! - How often the target tile is reached
//! - The distribution of the largest tile at game end

mod config;
mod report;
mod runner;
mod strategy;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
pub use strategy::Strategy;
