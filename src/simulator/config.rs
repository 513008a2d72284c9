//! Simulation configuration.

use super::strategy::Strategy;
use crate::config::GameConfig;
use crate::constants::{DEFAULT_BOARD_SIZE, DEFAULT_TARGET_TILE};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Board side length
    pub board_size: usize,

    /// Tile value counted as reaching the target
    pub target_tile: u32,

    /// Move-selection policy
    pub strategy: Strategy,

    /// Accepted moves per game before it is cut off
    pub max_moves_per_run: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            board_size: DEFAULT_BOARD_SIZE,
            target_tile: DEFAULT_TARGET_TILE,
            strategy: Strategy::Greedy,
            max_moves_per_run: 100_000,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for comparing one strategy on the default board
    pub fn strategy_test(strategy: Strategy, num_runs: u32) -> Self {
        Self {
            num_runs,
            strategy,
            ..Default::default()
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            board_size: self.board_size,
            target_tile: self.target_tile,
        }
    }
}
