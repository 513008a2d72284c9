//! twenty48 - the 2048 sliding-tile puzzle.
//!
//! This module exposes the game engine and simulator for testing and
//! external front ends.

pub mod config;
pub mod constants;
pub mod game;
pub mod simulator;

pub use config::GameConfig;
pub use game::{Board, Direction, GameController, GameEvent, GameState, GameStatus, MoveResult};
