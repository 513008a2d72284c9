//! 2048 core: tiles slide in one of four directions, equal neighbours merge,
//! and a new 2 or 4 appears after every move that changes the board. The
//! game ends when no move can change anything.

pub mod engine;
pub mod logic;
pub mod spawn;
pub mod terminality;
pub mod types;

pub use engine::{apply_move, legal_moves, slide_and_merge_line};
pub use logic::{transition, GameController};
pub use spawn::{spawn_tile, TileSource};
pub use terminality::is_terminal;
pub use types::*;
