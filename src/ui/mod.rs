//! Terminal rendering for the game screen.

pub mod board_scene;
pub mod game_common;

pub use board_scene::render_board_scene;
