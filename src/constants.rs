// Board
pub const DEFAULT_BOARD_SIZE: usize = 4;
pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 8;
pub const STARTING_TILES: usize = 2;

// Largest tile a board may hold. Two of these never merge, so doubling
// stays inside u32.
pub const MAX_TILE: u32 = 1 << 30;

// Tile spawning
pub const SPAWN_LOW_VALUE: u32 = 2;
pub const SPAWN_HIGH_VALUE: u32 = 4;
pub const SPAWN_LOW_CHANCE: f64 = 0.9;

// Win banner
pub const DEFAULT_TARGET_TILE: u32 = 2048;

// Terminal front end
pub const INPUT_POLL_MS: u64 = 50;
