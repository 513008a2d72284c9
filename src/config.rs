//! Game configuration.

use crate::constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_TARGET_TILE, MAX_BOARD_SIZE, MAX_TILE, MIN_BOARD_SIZE,
};

/// Settings for a single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length N of the N×N board
    pub board_size: usize,

    /// Tile value that counts as "reaching the target" (the classic 2048)
    pub target_tile: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            target_tile: DEFAULT_TARGET_TILE,
        }
    }
}

impl GameConfig {
    pub fn with_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(format!(
                "Board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            ));
        }
        if !(4..=MAX_TILE).contains(&self.target_tile) || !self.target_tile.is_power_of_two() {
            return Err(format!(
                "Target tile must be a power of two between 4 and {}, got {}",
                MAX_TILE, self.target_tile
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 4);
        assert_eq!(config.target_tile, 2048);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_size() {
        let config = GameConfig::with_size(6);
        assert_eq!(config.board_size, 6);
        assert_eq!(config.target_tile, 2048);
    }

    #[test]
    fn test_validate_size_bounds() {
        assert!(GameConfig::with_size(1).validate().is_err());
        assert!(GameConfig::with_size(2).validate().is_ok());
        assert!(GameConfig::with_size(8).validate().is_ok());
        assert!(GameConfig::with_size(9).validate().is_err());
    }

    #[test]
    fn test_validate_target_tile() {
        let mut config = GameConfig::default();
        config.target_tile = 1000;
        assert!(config.validate().is_err());
        config.target_tile = 2;
        assert!(config.validate().is_err());
        config.target_tile = 512;
        assert!(config.validate().is_ok());
        config.target_tile = MAX_TILE;
        assert!(config.validate().is_ok());
        config.target_tile = 1 << 31;
        assert!(config.validate().is_err());
    }
}
