use crate::common::ConfigError;

pub const DEFAULT_BOARD_SIZE: usize = 4;
pub const DEFAULT_WIN_TILE: u64 = 2048;
pub const MIN_BOARD_SIZE: usize = 2;
/// Largest side length whose highest reachable tile, 2^(N*N+1), still fits in a `u64`.
pub const MAX_BOARD_SIZE: usize = 7;
/// Number of tiles placed on a fresh board.
pub const START_TILES: usize = 2;
/// Chance that a spawned tile is a 4 instead of a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Board dimensions and win threshold for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub size: usize,
    pub win_tile: u64,
}

impl GameConfig {
    pub const fn new(size: usize, win_tile: u64) -> Self {
        Self { size, win_tile }
    }

    /// Check the side length is in range and the win tile is a power of two of at least 4.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if self.win_tile < 4 || !self.win_tile.is_power_of_two() {
            return Err(ConfigError::InvalidWinTile(self.win_tile));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_WIN_TILE)
    }
}
