//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Direction, GameConfig, GameEngine, GameError, GameState, GameStatus, RandomSpawner,
    TileSpawner,
};

#[cfg(feature = "std")]
pub use crate::autoplay::{play_out, Policy};

#[cfg(feature = "std")]
pub use crate::session::{GameApi, SharedSession};
