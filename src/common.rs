//! Error types shared by the board, configuration and game layers.

use crate::direction::Direction;
use crate::game::GameStatus;

/// Errors returned by Board construction and indexed access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Side length outside the supported range, or rows of unequal length.
    InvalidSize(usize),
    /// Cell value that is neither empty nor a power of two of at least 2.
    InvalidTile(u64),
    /// Row or column index is out of range.
    InvalidIndex { row: usize, col: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidSize(n) => write!(f, "Board size {} is not supported", n),
            BoardError::InvalidTile(v) => write!(f, "Tile value {} is not a power of two", v),
            BoardError::InvalidIndex { row, col } => {
                write!(f, "Cell ({}, {}) is out of range", row, col)
            }
        }
    }
}

/// Errors returned when validating a `GameConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidSize(usize),
    InvalidWinTile(u64),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidSize(n) => write!(
                f,
                "Board size {} is out of range {}..={}",
                n,
                crate::config::MIN_BOARD_SIZE,
                crate::config::MAX_BOARD_SIZE
            ),
            ConfigError::InvalidWinTile(v) => {
                write!(f, "Win tile {} must be a power of two of at least 4", v)
            }
        }
    }
}

/// Operation attempted against a game, carried by `GameError::InvalidStateTransition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    ContinueAfterWin,
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Action::Move(dir) => write!(f, "move {}", dir),
            Action::ContinueAfterWin => write!(f, "continue after win"),
        }
    }
}

/// Errors returned by game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The action is not allowed in the current status. The caller's state is untouched.
    InvalidStateTransition { status: GameStatus, action: Action },
    /// The configuration used to start a game is invalid.
    Config(ConfigError),
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidStateTransition { status, action } => {
                write!(f, "Cannot {} while game is {:?}", action, status)
            }
            GameError::Config(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

/// Input that does not name a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDirectionError;

impl core::fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Expected one of up, down, left, right")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
#[cfg(feature = "std")]
impl std::error::Error for ParseDirectionError {}
