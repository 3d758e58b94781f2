use alloc::vec::Vec;

use crate::{
    board::Board,
    common::{Action, GameError},
    config::{GameConfig, START_TILES},
    direction::Direction,
    spawn::{spawn_tile, TileSpawner},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Playing,
    /// The win tile was reached. Moves are rejected until `continue_after_win`.
    Won,
    /// No move can change the board. Only a reset leaves this state.
    GameOver,
}

/// Snapshot of a single game. Every operation returns a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameState {
    pub board: Board,
    pub score: u64,
    pub status: GameStatus,
    /// Set once the win tile has been reached, so it is only reported once.
    pub has_won_before: bool,
    pub win_tile: u64,
}

/// Result of a `Move`: the next state and what the move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub state: GameState,
    pub score_gained: u64,
    /// `false` when no tile could slide or merge; nothing was spawned.
    pub changed: bool,
}

/// Summary of a move applied through a `GameEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveReport {
    pub direction: Direction,
    pub changed: bool,
    pub score_gained: u64,
    pub status: GameStatus,
}

impl GameState {
    /// Start a game: empty board with two spawned tiles, score 0, `Playing`.
    pub fn new<S: TileSpawner + ?Sized>(
        config: GameConfig,
        spawner: &mut S,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let mut board = Board::empty(config.size);
        for _ in 0..START_TILES {
            board = spawn_tile(&board, spawner);
        }
        Self::from_board(board, config.win_tile)
    }

    /// Wrap an existing board in a `Playing` state with score 0.
    ///
    /// `win_tile` is checked the same way `GameConfig::validate` checks it.
    pub fn from_board(board: Board, win_tile: u64) -> Result<Self, GameError> {
        GameConfig::new(board.size(), win_tile).validate()?;
        Ok(Self {
            board,
            score: 0,
            status: GameStatus::Playing,
            has_won_before: false,
            win_tile,
        })
    }

    /// Discard everything and start over. Same as `new`.
    pub fn reset<S: TileSpawner + ?Sized>(
        config: GameConfig,
        spawner: &mut S,
    ) -> Result<Self, GameError> {
        Self::new(config, spawner)
    }

    /// Slide the board toward `direction`.
    ///
    /// A move that changes the board adds its merge score, spawns one tile
    /// and re-evaluates the status. A move that changes nothing returns the
    /// same board and score without consulting `spawner`; if no direction
    /// can change the board the returned state is `GameOver`.
    pub fn apply_move<S: TileSpawner + ?Sized>(
        &self,
        direction: Direction,
        spawner: &mut S,
    ) -> Result<MoveOutcome, GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::InvalidStateTransition {
                status: self.status,
                action: Action::Move(direction),
            });
        }

        let (shifted, gained) = self.board.shift(direction);
        if shifted == self.board {
            let mut state = self.clone();
            if !self.board.has_legal_move() {
                log::info!("game over with score {}", self.score);
                state.status = GameStatus::GameOver;
            }
            return Ok(MoveOutcome {
                state,
                score_gained: 0,
                changed: false,
            });
        }

        let board = spawn_tile(&shifted, spawner);
        let score = self.score + gained;
        let mut has_won_before = self.has_won_before;
        let status = if !has_won_before && board.cells().contains(&self.win_tile) {
            log::info!("reached {} with score {}", self.win_tile, score);
            has_won_before = true;
            GameStatus::Won
        } else if !board.has_legal_move() {
            log::info!("game over with score {}", score);
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        };
        log::debug!("moved {} for {} points", direction, gained);

        Ok(MoveOutcome {
            state: GameState {
                board,
                score,
                status,
                has_won_before,
                win_tile: self.win_tile,
            },
            score_gained: gained,
            changed: true,
        })
    }

    /// Leave the `Won` state and keep playing on the same board.
    pub fn continue_after_win(&self) -> Result<GameState, GameError> {
        if self.status != GameStatus::Won {
            return Err(GameError::InvalidStateTransition {
                status: self.status,
                action: Action::ContinueAfterWin,
            });
        }
        Ok(GameState {
            status: GameStatus::Playing,
            has_won_before: true,
            ..self.clone()
        })
    }

    /// Directions that would change the board. Empty unless `Playing`.
    pub fn legal_moves(&self) -> Vec<Direction> {
        if self.status != GameStatus::Playing {
            return Vec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|&d| self.board.can_shift(d))
            .collect()
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

/// Owns a game together with its configuration and tile spawner.
pub struct GameEngine<S: TileSpawner> {
    config: GameConfig,
    state: GameState,
    spawner: S,
    moves_made: usize,
}

impl<S: TileSpawner> GameEngine<S> {
    /// Start a new game.
    pub fn new(config: GameConfig, mut spawner: S) -> Result<Self, GameError> {
        let state = GameState::new(config, &mut spawner)?;
        Ok(Self {
            config,
            state,
            spawner,
            moves_made: 0,
        })
    }

    /// Continue from an existing state. The configuration is taken from it
    /// and validated, since the state's fields are public.
    pub fn from_state(state: GameState, spawner: S) -> Result<Self, GameError> {
        let config = GameConfig::new(state.board.size(), state.win_tile);
        config.validate()?;
        Ok(Self {
            config,
            state,
            spawner,
            moves_made: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Number of moves that changed the board since the last reset.
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// Apply a move. On error the current state is kept.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveReport, GameError> {
        let outcome = self.state.apply_move(direction, &mut self.spawner)?;
        if outcome.changed {
            self.moves_made += 1;
        }
        self.state = outcome.state;
        Ok(MoveReport {
            direction,
            changed: outcome.changed,
            score_gained: outcome.score_gained,
            status: self.state.status,
        })
    }

    pub fn continue_after_win(&mut self) -> Result<(), GameError> {
        self.state = self.state.continue_after_win()?;
        Ok(())
    }

    /// Start a fresh game with the same configuration.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.state = GameState::reset(self.config, &mut self.spawner)?;
        self.moves_made = 0;
        Ok(())
    }
}
