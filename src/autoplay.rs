#![cfg(feature = "std")]

//! Simple move-selection policies for unattended play.

use rand::Rng;

use crate::{
    game::{GameEngine, GameState, GameStatus},
    Direction, TileSpawner,
};

/// Preference order used by [`Policy::Corner`]: keep big tiles bottom-left.
const CORNER_PREFERENCE: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Uniformly random legal move.
    Random,
    /// First legal move in a fixed corner-hugging order.
    Corner,
}

/// Pick the next move, or `None` when no direction changes the board.
pub fn choose<R: Rng + ?Sized>(
    policy: Policy,
    state: &GameState,
    rng: &mut R,
) -> Option<Direction> {
    let legal = state.legal_moves();
    if legal.is_empty() {
        return None;
    }
    match policy {
        Policy::Random => Some(legal[rng.random_range(0..legal.len())]),
        Policy::Corner => CORNER_PREFERENCE
            .iter()
            .copied()
            .find(|d| legal.contains(d)),
    }
}

/// Final figures of an unattended game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayReport {
    pub score: u64,
    pub max_tile: u64,
    pub moves: usize,
    pub status: GameStatus,
    pub won: bool,
}

impl PlayReport {
    pub fn new(state: &GameState, moves: usize) -> Self {
        Self {
            score: state.score,
            max_tile: state.board.max_tile(),
            moves,
            status: state.status,
            won: state.has_won_before,
        }
    }
}

/// Play `engine` until game over or `max_moves` board-changing moves.
pub fn play_out<S: TileSpawner, R: Rng + ?Sized>(
    engine: &mut GameEngine<S>,
    policy: Policy,
    rng: &mut R,
    max_moves: usize,
) -> PlayReport {
    while engine.moves_made() < max_moves {
        match engine.status() {
            GameStatus::GameOver => break,
            GameStatus::Won => {
                if engine.continue_after_win().is_err() {
                    break;
                }
                continue;
            }
            GameStatus::Playing => {}
        }
        let Some(direction) = choose(policy, engine.state(), rng) else {
            // A stuck board needs one attempted move to be marked GameOver.
            match engine.apply_move(Direction::Left) {
                Ok(report) => log::debug!("autoplay stopped: {:?}", report.status),
                Err(err) => log::warn!("autoplay stopped: {}", err),
            }
            break;
        };
        if engine.apply_move(direction).is_err() {
            break;
        }
    }
    PlayReport::new(engine.state(), engine.moves_made())
}
