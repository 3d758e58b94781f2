#![cfg(feature = "std")]

//! Async access to one game shared between tasks.
//!
//! Every call takes the session lock, applies against the latest state and
//! releases it, so concurrent callers are applied strictly one after another.

use std::sync::Arc;

use rand::Rng;
use tokio::sync::Mutex;

use crate::{
    autoplay::{choose, PlayReport, Policy},
    game::{GameEngine, GameState, GameStatus, MoveReport},
    Direction, TileSpawner,
};

#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    async fn make_move(&self, direction: Direction) -> anyhow::Result<MoveReport>;
    async fn continue_after_win(&self) -> anyhow::Result<()>;
    async fn reset(&self) -> anyhow::Result<()>;
    async fn snapshot(&self) -> GameState;
    async fn status(&self) -> GameStatus;
}

/// Cloneable handle to a game guarded by an async mutex.
pub struct SharedSession<S: TileSpawner> {
    engine: Arc<Mutex<GameEngine<S>>>,
}

impl<S: TileSpawner> Clone for SharedSession<S> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<S: TileSpawner> SharedSession<S> {
    pub fn new(engine: GameEngine<S>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// Number of board-changing moves applied so far.
    pub async fn moves_made(&self) -> usize {
        self.engine.lock().await.moves_made()
    }
}

#[async_trait::async_trait]
impl<S: TileSpawner + Send + 'static> GameApi for SharedSession<S> {
    async fn make_move(&self, direction: Direction) -> anyhow::Result<MoveReport> {
        let mut engine = self.engine.lock().await;
        Ok(engine.apply_move(direction)?)
    }

    async fn continue_after_win(&self) -> anyhow::Result<()> {
        let mut engine = self.engine.lock().await;
        Ok(engine.continue_after_win()?)
    }

    async fn reset(&self) -> anyhow::Result<()> {
        let mut engine = self.engine.lock().await;
        Ok(engine.reset()?)
    }

    async fn snapshot(&self) -> GameState {
        self.engine.lock().await.state().clone()
    }

    async fn status(&self) -> GameStatus {
        self.engine.lock().await.status()
    }
}

/// Play a session to the end with `policy`, continuing once after a win.
pub async fn autoplay<A, R>(
    api: &A,
    policy: Policy,
    rng: &mut R,
    max_moves: usize,
) -> anyhow::Result<PlayReport>
where
    A: GameApi + ?Sized,
    R: Rng + Send,
{
    let mut moves = 0;
    while moves < max_moves {
        let state = api.snapshot().await;
        match state.status {
            GameStatus::GameOver => break,
            GameStatus::Won => {
                api.continue_after_win().await?;
                continue;
            }
            GameStatus::Playing => {}
        }
        match choose(policy, &state, rng) {
            Some(direction) => {
                if api.make_move(direction).await?.changed {
                    moves += 1;
                }
            }
            None => {
                // Lets the engine record GameOver for a stuck board.
                api.make_move(Direction::Left).await?;
                break;
            }
        }
    }
    Ok(PlayReport::new(&api.snapshot().await, moves))
}
