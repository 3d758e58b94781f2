//! Tile spawning and the random sources behind it.

use alloc::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::config::FOUR_PROBABILITY;

/// Source of decisions for new tiles: where they land and what they are worth.
pub trait TileSpawner {
    /// Pick an index in `0..empty`, where `empty` is the number of empty
    /// cells (always non-zero) in row-major order.
    fn choose_slot(&mut self, empty: usize) -> usize;

    /// Value of the next tile, 2 or 4.
    fn choose_value(&mut self) -> u64;
}

impl<S: TileSpawner + ?Sized> TileSpawner for &mut S {
    fn choose_slot(&mut self, empty: usize) -> usize {
        (**self).choose_slot(empty)
    }

    fn choose_value(&mut self) -> u64 {
        (**self).choose_value()
    }
}

/// Uniform slot choice with 2 at 90% and 4 at 10%, driven by any rand RNG.
#[derive(Debug, Clone)]
pub struct RandomSpawner<R> {
    rng: R,
}

impl<R: Rng> RandomSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSpawner<SmallRng> {
    /// Reproducible spawner for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> TileSpawner for RandomSpawner<R> {
    fn choose_slot(&mut self, empty: usize) -> usize {
        self.rng.random_range(0..empty)
    }

    fn choose_value(&mut self) -> u64 {
        if self.rng.random_bool(FOUR_PROBABILITY) {
            4
        } else {
            2
        }
    }
}

/// Always places a 2 in the first empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmptySpawner;

impl TileSpawner for FirstEmptySpawner {
    fn choose_slot(&mut self, _empty: usize) -> usize {
        0
    }

    fn choose_value(&mut self) -> u64 {
        2
    }
}

/// Replays a fixed list of `(slot, value)` choices, then behaves like
/// [`FirstEmptySpawner`]. Slots past the end of the empty list are clamped.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSpawner {
    slots: VecDeque<usize>,
    values: VecDeque<u64>,
}

impl ScriptedSpawner {
    pub fn new<I: IntoIterator<Item = (usize, u64)>>(script: I) -> Self {
        let (slots, values) = script.into_iter().unzip();
        Self { slots, values }
    }

    /// Number of scripted spawns not yet used.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl TileSpawner for ScriptedSpawner {
    fn choose_slot(&mut self, empty: usize) -> usize {
        self.slots
            .pop_front()
            .map_or(0, |slot| slot.min(empty - 1))
    }

    fn choose_value(&mut self) -> u64 {
        self.values.pop_front().unwrap_or(2)
    }
}

/// Place one tile in an empty cell chosen by `spawner`.
///
/// A full board is returned unchanged and the spawner is not consulted.
pub fn spawn_tile<S: TileSpawner + ?Sized>(board: &Board, spawner: &mut S) -> Board {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return board.clone();
    }
    let slot = spawner.choose_slot(empty.len()).min(empty.len() - 1);
    let value = spawner.choose_value();
    let index = empty[slot];
    log::debug!(
        "spawned {} at ({}, {})",
        value,
        index / board.size(),
        index % board.size()
    );
    let mut next = board.clone();
    next.set_index(index, value);
    next
}
