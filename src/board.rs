//! Square tile board and the slide/merge transform.
//!
//! Every direction is reduced to a single primitive, [`slide_and_merge`]
//! applied to rows, by reversing rows and transposing the board around it.

use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::direction::Direction;

/// Cell value used for an empty square.
pub const EMPTY: u64 = 0;

/// Slide a line toward index 0 and merge equal neighbours once.
///
/// Returns the new line, padded with [`EMPTY`] to the input length, and the
/// sum of all merged tile values. A tile produced by a merge never merges
/// again in the same pass, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
pub fn slide_and_merge(line: &[u64]) -> (Vec<u64>, u64) {
    let mut out = Vec::with_capacity(line.len());
    let mut gained = 0;
    let mut pending: Option<u64> = None;
    for &value in line.iter().filter(|&&v| v != EMPTY) {
        match pending {
            Some(prev) if prev == value => {
                out.push(prev * 2);
                gained += prev * 2;
                pending = None;
            }
            Some(prev) => {
                out.push(prev);
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }
    if let Some(prev) = pending {
        out.push(prev);
    }
    out.resize(line.len(), EMPTY);
    (out, gained)
}

/// Highest tile a board of side `size` can ever hold, `2^(size*size + 1)`.
pub const fn max_reachable_tile(size: usize) -> u64 {
    1 << (size * size + 1)
}

fn is_valid_tile(value: u64, size: usize) -> bool {
    value == EMPTY || (value >= 2 && value.is_power_of_two() && value <= max_reachable_tile(size))
}

/// An `N×N` grid of tiles stored row-major.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Board {
    size: usize,
    cells: Vec<u64>,
}

impl Board {
    /// Create an empty board with the given side length.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self::empty(size))
    }

    pub(crate) fn empty(size: usize) -> Self {
        Board {
            size,
            cells: alloc::vec![EMPTY; size * size],
        }
    }

    /// Build a board from explicit rows, using `0` for empty cells.
    ///
    /// Tiles must be powers of two no larger than [`max_reachable_tile`],
    /// which keeps every later merge within `u64`.
    pub fn from_rows<R: AsRef<[u64]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut board = Board::new(size)?;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(BoardError::InvalidSize(row.len()));
            }
            for (c, &value) in row.iter().enumerate() {
                if !is_valid_tile(value, size) {
                    return Err(BoardError::InvalidTile(value));
                }
                board.cells[r * size + c] = value;
            }
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at (row, col), `None` when the cell is empty.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<u64>, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::InvalidIndex { row, col });
        }
        let value = self.cells[row * self.size + col];
        Ok((value != EMPTY).then_some(value))
    }

    /// Rows as slices, top to bottom. Empty cells read as `0`.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.cells.chunks(self.size)
    }

    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Row-major indices of the empty cells.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == EMPTY)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != EMPTY)
    }

    /// Highest tile on the board, `0` for an empty board.
    pub fn max_tile(&self) -> u64 {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of all tile values.
    pub fn total(&self) -> u64 {
        self.cells.iter().sum()
    }

    /// Returns `true` when some tile equals its right or bottom neighbour.
    pub fn has_adjacent_merge(&self) -> bool {
        let n = self.size;
        for r in 0..n {
            for c in 0..n {
                let value = self.cells[r * n + c];
                if value == EMPTY {
                    continue;
                }
                if c + 1 < n && self.cells[r * n + c + 1] == value {
                    return true;
                }
                if r + 1 < n && self.cells[(r + 1) * n + c] == value {
                    return true;
                }
            }
        }
        false
    }

    /// Returns `true` while at least one direction would change the board.
    pub fn has_legal_move(&self) -> bool {
        !self.is_full() || self.has_adjacent_merge()
    }

    pub fn can_shift(&self, direction: Direction) -> bool {
        self.shift(direction).0 != *self
    }

    pub(crate) fn set_index(&mut self, index: usize, value: u64) {
        self.cells[index] = value;
    }

    pub fn transpose(&self) -> Board {
        let n = self.size;
        let mut cells = alloc::vec![EMPTY; n * n];
        for r in 0..n {
            for c in 0..n {
                cells[c * n + r] = self.cells[r * n + c];
            }
        }
        Board { size: n, cells }
    }

    /// Mirror the board left to right.
    pub fn reverse_rows(&self) -> Board {
        let mut cells = self.cells.clone();
        for row in cells.chunks_mut(self.size) {
            row.reverse();
        }
        Board {
            size: self.size,
            cells,
        }
    }

    fn shift_left(&self) -> (Board, u64) {
        let mut cells = Vec::with_capacity(self.cells.len());
        let mut gained = 0;
        for row in self.cells.chunks(self.size) {
            let (merged, score) = slide_and_merge(row);
            cells.extend_from_slice(&merged);
            gained += score;
        }
        (
            Board {
                size: self.size,
                cells,
            },
            gained,
        )
    }

    /// Slide and merge every line toward `direction`, without spawning.
    /// Returns the new board and the score gained by merges.
    pub fn shift(&self, direction: Direction) -> (Board, u64) {
        match direction {
            Direction::Left => self.shift_left(),
            Direction::Right => {
                let (board, gained) = self.reverse_rows().shift_left();
                (board.reverse_rows(), gained)
            }
            Direction::Up => {
                let (board, gained) = self.transpose().shift_left();
                (board.transpose(), gained)
            }
            Direction::Down => {
                let (board, gained) = self.transpose().shift(Direction::Right);
                (board.transpose(), gained)
            }
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, &value) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                if value == EMPTY {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
