//! Random tile insertion.

use super::types::Board;
use crate::constants::{SPAWN_HIGH_VALUE, SPAWN_LOW_CHANCE, SPAWN_LOW_VALUE};
use rand::Rng;

/// Source of randomness for spawning tiles.
///
/// Any `rand::Rng` qualifies; tests can supply a scripted implementation to
/// pin down exactly which cell and value get picked.
pub trait TileSource {
    /// Uniform index in `0..len`. `len` is always at least 1.
    fn pick_index(&mut self, len: usize) -> usize;

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool;
}

impl<R: Rng + ?Sized> TileSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.gen_bool(p)
    }
}

/// Place a 2 (90%) or 4 (10%) into a uniformly chosen empty cell.
///
/// Returns a new board. A full board comes back unchanged.
pub fn spawn_tile<S: TileSource + ?Sized>(board: &Board, source: &mut S) -> Board {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return board.clone();
    }

    let (row, col) = empty[source.pick_index(empty.len())];
    let value = if source.chance(SPAWN_LOW_CHANCE) {
        SPAWN_LOW_VALUE
    } else {
        SPAWN_HIGH_VALUE
    };
    board.with_tile(row, col, value)
}
