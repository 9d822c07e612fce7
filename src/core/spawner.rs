//! # Spawner
//!
//! Places new tiles. Takes the RNG as a parameter so games can be seeded
//! and tests stay deterministic.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::board::{Board, Tile};

/// Put a 2 or a 4 (even odds) on a uniformly chosen empty cell.
///
/// A full board is left untouched. Returns the filled position, if any.
pub fn add_new_number<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let candidates = board.empty_cells();
    let &(row, col) = candidates.choose(rng)?;
    let value: Tile = if rng.random_bool(0.5) { 2 } else { 4 };
    board.set(row, col, value);
    debug!("Spawned {} at ({}, {})", value, row, col);
    Some((row, col))
}

/// Fresh board with two starting tiles.
pub fn init_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::empty();
    add_new_number(&mut board, rng);
    add_new_number(&mut board, rng);
    board
}
