//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::board::{Board, SIZE, Tile};
use crate::core::state::Game;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a game from a fixed seed.
pub fn seeded_game(seed: u64) -> Game {
    Game::with_rng(seeded_rng(seed))
}

/// Builds a board from `(row, col, value)` triples; everything else is empty.
pub fn board(tiles: &[(usize, usize, Tile)]) -> Board {
    let mut rows = [[0; SIZE]; SIZE];
    for &(r, c, value) in tiles {
        rows[r][c] = value;
    }
    Board::from_rows(rows)
}

/// Full board of alternating 2s and 4s. No move changes it.
pub fn checkerboard() -> Board {
    let mut rows = [[0; SIZE]; SIZE];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = if (r + c) % 2 == 0 { 2 } else { 4 };
        }
    }
    Board::from_rows(rows)
}
