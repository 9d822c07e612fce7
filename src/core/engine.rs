//! # Transition Engine
//!
//! Pure board transitions. Only two primitives do real work:
//! `slide_and_merge` on a single row, and `move_left` / `move_right` over all
//! rows. Vertical moves reuse them through a transpose:
//!
//! ```text
//! move_up(b)   = transpose(move_left(transpose(b)))
//! move_down(b) = transpose(move_right(transpose(b)))
//! ```
//!
//! Nothing here mutates its input or touches randomness. Spawning a tile
//! after an accepted move is the caller's job (see `core::state`).

use super::board::{Board, Direction, SIZE, Tile};

/// Slide a row toward index 0 and merge equal neighbours.
///
/// Zeros are dropped, then a single left-to-right pass doubles the left tile
/// of every equal pair and clears the right one. A freshly doubled tile is
/// never merged again in the same pass, so `[2, 2, 2]` becomes `[4, 2, 0]`.
/// The result is left-packed and zero-padded back to `N`.
pub fn slide_and_merge<const N: usize>(row: [Tile; N]) -> [Tile; N] {
    let mut compacted: Vec<Tile> = row.into_iter().filter(|&v| v != 0).collect();

    for i in 0..compacted.len().saturating_sub(1) {
        if compacted[i] == compacted[i + 1] {
            compacted[i] *= 2;
            compacted[i + 1] = 0;
        }
    }

    let mut out = [0; N];
    for (slot, value) in out
        .iter_mut()
        .zip(compacted.into_iter().filter(|&v| v != 0))
    {
        *slot = value;
    }
    out
}

pub fn move_left(board: &Board) -> Board {
    board.map_rows(slide_and_merge)
}

pub fn move_right(board: &Board) -> Board {
    board.map_rows(|mut row| {
        row.reverse();
        let mut merged = slide_and_merge(row);
        merged.reverse();
        merged
    })
}

pub fn move_up(board: &Board) -> Board {
    move_left(&board.transpose()).transpose()
}

pub fn move_down(board: &Board) -> Board {
    move_right(&board.transpose()).transpose()
}

/// Candidate board for `direction`. May equal the input when nothing moves.
pub fn apply_move(board: &Board, direction: Direction) -> Board {
    match direction {
        Direction::Left => move_left(board),
        Direction::Right => move_right(board),
        Direction::Up => move_up(board),
        Direction::Down => move_down(board),
    }
}

/// True when the board is full and no two orthogonal neighbours are equal.
pub fn is_game_over(board: &Board) -> bool {
    if board.has_empty() {
        return false;
    }

    for r in 0..SIZE {
        for c in 0..SIZE {
            let value = board[(r, c)];
            if c + 1 < SIZE && board[(r, c + 1)] == value {
                return false;
            }
            if r + 1 < SIZE && board[(r + 1, c)] == value {
                return false;
            }
        }
    }
    true
}
