//! # Game State
//!
//! Everything the game needs between frames, in one place.
//!
//! ```text
//! Game
//! ├── board: Board              // current grid, replaced on each accepted move
//! ├── status_message: String    // title bar text
//! └── rng: StdRng               // spawner randomness (seedable)
//! ```
//!
//! State changes only happen through `update(game, action)` in action.rs,
//! which calls `try_move` below.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::board::{Board, Direction};
use super::engine::{apply_move, is_game_over};
use super::spawner::{add_new_number, init_board};

pub const WELCOME_MESSAGE: &str = "Arrow keys to move, q to quit";

pub struct Game {
    board: Board,
    pub status_message: String,
    rng: StdRng,
}

impl Game {
    /// New game with two starting tiles. `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!("Seeding spawner with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(rng)
    }

    pub fn with_rng(mut rng: StdRng) -> Self {
        let board = init_board(&mut rng);
        Self::with_board(board, rng)
    }

    /// Resume from an arbitrary board. No tiles are added.
    pub fn with_board(board: Board, rng: StdRng) -> Self {
        Self {
            board,
            status_message: WELCOME_MESSAGE.to_string(),
            rng,
        }
    }

    /// Apply a move if it changes anything, then spawn one tile.
    ///
    /// Returns whether the move was accepted.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        let candidate = apply_move(&self.board, direction);
        if candidate == self.board {
            debug!("Move {} rejected: board unchanged", direction.label());
            return false;
        }

        self.board = candidate;
        add_new_number(&mut self.board, &mut self.rng);
        debug!("Move {} accepted:\n{}", direction.label(), self.board);
        true
    }

    /// Read-only view. Only `try_move` replaces the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_over(&self) -> bool {
        is_game_over(&self.board)
    }
}
