//! # Actions
//!
//! Everything the player can do becomes an `Action`.
//! Arrow key? That's `Action::Move(direction)`. Closing the game? `Action::Quit`.
//!
//! `update()` takes the current state and an action, mutates the state, and
//! returns an `Effect` telling the caller what to do next. The loop never
//! touches the board directly.
//!
//! ```text
//! Game + Action  →  update()  →  Game' + Effect
//! ```

use log::{debug, info};

use super::board::Direction;
use super::state::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Board changed and play continues. Picked up by the next draw.
    Moved,
    /// The board reached a terminal state with this action.
    GameOver,
    Quit,
}

pub fn update(game: &mut Game, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
        Action::Move(direction) => {
            if !game.try_move(direction) {
                game.status_message = String::from("No tiles moved");
                return Effect::None;
            }
            if game.is_over() {
                info!("No moves left, max tile {}", game.board().max_tile());
                game.status_message = String::from("Game over");
                return Effect::GameOver;
            }
            game.status_message = format!("Moved {}", direction.label());
            Effect::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Board;
    use crate::test_support::{board, seeded_rng};

    #[test]
    fn test_quit() {
        let mut game = Game::with_board(Board::empty(), seeded_rng(0));
        assert_eq!(update(&mut game, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_rejected_move_sets_status() {
        let start = board(&[(0, 0, 2)]);
        let mut game = Game::with_board(start, seeded_rng(0));

        let effect = update(&mut game, Action::Move(Direction::Left));

        assert_eq!(effect, Effect::None);
        assert_eq!(*game.board(), start);
        assert_eq!(game.status_message, "No tiles moved");
    }

    #[test]
    fn test_accepted_move_sets_status() {
        let mut game = Game::with_board(board(&[(0, 0, 2)]), seeded_rng(0));

        let effect = update(&mut game, Action::Move(Direction::Right));

        assert_eq!(effect, Effect::Moved);
        assert_eq!(game.board().get(0, 5), 2);
        assert_eq!(game.status_message, "Moved right");
    }

    #[test]
    fn test_move_into_terminal_state() {
        // Left merges the two 8s in row 0; the spawned tile fills (0, 5).
        // Every other cell already alternates, so the result is terminal
        // whenever the spawn differs from its neighbours.
        let mut rows = [[0; crate::core::board::SIZE]; crate::core::board::SIZE];
        let pattern = [[2, 4], [4, 2]];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = pattern[r % 2][c % 2] * 8;
            }
        }
        // Row 0 becomes 16 32 16 32 8 8 -> left -> 16 32 16 32 16 _
        rows[0] = [16, 32, 16, 32, 8, 8];
        rows[1] = [32, 16, 32, 16, 64, 128];

        for seed in 0..20 {
            let mut game = Game::with_board(Board::from_rows(rows), seeded_rng(seed));
            let effect = update(&mut game, Action::Move(Direction::Left));
            // Spawn is 2 or 4; neighbours at (0,4)=16 and (1,5)=128 never match
            assert_eq!(effect, Effect::GameOver);
            assert!(game.is_over());
            assert_eq!(game.status_message, "Game over");
        }
    }
}
