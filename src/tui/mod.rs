//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the board,
//! and translates keyboard events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Frame Loop
//!
//! One iteration, at a fixed frame rate (10 fps by default):
//!
//! 1. Draw the current board.
//! 2. If the board is terminal, stop with `Outcome::GameOver`.
//! 3. Drain every pending input event; each arrow key is one `Action::Move`.
//! 4. Sleep off the rest of the frame (`FrameClock`).
//!
//! Quit keys stop the loop immediately with `Outcome::Closed`.

mod clock;
mod component;
mod components;
mod event;
pub mod theme;
mod ui;

use std::io::{self, stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::SetTitle;
use log::{debug, info};
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::Game;
use crate::tui::clock::FrameClock;
use crate::tui::event::TuiEvent;
use crate::tui::theme::{Theme, WINDOW_TITLE};

/// Why the frame loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player closed the game.
    Closed,
    /// No move can change the board.
    GameOver,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide, SetTitle(WINDOW_TITLE))?;
        info!("Terminal modes enabled (hidden cursor, title)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Run one game to completion. The terminal is restored before returning.
pub fn run(config: &ResolvedConfig) -> io::Result<Outcome> {
    let theme = Theme::from_config(&config.theme);
    let mut game = Game::new(config.seed);
    info!("New game:\n{}", game.board());

    let mut terminal = ratatui::try_init()?;
    let outcome = match TerminalModeGuard::new() {
        Ok(_guard) => frame_loop(&mut terminal, &mut game, &theme, config.frame_rate),
        Err(e) => Err(e),
    };
    ratatui::restore();

    if let Ok(outcome) = outcome {
        info!("Game ended: {:?}, max tile {}", outcome, game.board().max_tile());
    }
    outcome
}

fn frame_loop(
    terminal: &mut DefaultTerminal,
    game: &mut Game,
    theme: &Theme,
    frame_rate: u32,
) -> io::Result<Outcome> {
    let mut clock = FrameClock::new(frame_rate);
    debug!("Frame budget {:?}", clock.frame());

    loop {
        terminal.draw(|f| ui::draw_ui(f, game, theme))?;

        if game.is_over() {
            return Ok(Outcome::GameOver);
        }

        if let Some(outcome) = dispatch(game, event::drain_events()?) {
            return Ok(outcome);
        }

        clock.tick();
    }
}

/// Feed one frame's worth of input into the reducer.
///
/// Returns `Some(Outcome::Closed)` when a quit key was seen. Events after a
/// move that ends the game are dropped; the next frame reports it.
fn dispatch(game: &mut Game, events: impl IntoIterator<Item = TuiEvent>) -> Option<Outcome> {
    for event in events {
        let action = match event {
            TuiEvent::Move(direction) => Action::Move(direction),
            TuiEvent::Quit => Action::Quit,
            // The next draw picks up the new size
            TuiEvent::Resize => continue,
        };
        match update(game, action) {
            Effect::Quit => return Some(Outcome::Closed),
            Effect::GameOver => return None,
            Effect::Moved | Effect::None => {}
        }
    }
    None
}
