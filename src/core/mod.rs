//! # Core Game Logic
//!
//! The board, its transitions, and the rules for accepting a move.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board (grid data)    │
//!                    │  • Engine (transitions) │
//!                    │  • Spawner (new tiles)  │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: `Board`, `Direction` and the `SIZE` constant
//! - [`engine`]: `slide_and_merge`, the four moves, terminal detection
//! - [`spawner`]: random tile placement
//! - [`state`]: the `Game` struct — board plus RNG
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings file and CLI resolution

pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod spawner;
pub mod state;

pub use board::{Board, Direction, SIZE, Tile};
