//! 2048 on a 6x6 board, played in the terminal.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
