//! # Board
//!
//! The grid state container. A `Board` is a plain `SIZE × SIZE` array of
//! tile values, cheap to copy, so every move can hand back a fresh board
//! instead of mutating the current one.
//!
//! ```text
//!   col →  0    1    2    3    4    5
//! row 0  [ 2 ][ 0 ][ 0 ][ 0 ][ 0 ][ 0 ]
//! row 1  [ 0 ][ 0 ][ 4 ][ 0 ][ 0 ][ 0 ]
//!  ...
//! ```
//!
//! Cells hold 0 (empty) or a power of two ≥ 2.

use std::fmt;
use std::ops::Index;

/// Board edge length. Fixed at compile time.
pub const SIZE: usize = 6;

/// A single cell value: 0 for empty, otherwise a power of two.
pub type Tile = u64;

/// One row (or column, after a transpose) of the board.
pub type Row = [Tile; SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Row; SIZE],
}

impl Board {
    /// An all-empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [Row; SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[Row; SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[row][col]
    }

    /// Writes a single cell. Only the spawner calls this on a live board.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) {
        self.cells[row][col] = value;
    }

    /// New board with `f` applied to every row.
    pub fn map_rows(&self, f: impl FnMut(Row) -> Row) -> Self {
        Self {
            cells: self.cells.map(f),
        }
    }

    /// Mirror the board across its main diagonal.
    pub fn transpose(&self) -> Self {
        let mut cells = [[0; SIZE]; SIZE];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                cells[c][r] = value;
            }
        }
        Self { cells }
    }

    /// Positions of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.positions().filter(|&(r, c)| self.cells[r][c] == 0).collect()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().flatten().any(|&v| v == 0)
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..SIZE).flat_map(|r| (0..SIZE).map(move |c| (r, c)))
    }
}

impl Index<(usize, usize)> for Board {
    type Output = Tile;

    fn index(&self, (row, col): (usize, usize)) -> &Tile {
        &self.cells[row][col]
    }
}

/// Compact grid dump used in debug logs.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:>5}")?;
            }
        }
        Ok(())
    }
}
