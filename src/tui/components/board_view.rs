//! # BoardView Component
//!
//! Draws the grid: one filled rectangle per cell, coloured by tile value,
//! with the numeral centred on non-empty cells.
//!
//! The canvas is `BOARD_WIDTH × BOARD_HEIGHT` terminal cells, centred in the
//! given area and clipped when the terminal is smaller. Everything around
//! the canvas is painted with the theme background.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::board::{Board, Tile};
use crate::tui::component::Component;
use crate::tui::theme::{BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH, Theme};

pub struct BoardView<'a> {
    pub board: &'a Board,
    pub theme: &'a Theme,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, theme: &'a Theme) -> Self {
        Self { board, theme }
    }

    fn render_cell(&self, frame: &mut Frame, area: Rect, cell: Rect, value: Tile) {
        let fill = self.theme.tile_color(value);
        let visible = cell.intersection(area);
        if visible.is_empty() {
            return;
        }
        frame.render_widget(Block::new().style(Style::default().bg(fill)), visible);

        if value == 0 {
            return;
        }
        let label = Rect::new(cell.x, cell.y + cell.height / 2, cell.width, 1).intersection(area);
        if label.is_empty() {
            return;
        }
        let numeral = Paragraph::new(value.to_string())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.theme.text_color(value))
                    .bg(fill)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(numeral, label);
    }
}

impl Component for BoardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Block::new().style(Style::default().bg(self.theme.background)),
            area,
        );

        let canvas = centered_canvas(area);
        for (r, row) in self.board.rows().iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let cell = Rect::new(
                    canvas.x + c as u16 * CELL_WIDTH,
                    canvas.y + r as u16 * CELL_HEIGHT,
                    CELL_WIDTH,
                    CELL_HEIGHT,
                );
                self.render_cell(frame, area, cell, value);
            }
        }
    }
}

/// Top-left aligned canvas rect, centred in `area` when there is room.
fn centered_canvas(area: Rect) -> Rect {
    Rect::new(
        area.x + area.width.saturating_sub(BOARD_WIDTH) / 2,
        area.y + area.height.saturating_sub(BOARD_HEIGHT) / 2,
        BOARD_WIDTH,
        BOARD_HEIGHT,
    )
}
