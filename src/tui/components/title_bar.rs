//! # TitleBar Component
//!
//! Top status bar: the window title plus the reducer's status message.
//!
//! Stateless. Both props come from outside:
//! - `title`: fixed at startup (`WINDOW_TITLE`)
//! - `status_message`: core `Game` state, rewritten on every move
//!
//! ```text
//! 2048 Game - 6x6 | Moved left
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub title: &'a str,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str, status_message: &'a str) -> Self {
        Self {
            title,
            status_message,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.title,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
