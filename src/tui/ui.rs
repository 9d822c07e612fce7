use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::Game;
use crate::tui::component::Component;
use crate::tui::components::{BoardView, TitleBar};
use crate::tui::theme::{Theme, WINDOW_TITLE};

pub fn draw_ui(frame: &mut Frame, game: &Game, theme: &Theme) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, board_area] = layout.areas(frame.area());

    TitleBar::new(WINDOW_TITLE, &game.status_message).render(frame, title_area);
    BoardView::new(game.board(), theme).render(frame, board_area);
}
