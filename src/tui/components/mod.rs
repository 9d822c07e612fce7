//! # TUI Components
//!
//! Both components are stateless and props-based: they borrow what they draw
//! and are rebuilt every frame.
//!
//! - `TitleBar`: window title and status message
//! - `BoardView`: the coloured grid with tile numerals
//!
//! Components receive external data as props, never by reaching into global
//! state:
//!
//! ```rust,ignore
//! BoardView::new(game.board(), &theme).render(frame, board_area);
//! ```

mod board_view;
mod title_bar;

pub use board_view::BoardView;
pub use title_bar::TitleBar;
