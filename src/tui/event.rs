use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::board::Direction;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Move(Direction),
    /// Stand-in for the window close button (Esc, q, Ctrl+C).
    Quit,
    Resize,
}

/// Map a key press to an event. Anything unmapped is ignored.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release and repeat events arrive on some platforms; only presses count
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up) => Some(TuiEvent::Move(Direction::Up)),
        (_, KeyCode::Down) => Some(TuiEvent::Move(Direction::Down)),
        (_, KeyCode::Left) => Some(TuiEvent::Move(Direction::Left)),
        (_, KeyCode::Right) => Some(TuiEvent::Move(Direction::Right)),
        _ => None,
    }
}

/// Drain everything queued right now, dropping events we don't handle.
pub fn drain_events() -> io::Result<Vec<TuiEvent>> {
    let mut events = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Some(tui_event) = translate(event::read()?) {
            events.push(tui_event);
        }
    }
    Ok(events)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
