//! Terminal event polling

use crate::pointer::Position;
use anyhow::Result;
use ratatui::crossterm::event::{
    self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Poll timeout or an event the page ignores
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Left button pressed at a cell
    PointerDown(Position),
    /// Pointer moved to a cell
    PointerMove(Position),
    /// Terminal resize
    Resize(u16, u16),
}

impl From<CrosstermEvent> for Event {
    fn from(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Self::Key(key),
            CrosstermEvent::Mouse(mouse) => from_mouse(mouse),
            CrosstermEvent::Resize(w, h) => Self::Resize(w, h),
            _ => Self::Tick,
        }
    }
}

fn from_mouse(mouse: MouseEvent) -> Event {
    let position = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Event::PointerDown(position),
        MouseEventKind::Moved => Event::PointerMove(position),
        _ => Event::Tick,
    }
}

/// Handler that polls for terminal events
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    tick_rate: Duration,
}

impl Handler {
    /// Create a new event handler with the given tick rate
    #[must_use]
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event
    ///
    /// # Errors
    ///
    /// Returns an error if polling fails
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            Ok(event::read()?.into())
        } else {
            Ok(Event::Tick)
        }
    }

    /// Get the tick rate
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_event_handler_new() {
        let handler = Handler::new(50);
        assert_eq!(handler.tick_rate(), Duration::from_millis(50));
    }

    #[test]
    fn test_event_handler_default() {
        assert_eq!(Handler::default().tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_left_press_becomes_pointer_down() {
        let event = Event::from(mouse(MouseEventKind::Down(MouseButton::Left), 4, 7));
        assert_eq!(event, Event::PointerDown(Position::new(4, 7)));
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let right = Event::from(mouse(MouseEventKind::Down(MouseButton::Right), 4, 7));
        let release = Event::from(mouse(MouseEventKind::Up(MouseButton::Left), 4, 7));
        assert_eq!(right, Event::Tick);
        assert_eq!(release, Event::Tick);
    }

    #[test]
    fn test_move_becomes_pointer_move() {
        let event = Event::from(mouse(MouseEventKind::Moved, 1, 2));
        assert_eq!(event, Event::PointerMove(Position::new(1, 2)));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(Event::from(CrosstermEvent::Key(release)), Event::Tick);

        let press = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            Event::from(CrosstermEvent::Key(press)),
            Event::Key(press)
        );
    }

    #[test]
    fn test_resize_passes_through() {
        assert_eq!(
            Event::from(CrosstermEvent::Resize(80, 24)),
            Event::Resize(80, 24)
        );
    }
}
