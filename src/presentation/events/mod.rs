//! Event handling.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing changed.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed and the screen needs a redraw.
    Consumed,
}

/// Terminal input reduced to what the deck reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Click(Position),
    Resize,
    Ignored,
}

impl From<Event> for InputEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::Key(key),
            Event::Mouse(mouse) => left_click(&mouse).map_or(Self::Ignored, Self::Click),
            Event::Resize(..) => Self::Resize,
            _ => Self::Ignored,
        }
    }
}

/// Position of a left button press, if `mouse` is one.
#[must_use]
pub fn left_click(mouse: &MouseEvent) -> Option<Position> {
    matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
        .then(|| Position::new(mouse.column, mouse.row))
}

/// Checks if key is a quit event that cannot be rebound.
#[must_use]
pub fn is_force_quit_event(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}
