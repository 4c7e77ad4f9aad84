//! UI screens.

mod app;
mod deck_screen;

pub use app::App;
pub use deck_screen::{ContentTab, DeckScreen, DeckScreenState};
