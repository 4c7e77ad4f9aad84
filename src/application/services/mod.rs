pub mod icon_resolver;
pub mod slide_deck;

pub use icon_resolver::{DEFAULT_FALLBACK_ICON, IconResolver};
pub use slide_deck::SlideDeck;
