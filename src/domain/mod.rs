//! Domain layer with core entities, deck state and port definitions.

/// Active slide index.
pub mod deck_state;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;

pub use deck_state::DeckState;
pub use entities::{Glyph, Slide, SlideCatalog, SlideId, SlideLayout};
pub use errors::DeckError;
pub use ports::IconCatalog;
