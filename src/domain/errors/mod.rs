//! Domain error types.

mod deck_error;

pub use deck_error::DeckError;
