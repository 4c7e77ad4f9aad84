//! Slide deck error types.

use thiserror::Error;

/// Deck construction and navigation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("slide catalog must contain at least one slide")]
    EmptyCatalog,

    #[error("slide index {index} is out of range for a deck of {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
}
