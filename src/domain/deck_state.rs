//! Current-slide state of a deck.

use std::num::NonZeroUsize;

use crate::domain::errors::DeckError;

/// Index of the active slide in a deck of fixed length.
///
/// `current < len` holds after every operation: moving forward and back wraps
/// around, and direct jumps outside the deck are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckState {
    current: usize,
    len: NonZeroUsize,
}

impl DeckState {
    #[must_use]
    pub const fn new(len: NonZeroUsize) -> Self {
        Self { current: 0, len }
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn len(&self) -> NonZeroUsize {
        self.len
    }

    pub const fn next(&mut self) {
        self.current = (self.current + 1) % self.len.get();
    }

    pub const fn previous(&mut self) {
        let len = self.len.get();
        self.current = (self.current + len - 1) % len;
    }

    /// Jumps straight to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] and leaves the state untouched
    /// when `index` is not a slide of this deck.
    pub const fn go_to(&mut self, index: usize) -> Result<(), DeckError> {
        if index >= self.len.get() {
            return Err(DeckError::IndexOutOfRange {
                index,
                len: self.len.get(),
            });
        }
        self.current = index;
        Ok(())
    }

    pub const fn first(&mut self) {
        self.current = 0;
    }

    pub const fn last(&mut self) {
        self.current = self.len.get() - 1;
    }

    /// Fraction of the deck shown so far, `(current + 1) / len`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.len.get() as f64
    }
}
