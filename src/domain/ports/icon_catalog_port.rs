use crate::domain::entities::Glyph;

/// Port for a name-to-glyph icon table maintained outside the deck.
#[cfg_attr(test, mockall::automock)]
pub trait IconCatalog: Send + Sync {
    /// Returns the glyph registered under `name`, if any.
    fn lookup(&self, name: &str) -> Option<Glyph>;
}
