//! Built-in icon catalog.

mod glyph_catalog;

pub use glyph_catalog::GlyphCatalog;
