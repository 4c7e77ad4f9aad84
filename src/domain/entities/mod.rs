//! Domain entity definitions.

mod catalog;
mod glyph;
mod layout;
mod slide;

pub use catalog::SlideCatalog;
pub use glyph::Glyph;
pub use layout::{ChartKind, ChartPoint, ChartSpec, SlideLayout};
pub use slide::{Slide, SlideId, SlideStats};
