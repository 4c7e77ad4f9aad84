//! Symbolic icon name resolution with fallback.

use std::sync::Arc;

use tracing::trace;

use crate::domain::entities::Glyph;
use crate::domain::ports::IconCatalog;

/// Fallback used when callers do not name one.
pub const DEFAULT_FALLBACK_ICON: &str = "Circle";

/// Resolves icon names against an [`IconCatalog`].
///
/// A miss on the requested name falls back to a second name; a miss on both
/// yields no glyph at all. Neither case is an error.
#[derive(Clone)]
pub struct IconResolver {
    catalog: Arc<dyn IconCatalog>,
}

impl IconResolver {
    pub fn new(catalog: Arc<dyn IconCatalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn resolve(&self, name: &str, fallback: &str) -> Option<Glyph> {
        if let Some(glyph) = self.catalog.lookup(name) {
            return Some(glyph);
        }

        trace!(icon = name, fallback, "Icon not in catalog, trying fallback");
        let glyph = self.catalog.lookup(fallback);
        if glyph.is_none() {
            trace!(icon = name, fallback, "Fallback icon not in catalog");
        }
        glyph
    }

    #[must_use]
    pub fn resolve_or_default(&self, name: &str) -> Option<Glyph> {
        self.resolve(name, DEFAULT_FALLBACK_ICON)
    }
}

impl std::fmt::Debug for IconResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconResolver").finish_non_exhaustive()
    }
}
