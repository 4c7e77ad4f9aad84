use std::collections::HashMap;

use crate::domain::entities::Glyph;
use crate::domain::ports::IconCatalog;

/// Lucide-style icon names mapped to glyphs every terminal font can draw.
const GLYPHS: &[(&str, &str)] = &[
    ("ChevronLeft", "‹"),
    ("ChevronRight", "›"),
    ("ChevronsLeft", "«"),
    ("ChevronsRight", "»"),
    ("ArrowLeft", "←"),
    ("ArrowRight", "→"),
    ("Circle", "○"),
    ("CircleDot", "◉"),
    ("Dot", "•"),
    ("Users", "♟"),
    ("Map", "▦"),
    ("Calendar", "▤"),
    ("Image", "▣"),
    ("ChartLine", "∿"),
    ("ChartBar", "▇"),
    ("Landmark", "⌂"),
];

/// [`IconCatalog`] backed by a fixed table.
#[derive(Debug, Clone)]
pub struct GlyphCatalog {
    glyphs: HashMap<&'static str, Glyph>,
}

impl GlyphCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::from_table(GLYPHS)
    }

    /// Builds a catalog from a custom `(name, glyph)` table.
    #[must_use]
    pub fn from_table(table: &[(&'static str, &'static str)]) -> Self {
        let glyphs = table
            .iter()
            .map(|&(name, symbol)| (name, Glyph::from_static(symbol)))
            .collect();
        Self { glyphs }
    }
}

impl Default for GlyphCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl IconCatalog for GlyphCatalog {
    fn lookup(&self, name: &str) -> Option<Glyph> {
        self.glyphs.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::IconResolver;
    use std::sync::Arc;

    #[test]
    fn test_lookup_known_names() {
        let catalog = GlyphCatalog::new();
        assert_eq!(catalog.lookup("ChevronLeft"), Some(Glyph::from_static("‹")));
        assert_eq!(catalog.lookup("ChevronRight"), Some(Glyph::from_static("›")));
        assert_eq!(catalog.lookup("chevronleft"), None);
    }

    #[test]
    fn test_resolver_over_builtin_table() {
        let resolver = IconResolver::new(Arc::new(GlyphCatalog::new()));

        assert_eq!(
            resolver.resolve("ChevronLeft", "Circle").map(|g| g.to_string()),
            Some("‹".to_string())
        );
        assert_eq!(
            resolver.resolve("Spaceship", "Circle").map(|g| g.to_string()),
            Some("○".to_string())
        );
        assert_eq!(resolver.resolve("Spaceship", "Rocket"), None);
    }

    #[test]
    fn test_empty_table_resolves_nothing() {
        let resolver = IconResolver::new(Arc::new(GlyphCatalog::from_table(&[])));
        assert_eq!(resolver.resolve_or_default("ChevronLeft"), None);
    }
}
