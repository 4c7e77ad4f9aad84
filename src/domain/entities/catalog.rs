use std::collections::HashMap;
use std::num::NonZeroUsize;

use super::{Slide, SlideId, SlideLayout};
use crate::domain::errors::DeckError;

static STATS_ONLY: SlideLayout = SlideLayout::StatsOnly;

/// Ordered, non-empty set of slides and their rendering descriptors.
#[derive(Debug, Clone)]
pub struct SlideCatalog {
    slides: Vec<Slide>,
    layouts: HashMap<SlideId, SlideLayout>,
}

impl SlideCatalog {
    /// Builds a catalog from an ordered list of slides.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyCatalog`] when `slides` is empty.
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::EmptyCatalog);
        }

        Ok(Self {
            slides,
            layouts: HashMap::new(),
        })
    }

    /// Attaches a rendering descriptor to the slide with `id`.
    #[must_use]
    pub fn with_layout(mut self, id: SlideId, layout: SlideLayout) -> Self {
        self.layouts.insert(id, layout);
        self
    }

    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        // Checked in `new`; never shrinks afterwards.
        NonZeroUsize::new(self.slides.len()).unwrap_or(NonZeroUsize::MIN)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Rendering descriptor for `id`; slides without one render stats only.
    #[must_use]
    pub fn layout(&self, id: SlideId) -> &SlideLayout {
        self.layouts.get(&id).unwrap_or(&STATS_ONLY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ChartKind, ChartSpec};

    #[test]
    fn test_empty_catalog_is_rejected() {
        let result = SlideCatalog::new(Vec::new());
        assert!(matches!(result, Err(DeckError::EmptyCatalog)));
    }

    #[test]
    fn test_layout_lookup_is_total() {
        let catalog = SlideCatalog::new(vec![Slide::new(1, "a", "A"), Slide::new(2, "b", "B")])
            .unwrap()
            .with_layout(
                SlideId::new(2),
                SlideLayout::ChartPanel {
                    charts: vec![ChartSpec::new("c", ChartKind::Bar)],
                },
            );

        assert_eq!(catalog.len().get(), 2);
        assert_eq!(catalog.layout(SlideId::new(1)), &SlideLayout::StatsOnly);
        assert!(catalog.layout(SlideId::new(2)).has_tabs());
        assert_eq!(catalog.layout(SlideId::new(99)), &SlideLayout::StatsOnly);
    }
}
