//! Slide navigation over a fixed catalog.

use std::sync::Arc;

use tracing::debug;

use crate::domain::DeckState;
use crate::domain::entities::{Slide, SlideCatalog, SlideLayout};
use crate::domain::errors::DeckError;

/// Owns the active slide index and selects what to render for it.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    catalog: Arc<SlideCatalog>,
    state: DeckState,
}

impl SlideDeck {
    #[must_use]
    pub fn new(catalog: Arc<SlideCatalog>) -> Self {
        let state = DeckState::new(catalog.len());
        Self { catalog, state }
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.state.current()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len().get()
    }

    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        let index = self.state.current();
        // DeckState keeps `index < len`, and the catalog is the source of `len`.
        &self.catalog.slides()[index]
    }

    #[must_use]
    pub fn current_layout(&self) -> &SlideLayout {
        self.catalog.layout(self.current_slide().id)
    }

    pub fn next(&mut self) {
        let from = self.state.current();
        self.state.next();
        debug!(from, to = self.state.current(), "Next slide");
    }

    pub fn previous(&mut self) {
        let from = self.state.current();
        self.state.previous();
        debug!(from, to = self.state.current(), "Previous slide");
    }

    /// Shows the slide at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] when `index` is past the last
    /// slide; the current slide stays as it was.
    pub fn go_to(&mut self, index: usize) -> Result<(), DeckError> {
        let from = self.state.current();
        self.state.go_to(index)?;
        debug!(from, to = index, "Jumped to slide");
        Ok(())
    }

    pub fn first(&mut self) {
        let from = self.state.current();
        self.state.first();
        debug!(from, to = 0, "First slide");
    }

    pub fn last(&mut self) {
        let from = self.state.current();
        self.state.last();
        debug!(from, to = self.state.current(), "Last slide");
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    /// Human readable position, e.g. `2 / 5`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.state.current() + 1, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ChartKind, ChartSpec, SlideId};

    fn deck() -> SlideDeck {
        let slides = (1..=5)
            .map(|id| Slide::new(id, format!("period {id}"), format!("title {id}")))
            .collect();
        let catalog = SlideCatalog::new(slides).unwrap().with_layout(
            SlideId::new(3),
            SlideLayout::ChartPanel {
                charts: vec![ChartSpec::new("chart", ChartKind::Line)],
            },
        );
        SlideDeck::new(Arc::new(catalog))
    }

    #[test]
    fn test_current_slide_follows_navigation() {
        let mut deck = deck();
        assert_eq!(deck.current_slide().title, "title 1");

        deck.next();
        assert_eq!(deck.current_slide().title, "title 2");

        deck.previous();
        deck.previous();
        assert_eq!(deck.current_slide().title, "title 5");
    }

    #[test]
    fn test_layout_follows_current_slide() {
        let mut deck = deck();
        assert_eq!(deck.current_layout(), &SlideLayout::StatsOnly);

        deck.go_to(2).unwrap();
        assert!(deck.current_layout().has_tabs());
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        let mut deck = deck();
        deck.go_to(3).unwrap();
        assert!(deck.go_to(7).is_err());
        assert_eq!(deck.current_index(), 3);
    }

    #[test]
    fn test_position_label() {
        let mut deck = deck();
        assert_eq!(deck.position_label(), "1 / 5");
        deck.last();
        assert_eq!(deck.position_label(), "5 / 5");
        deck.first();
        assert_eq!(deck.position_label(), "1 / 5");
    }
}
