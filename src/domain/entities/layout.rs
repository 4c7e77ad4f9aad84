//! Rendering descriptors attached to slides.

/// How a single series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Area,
}

/// A labeled data point, e.g. `("1939", 4.1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A single labeled line, bar, or area series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            title: title.into(),
            kind,
            y_label: String::new(),
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    #[must_use]
    pub fn points<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.points
            .extend(points.into_iter().map(|(label, value)| ChartPoint::new(label, value)));
        self
    }

    /// Smallest and largest values of the series, `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.value).fold(None, |acc, v| {
            Some(match acc {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            })
        })
    }
}

/// What the content pane shows for a slide.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SlideLayout {
    /// Description, stat cards and key events.
    #[default]
    StatsOnly,
    /// The stats view plus a tab with one or more charts.
    ChartPanel { charts: Vec<ChartSpec> },
}

impl SlideLayout {
    #[must_use]
    pub fn charts(&self) -> &[ChartSpec] {
        match self {
            Self::StatsOnly => &[],
            Self::ChartPanel { charts } => charts,
        }
    }

    #[must_use]
    pub const fn has_tabs(&self) -> bool {
        matches!(self, Self::ChartPanel { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let chart = ChartSpec::new("Население", ChartKind::Line)
            .points([("1926", 2.0), ("1959", 6.0), ("1939", 4.1)]);
        assert_eq!(chart.bounds(), Some((2.0, 6.0)));

        let empty = ChartSpec::new("empty", ChartKind::Bar);
        assert_eq!(empty.bounds(), None);
    }

    #[test]
    fn test_stats_only_has_no_charts() {
        assert!(SlideLayout::StatsOnly.charts().is_empty());
        assert!(!SlideLayout::StatsOnly.has_tabs());

        let panel = SlideLayout::ChartPanel {
            charts: vec![ChartSpec::new("a", ChartKind::Area)],
        };
        assert_eq!(panel.charts().len(), 1);
        assert!(panel.has_tabs());
    }
}
