use std::fmt;

/// Stable identifier of a slide within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(u32);

impl SlideId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Headline figures shown on the stat cards of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideStats {
    pub population: String,
    pub area: String,
    pub key_events: Vec<String>,
}

impl SlideStats {
    pub fn new(population: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            population: population.into(),
            area: area.into(),
            key_events: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_events.extend(events.into_iter().map(Into::into));
        self
    }
}

/// One screen of the presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: SlideId,
    pub period: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub stats: SlideStats,
}

impl Slide {
    pub fn new(id: u32, period: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: SlideId::new(id),
            period: period.into(),
            title: title.into(),
            description: String::new(),
            image: String::new(),
            stats: SlideStats::new("", ""),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into();
        self
    }

    #[must_use]
    pub fn stats(mut self, stats: SlideStats) -> Self {
        self.stats = stats;
        self
    }

    /// Host part of the image URL, used as a caption on the poster pane.
    #[must_use]
    pub fn image_host(&self) -> Option<&str> {
        let rest = self
            .image
            .strip_prefix("https://")
            .or_else(|| self.image.strip_prefix("http://"))?;
        rest.split(['/', '?']).next().filter(|host| !host.is_empty())
    }
}
