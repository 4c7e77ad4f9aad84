use crate::domain::entities::{Glyph, Slide};
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

const POPULATION_LABEL: &str = "Население";
const AREA_LABEL: &str = "Площадь";
const EVENTS_HEADING: &str = "Ключевые события";
const CARD_HEIGHT: u16 = 4;

#[derive(Default)]
pub struct StatsViewStyle {
    pub description: Style,
    pub card_border: Style,
    pub card_value: Style,
    pub card_label: Style,
    pub heading: Style,
    pub bullet: Style,
    pub event: Style,
}

impl StatsViewStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            description: theme.base_style,
            card_border: theme.card_border_style,
            card_value: theme.card_value_style,
            card_label: theme.card_label_style,
            heading: theme.selection_style,
            bullet: theme.selection_style,
            event: theme.base_style,
        }
    }
}

/// Description, population and area cards, and the key events of a slide.
pub struct StatsView<'a> {
    slide: &'a Slide,
    bullet: Option<Glyph>,
    style: StatsViewStyle,
}

impl<'a> StatsView<'a> {
    #[must_use]
    pub fn new(slide: &'a Slide) -> Self {
        Self {
            slide,
            bullet: None,
            style: StatsViewStyle::default(),
        }
    }

    #[must_use]
    pub fn bullet(mut self, bullet: Option<Glyph>) -> Self {
        self.bullet = bullet;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: StatsViewStyle) -> Self {
        self.style = style;
        self
    }

    fn render_card(&self, value: &str, label: &str, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.style.card_border)
            .style(self.style.card_border);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(vec![
            Line::styled(value, self.style.card_value).centered(),
            Line::styled(label, self.style.card_label).centered(),
        ])
        .render(inner, buf);
    }

    fn event_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::styled(EVENTS_HEADING, self.style.heading), Line::raw("")];
        lines.extend(self.slide.stats.key_events.iter().map(|event| {
            let mut spans = Vec::with_capacity(2);
            if let Some(bullet) = &self.bullet {
                spans.push(Span::styled(format!("{bullet} "), self.style.bullet));
            }
            spans.push(Span::styled(event.as_str(), self.style.event));
            Line::from(spans)
        }));
        lines
    }
}

/// Rows for the wrapped description plus one spare row for word-wrap slack
/// that doubles as the gap above the cards.
#[allow(clippy::cast_possible_truncation)]
fn description_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let text_width = text.width().min(usize::from(u16::MAX)) as u16;
    text_width.div_ceil(width) + 1
}

impl Widget for StatsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let description = Paragraph::new(self.slide.description.as_str())
            .style(self.style.description)
            .wrap(Wrap { trim: true });

        let [description_area, cards_area, _, events_area] = Layout::vertical([
            Constraint::Length(description_height(&self.slide.description, area.width)),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        description.render(description_area, buf);

        let [population_area, area_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(2)
                .areas(cards_area);
        self.render_card(&self.slide.stats.population, POPULATION_LABEL, population_area, buf);
        self.render_card(&self.slide.stats.area, AREA_LABEL, area_area, buf);

        Paragraph::new(self.event_lines())
            .wrap(Wrap { trim: false })
            .render(events_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SlideStats;

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn slide() -> Slide {
        Slide::new(3, "1917-1991", "Советская Москва")
            .description("Столица СССР.")
            .stats(SlideStats::new("~8,9 млн", "~1000 км²").with_events([
                "1935 - Метрополитен",
                "1980 - Олимпиада",
            ]))
    }

    #[test]
    fn test_renders_cards_and_events_in_order() {
        let slide = slide();
        let area = Rect::new(0, 0, 50, 16);
        let mut buf = Buffer::empty(area);

        StatsView::new(&slide)
            .bullet(Some(Glyph::from_static("•")))
            .render(area, &mut buf);

        let rows = rows(&buf);
        let find = |needle: &str| rows.iter().position(|r| r.contains(needle));

        assert_eq!(find("Столица СССР."), Some(0));
        assert!(find("~8,9 млн").is_some());
        assert!(find("~1000 км²").is_some());
        assert_eq!(find("Население"), find("Площадь"));

        let heading = find("Ключевые события").unwrap();
        let metro = find("• 1935 - Метрополитен").unwrap();
        let olympics = find("• 1980 - Олимпиада").unwrap();
        assert!(heading < metro && metro < olympics);
    }

    #[test]
    fn test_description_height() {
        assert_eq!(description_height("", 10), 1);
        assert_eq!(description_height("12345", 10), 2);
        assert_eq!(description_height("12345678901", 10), 3);
        assert_eq!(description_height("text", 0), 0);
    }

    #[test]
    fn test_no_bullet_glyph_renders_plain_events() {
        let slide = slide();
        let area = Rect::new(0, 0, 50, 16);
        let mut buf = Buffer::empty(area);

        StatsView::new(&slide).render(area, &mut buf);

        let rows = rows(&buf);
        assert!(rows.iter().any(|r| r.starts_with("1935 - Метрополитен")));
    }
}
