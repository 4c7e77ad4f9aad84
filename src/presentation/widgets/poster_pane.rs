use crate::domain::entities::{Glyph, Slide};
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

#[derive(Default)]
pub struct PosterPaneStyle {
    pub frame: Style,
    pub caption: Style,
    pub badge: Style,
    pub title: Style,
}

impl PosterPaneStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            frame: theme.card_border_style,
            caption: theme.dimmed_style,
            badge: theme.badge_style,
            title: theme.title_style,
        }
    }
}

/// Stand-in for the slide photograph: image source, period badge and title.
pub struct PosterPane<'a> {
    slide: &'a Slide,
    icon: Option<Glyph>,
    style: PosterPaneStyle,
}

impl<'a> PosterPane<'a> {
    #[must_use]
    pub fn new(slide: &'a Slide) -> Self {
        Self {
            slide,
            icon: None,
            style: PosterPaneStyle::default(),
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: Option<Glyph>) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: PosterPaneStyle) -> Self {
        self.style = style;
        self
    }

    fn caption(&self) -> Line<'a> {
        let mut spans = Vec::new();
        if let Some(icon) = &self.icon {
            spans.push(Span::raw(format!("{icon} ")));
        }
        spans.push(Span::raw(self.slide.image_host().unwrap_or("")));
        Line::from(spans).style(self.style.caption).centered()
    }
}

impl Widget for PosterPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.style.frame);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [_, caption_area, _, badge_area, title_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(inner);

        Paragraph::new(self.caption()).render(caption_area, buf);

        let badge = Line::from(vec![
            Span::raw(" "),
            Span::styled(format!(" {} ", self.slide.period), self.style.badge),
        ]);
        Paragraph::new(badge).render(badge_area, buf);

        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(self.slide.title.as_str(), self.style.title),
        ]))
        .wrap(Wrap { trim: false })
        .render(title_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_poster_shows_period_title_and_source() {
        let slide = Slide::new(1, "19 век", "Москва Империи")
            .image("https://images.unsplash.com/photo-1513326738677?w=800");
        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);

        PosterPane::new(&slide)
            .icon(Some(Glyph::from_static("▣")))
            .render(area, &mut buf);

        let rows = rows(&buf);
        assert!(rows.iter().any(|r| r.contains("▣ images.unsplash.com")));
        assert!(rows.iter().any(|r| r.contains(" 19 век ")));
        assert!(rows.iter().any(|r| r.contains("Москва Империи")));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let slide = Slide::new(1, "19 век", "Москва Империи");
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        PosterPane::new(&slide).render(area, &mut buf);
    }
}
