use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBarStyle {
    pub title: Style,
    pub subtitle: Style,
    pub version: Style,
    pub separator: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            title: theme.title_style,
            subtitle: Style::default().fg(theme.accent),
            version: theme.dimmed_style,
            separator: theme.track_style,
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            title: Style::default().add_modifier(Modifier::BOLD),
            subtitle: Style::default().fg(Color::Magenta),
            version: Style::default().fg(Color::DarkGray),
            separator: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Presentation title, subtitle and a separator rule; three rows tall.
pub struct HeaderBar<'a> {
    title: &'a str,
    subtitle: &'a str,
    version: Option<&'a str>,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    pub const HEIGHT: u16 = 3;

    #[must_use]
    pub fn new(title: &'a str, subtitle: &'a str) -> Self {
        Self {
            title,
            subtitle,
            version: None,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn version(mut self, version: &'a str) -> Self {
        self.version = Some(version);
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let title_row = Rect::new(area.x, area.y, area.width, 1);
        Paragraph::new(Line::styled(self.title, self.style.title).centered())
            .render(title_row, buf);

        if let Some(version) = self.version {
            let text = format!(" v{version} ");
            let width = text.width() as u16;
            let title_width = self.title.width() as u16;
            // Only when it cannot overlap the centered title.
            if width + title_width / 2 < area.width / 2 {
                let version_area = Rect::new(area.right() - width, area.y, width, 1);
                Span::styled(text, self.style.version).render(version_area, buf);
            }
        }

        if area.height > 1 {
            let subtitle_row = Rect::new(area.x, area.y + 1, area.width, 1);
            Paragraph::new(Line::styled(self.subtitle, self.style.subtitle).centered())
                .render(subtitle_row, buf);
        }

        if area.height > 2 {
            let y = area.y + 2;
            for x in area.left()..area.right() {
                buf[(x, y)].set_symbol("─").set_style(self.style.separator);
            }
        }
    }
}
