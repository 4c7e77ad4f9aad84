use crate::domain::entities::Glyph;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::Span,
    widgets::{StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

const PREVIOUS_LABEL: &str = "Назад";
const NEXT_LABEL: &str = "Далее";

/// Something the user can click in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Previous,
    Next,
    Slide(usize),
}

/// Screen regions of the last rendered navigation bar.
#[derive(Debug, Clone, Default)]
pub struct NavBarState {
    previous: Rect,
    next: Rect,
    indicators: Vec<Rect>,
}

impl NavBarState {
    #[must_use]
    pub const fn previous_button(&self) -> Rect {
        self.previous
    }

    #[must_use]
    pub const fn next_button(&self) -> Rect {
        self.next
    }

    #[must_use]
    pub fn indicator(&self, index: usize) -> Option<Rect> {
        self.indicators.get(index).copied()
    }

    #[must_use]
    pub fn hit(&self, position: Position) -> Option<NavTarget> {
        if self.previous.contains(position) {
            return Some(NavTarget::Previous);
        }
        if self.next.contains(position) {
            return Some(NavTarget::Next);
        }
        self.indicators
            .iter()
            .position(|rect| rect.contains(position))
            .map(NavTarget::Slide)
    }
}

#[derive(Default)]
pub struct NavBarStyle {
    pub button: Style,
    pub indicator: Style,
    pub indicator_active: Style,
}

impl NavBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            button: theme.card_value_style,
            indicator: theme.track_style,
            indicator_active: theme.selection_style,
        }
    }
}

/// Previous/next buttons around one indicator per slide.
pub struct NavBar {
    current: usize,
    len: usize,
    previous_icon: Option<Glyph>,
    next_icon: Option<Glyph>,
    indicator_icon: Option<Glyph>,
    active_indicator_icon: Option<Glyph>,
    style: NavBarStyle,
}

impl NavBar {
    #[must_use]
    pub fn new(current: usize, len: usize) -> Self {
        Self {
            current,
            len,
            previous_icon: None,
            next_icon: None,
            indicator_icon: None,
            active_indicator_icon: None,
            style: NavBarStyle::default(),
        }
    }

    #[must_use]
    pub fn button_icons(mut self, previous: Option<Glyph>, next: Option<Glyph>) -> Self {
        self.previous_icon = previous;
        self.next_icon = next;
        self
    }

    #[must_use]
    pub fn indicator_icons(mut self, inactive: Option<Glyph>, active: Option<Glyph>) -> Self {
        self.indicator_icon = inactive;
        self.active_indicator_icon = active;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: NavBarStyle) -> Self {
        self.style = style;
        self
    }

    fn previous_text(&self) -> String {
        match &self.previous_icon {
            Some(icon) => format!(" {icon} {PREVIOUS_LABEL} "),
            None => format!(" {PREVIOUS_LABEL} "),
        }
    }

    fn next_text(&self) -> String {
        match &self.next_icon {
            Some(icon) => format!(" {NEXT_LABEL} {icon} "),
            None => format!(" {NEXT_LABEL} "),
        }
    }

    /// Glyph for the indicator at `index`; the slide number when no icon resolved.
    fn indicator_text(&self, index: usize) -> String {
        let icon = if index == self.current {
            self.active_indicator_icon.as_ref()
        } else {
            self.indicator_icon.as_ref()
        };
        icon.map_or_else(|| (index + 1).to_string(), ToString::to_string)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn text_width(text: &str) -> u16 {
    text.width() as u16
}

impl StatefulWidget for NavBar {
    type State = NavBarState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut NavBarState) {
        *state = NavBarState::default();
        if area.height == 0 || area.width == 0 {
            return;
        }

        let y = area.y + area.height / 2;

        let previous = self.previous_text();
        let previous_width = text_width(&previous).min(area.width);
        state.previous = Rect::new(area.x, y, previous_width, 1);
        Span::styled(previous, self.style.button).render(state.previous, buf);

        let next = self.next_text();
        let next_width = text_width(&next).min(area.width.saturating_sub(previous_width));
        state.next = Rect::new(area.right().saturating_sub(next_width), y, next_width, 1);
        Span::styled(next, self.style.button).render(state.next, buf);

        let labels: Vec<String> = (0..self.len).map(|i| self.indicator_text(i)).collect();
        let total: u16 = labels
            .iter()
            .map(|label| text_width(label))
            .sum::<u16>()
            .saturating_add(u16::try_from(self.len.saturating_sub(1)).unwrap_or(u16::MAX));

        let middle_start = area.x + previous_width;
        let middle_width = area.width.saturating_sub(previous_width + next_width);
        if total > middle_width {
            let position = format!("{} / {}", self.current + 1, self.len);
            let width = text_width(&position);
            if width <= middle_width {
                let x = middle_start + (middle_width - width) / 2;
                Span::styled(position, self.style.indicator_active)
                    .render(Rect::new(x, y, width, 1), buf);
            }
            return;
        }

        let mut x = middle_start + (middle_width - total) / 2;
        for (index, label) in labels.into_iter().enumerate() {
            let width = text_width(&label);
            let style = if index == self.current {
                self.style.indicator_active
            } else {
                self.style.indicator
            };
            let rect = Rect::new(x, y, width, 1);
            Span::styled(label, style).render(rect, buf);
            state.indicators.push(rect);
            x += width + 1;
        }
    }
}
