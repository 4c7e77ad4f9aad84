use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

const FILLED: &str = "━";
const TRACK: &str = "─";

/// One-line bar filled to a fraction of its width.
pub struct ProgressBar {
    ratio: f64,
    filled_style: Style,
    track_style: Style,
}

impl ProgressBar {
    /// `ratio` is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            filled_style: Style::default(),
            track_style: Style::default(),
        }
    }

    #[must_use]
    pub const fn filled_style(mut self, style: Style) -> Self {
        self.filled_style = style;
        self
    }

    #[must_use]
    pub const fn track_style(mut self, style: Style) -> Self {
        self.track_style = style;
        self
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn filled_width(&self, width: u16) -> u16 {
        (f64::from(width) * self.ratio).round() as u16
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let filled = self.filled_width(area.width);
        for (offset, x) in (area.left()..area.right()).enumerate() {
            let (symbol, style) = if offset < usize::from(filled) {
                (FILLED, self.filled_style)
            } else {
                (TRACK, self.track_style)
            };
            buf[(x, area.y)].set_symbol(symbol).set_style(style);
        }
    }
}
