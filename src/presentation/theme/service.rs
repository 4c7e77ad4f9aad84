use super::adapter::ColorConverter;
use crate::infrastructure::config::{ThemeConfig, ThemeMode};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

const BACKGROUND_QUERY_TIMEOUT: Duration = Duration::from_millis(100);
const DEFAULT_ACCENT: Color = Color::Rgb(216, 180, 254);

/// Styles shared by every widget of the deck screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub base_style: Style,
    pub dimmed_style: Style,
    pub title_style: Style,
    pub badge_style: Style,
    pub card_border_style: Style,
    pub card_value_style: Style,
    pub card_label_style: Style,
    pub selection_style: Style,
    pub track_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(DEFAULT_ACCENT, ThemeMode::Dark)
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color_str: &str, mode: ThemeMode) -> Self {
        Self::from_color(parse_color(accent_color_str), mode)
    }

    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(&config.accent_color, resolve_mode(config.mode))
    }

    /// Builds the palette; `Auto` is treated as `Dark` here, resolve it first.
    #[must_use]
    pub fn from_color(accent: Color, mode: ThemeMode) -> Self {
        let light = mode == ThemeMode::Light;

        let (text, card_bg_l, muted_l) = if light {
            (Color::Black, 0.92, 0.35)
        } else {
            (Color::White, 0.12, 0.75)
        };

        let card_bg = ColorConverter::shade(accent, card_bg_l, 0.4);
        let muted = ColorConverter::shade(accent, muted_l, 0.5);
        let track = ColorConverter::shade(accent, if light { 0.8 } else { 0.25 }, 0.2);

        Self {
            accent,
            base_style: Style::default().fg(text),
            dimmed_style: Style::default().fg(Color::DarkGray),
            title_style: Style::default().fg(text).add_modifier(Modifier::BOLD),
            badge_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_border_style: Style::default().fg(muted).bg(card_bg),
            card_value_style: Style::default()
                .fg(accent)
                .bg(card_bg)
                .add_modifier(Modifier::BOLD),
            card_label_style: Style::default().fg(muted).bg(card_bg),
            selection_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            track_style: Style::default().fg(track),
        }
    }
}

/// Resolves `Auto` by asking the terminal for its background color.
#[must_use]
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    if mode != ThemeMode::Auto {
        return mode;
    }

    match termbg::theme(BACKGROUND_QUERY_TIMEOUT) {
        Ok(termbg::Theme::Light) => {
            debug!("Terminal background detected as light");
            ThemeMode::Light
        }
        Ok(termbg::Theme::Dark) => ThemeMode::Dark,
        Err(e) => {
            warn!(error = %e, "Could not detect terminal background, using dark theme");
            ThemeMode::Dark
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some((r, g, b)) = parse_hex_color(s) {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "purple" | "violet" => DEFAULT_ACCENT,
        "orange" => Color::Indexed(208),
        _ => {
            warn!(color = s, "Unknown accent color, using default");
            DEFAULT_ACCENT
        }
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some((
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let double = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            Some((double(0)?, double(1)?, double(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("purple"), DEFAULT_ACCENT);
        assert_eq!(parse_color("Invalid"), DEFAULT_ACCENT);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color("123456"), None);
    }

    #[test]
    fn test_explicit_modes_skip_detection() {
        assert_eq!(resolve_mode(ThemeMode::Dark), ThemeMode::Dark);
        assert_eq!(resolve_mode(ThemeMode::Light), ThemeMode::Light);
    }

    #[test]
    fn test_light_mode_uses_dark_text() {
        let theme = Theme::from_color(Color::Cyan, ThemeMode::Light);
        assert_eq!(theme.base_style.fg, Some(Color::Black));

        let theme = Theme::from_color(Color::Cyan, ThemeMode::Dark);
        assert_eq!(theme.base_style.fg, Some(Color::White));
    }
}
