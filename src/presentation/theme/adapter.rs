use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Base 16 ANSI palette as most terminals render it.
const ANSI_16: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (170, 0, 0),
    (0, 170, 0),
    (170, 85, 0),
    (0, 0, 170),
    (170, 0, 170),
    (0, 170, 170),
    (170, 170, 170),
    (85, 85, 85),
    (255, 85, 85),
    (85, 255, 85),
    (255, 255, 85),
    (85, 85, 255),
    (255, 85, 255),
    (85, 255, 255),
    (255, 255, 255),
];

pub struct ColorConverter;

impl ColorConverter {
    #[must_use]
    pub fn to_rgb(color: Color) -> (u8, u8, u8) {
        match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Black => ANSI_16[0],
            Color::Red => ANSI_16[1],
            Color::Green => ANSI_16[2],
            Color::Yellow => ANSI_16[3],
            Color::Blue => ANSI_16[4],
            Color::Magenta => ANSI_16[5],
            Color::Cyan => ANSI_16[6],
            Color::Gray => ANSI_16[7],
            Color::DarkGray => ANSI_16[8],
            Color::LightRed => ANSI_16[9],
            Color::LightGreen => ANSI_16[10],
            Color::LightYellow => ANSI_16[11],
            Color::LightBlue => ANSI_16[12],
            Color::LightMagenta => ANSI_16[13],
            Color::LightCyan => ANSI_16[14],
            Color::Indexed(i) => indexed_to_rgb(i),
            _ => ANSI_16[15],
        }
    }

    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = Self::to_rgb(color);
        Rgb::new(r, g, b).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Same hue as `color` with the given lightness and saturation (0.0..=1.0).
    #[must_use]
    pub fn shade(color: Color, lightness: f32, saturation: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.l = lightness.clamp(0.0, 1.0);
        hsl.s = saturation.clamp(0.0, 1.0);
        Self::to_ratatui(hsl)
    }
}

fn indexed_to_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0..=15 => ANSI_16[usize::from(i)],
        16..=231 => {
            let i = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}
