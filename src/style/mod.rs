//! # Style System
//!
//! Colours, text styles and the résumé theme. The engine does not cascade
//! anything: each block carries the concrete [`TextStyle`] it is drawn with,
//! picked from the [`Theme`] by the content renderers.

use serde::{Deserialize, Deserializer, Serialize};

use crate::font::StandardFont;

/// An RGBA colour with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64, // 0.0 - 1.0
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a colour from 8-bit channels.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Parse `#rgb` or `#rrggbb`. Malformed input yields black.
    pub fn hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        let (r, g, b) = match hex.len() {
            3 if hex.is_ascii() => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).unwrap_or(0);
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).unwrap_or(0);
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).unwrap_or(0);
                (r, g, b)
            }
            6 if hex.is_ascii() => {
                let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                (r, g, b)
            }
            _ => (0, 0, 0),
        };
        Self::rgb8(r, g, b)
    }
}

/// Colours may be written in configuration either as `"#0f2850"` or as
/// `{ "r": 0.06, "g": 0.16, "b": 0.31 }`.
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Rgba {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "opaque")]
                a: f64,
            },
        }

        fn opaque() -> f64 {
            1.0
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Color::hex(&s),
            Repr::Rgba { r, g, b, a } => Color { r, g, b, a },
        })
    }
}

/// Everything needed to measure and paint one run of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub font: StandardFont,
    pub size: f64,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font: StandardFont, size: f64, color: Color) -> Self {
        Self { font, size, color }
    }

    /// Vertical advance of one line in this style.
    pub fn line_height(&self) -> f64 {
        self.size + 4.0
    }
}

/// Résumé colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    /// Header band fill.
    pub header_background: Color,
    /// Candidate name in the header.
    pub header_name: Color,
    /// Job title in the header.
    pub header_title: Color,
    /// Contact line in the header.
    pub header_contact: Color,
    /// Section titles and their rule.
    pub accent: Color,
    /// Body text.
    pub text: Color,
    /// Dates, roles and other secondary labels.
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header_background: Color::rgb8(15, 40, 80),
            header_name: Color::WHITE,
            header_title: Color::rgb8(186, 209, 255),
            header_contact: Color::rgb8(209, 224, 255),
            accent: Color::rgb8(37, 99, 235),
            text: Color::rgb8(17, 24, 39),
            muted: Color::rgb8(107, 114, 128),
        }
    }
}

impl Theme {
    pub fn body(&self) -> TextStyle {
        TextStyle::new(StandardFont::Helvetica, 10.0, self.text)
    }

    pub fn body_italic(&self) -> TextStyle {
        TextStyle::new(StandardFont::HelveticaOblique, 10.0, self.text)
    }

    pub fn label(&self) -> TextStyle {
        TextStyle::new(StandardFont::HelveticaBold, 11.0, self.text)
    }

    pub fn secondary(&self) -> TextStyle {
        TextStyle::new(StandardFont::Helvetica, 10.0, self.muted)
    }

    pub fn secondary_italic(&self) -> TextStyle {
        TextStyle::new(StandardFont::HelveticaOblique, 10.0, self.muted)
    }

    pub fn section_title(&self) -> TextStyle {
        TextStyle::new(StandardFont::HelveticaBold, 11.0, self.accent)
    }

    pub fn bullet_glyph(&self) -> TextStyle {
        TextStyle::new(StandardFont::HelveticaBold, 10.0, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parsing() {
        let c = Color::hex("#0f2850");
        assert!((c.r - 15.0 / 255.0).abs() < 1e-9);
        assert!((c.g - 40.0 / 255.0).abs() < 1e-9);
        assert!((c.b - 80.0 / 255.0).abs() < 1e-9);

        let short = Color::hex("#fff");
        assert_eq!(short, Color::WHITE);

        assert_eq!(Color::hex("nonsense"), Color::BLACK);
    }

    #[test]
    fn test_color_deserializes_from_hex_or_object() {
        let hex: Color = serde_json::from_str("\"#2563eb\"").unwrap();
        assert_eq!(hex, Color::rgb8(37, 99, 235));

        let obj: Color = serde_json::from_str(r#"{"r": 1, "g": 0.5, "b": 0}"#).unwrap();
        assert_eq!(obj, Color::rgb(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_partial_theme_keeps_defaults() {
        let theme: Theme = serde_json::from_str(r##"{"accent": "#ff0000"}"##).unwrap();
        assert_eq!(theme.accent, Color::rgb8(255, 0, 0));
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    fn test_line_height_is_size_plus_four() {
        let style = Theme::default().body();
        assert_eq!(style.line_height(), 14.0);
    }
}
