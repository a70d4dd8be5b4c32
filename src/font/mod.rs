//! # Font Management
//!
//! The résumé is set entirely in the Helvetica family, one of the 14
//! standard PDF fonts. Standard fonts need no embedding; the viewer
//! supplies the outlines and we only need their advance widths and the
//! WinAnsiEncoding byte for each character.

pub mod metrics;

pub use metrics::StandardFontMetrics;

use serde::{Deserialize, Serialize};

/// The standard faces the layout draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

impl StandardFont {
    /// The PDF name for this font.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
            Self::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Width metrics. Oblique faces share the upright advance widths.
    pub fn metrics(&self) -> StandardFontMetrics {
        match self {
            Self::Helvetica | Self::HelveticaOblique => {
                StandardFontMetrics::new(&metrics::HELVETICA)
            }
            Self::HelveticaBold | Self::HelveticaBoldOblique => {
                StandardFontMetrics::new(&metrics::HELVETICA_BOLD)
            }
        }
    }
}

/// Map a Unicode codepoint to a WinAnsiEncoding byte value.
///
/// WinAnsiEncoding is based on Windows-1252. Most codepoints in
/// 0x20..=0x7E and 0xA0..=0xFF map directly. The 0x80..=0x9F range
/// contains special mappings for smart quotes, bullets, dashes, etc.
pub fn unicode_to_winansi(ch: char) -> Option<u8> {
    let cp = ch as u32;
    if (0x20..=0x7E).contains(&cp) || (0xA0..=0xFF).contains(&cp) {
        return Some(cp as u8);
    }
    match cp {
        0x20AC => Some(0x80), // Euro sign
        0x201A => Some(0x82), // Single low-9 quotation mark
        0x0192 => Some(0x83), // Latin small letter f with hook
        0x201E => Some(0x84), // Double low-9 quotation mark
        0x2026 => Some(0x85), // Horizontal ellipsis
        0x2020 => Some(0x86), // Dagger
        0x2021 => Some(0x87), // Double dagger
        0x02C6 => Some(0x88), // Modifier letter circumflex accent
        0x2030 => Some(0x89), // Per mille sign
        0x0160 => Some(0x8A), // Latin capital letter S with caron
        0x2039 => Some(0x8B), // Single left-pointing angle quotation
        0x0152 => Some(0x8C), // Latin capital ligature OE
        0x017D => Some(0x8E), // Latin capital letter Z with caron
        0x2018 => Some(0x91), // Left single quotation mark
        0x2019 => Some(0x92), // Right single quotation mark
        0x201C => Some(0x93), // Left double quotation mark
        0x201D => Some(0x94), // Right double quotation mark
        0x2022 => Some(0x95), // Bullet
        0x2013 => Some(0x96), // En dash
        0x2014 => Some(0x97), // Em dash
        0x02DC => Some(0x98), // Small tilde
        0x2122 => Some(0x99), // Trade mark sign
        0x0161 => Some(0x9A), // Latin small letter s with caron
        0x203A => Some(0x9B), // Single right-pointing angle quotation
        0x0153 => Some(0x9C), // Latin small ligature oe
        0x017E => Some(0x9E), // Latin small letter z with caron
        0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_wider() {
        let regular = StandardFont::Helvetica.metrics().char_width('A', 12.0).unwrap();
        let bold = StandardFont::HelveticaBold.metrics().char_width('A', 12.0).unwrap();
        assert!(bold > regular, "Bold A should be wider than regular A");
    }

    #[test]
    fn test_oblique_shares_upright_widths() {
        let upright = StandardFont::Helvetica.metrics().measure_string("Résumé", 10.0);
        let oblique = StandardFont::HelveticaOblique.metrics().measure_string("Résumé", 10.0);
        assert_eq!(upright, oblique);
    }

    #[test]
    fn test_pdf_names() {
        assert_eq!(StandardFont::HelveticaBold.pdf_name(), "Helvetica-Bold");
        assert_eq!(StandardFont::HelveticaOblique.pdf_name(), "Helvetica-Oblique");
    }

    #[test]
    fn test_winansi_mapping() {
        assert_eq!(unicode_to_winansi('A'), Some(b'A'));
        assert_eq!(unicode_to_winansi('é'), Some(0xE9));
        assert_eq!(unicode_to_winansi('\u{2022}'), Some(0x95));
        assert_eq!(unicode_to_winansi('\u{2014}'), Some(0x97));
        assert_eq!(unicode_to_winansi('\n'), None);
        assert_eq!(unicode_to_winansi('\u{4E16}'), None);
    }
}
