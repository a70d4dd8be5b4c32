//! # Text Layout
//!
//! Text measurement and greedy line breaking.
//!
//! Widths come from whatever backend implements [`Measure`]. A backend that
//! cannot measure a string (a glyph outside its font) does not stop layout:
//! the width is estimated from the character count instead, so wrapping
//! stays deterministic for any input.
//!
//! Line breaking is greedy and word-level. Each explicit newline starts an
//! independent paragraph; inside a paragraph, words are packed onto a line
//! until the next one would overflow. A word wider than the column gets a
//! line of its own and is never split.

pub mod sanitize;

pub use sanitize::sanitize;

use crate::font::StandardFont;

/// Per-character width estimate, in em, for strings the backend can't measure.
pub const ESTIMATED_CHAR_WIDTH: f64 = 0.55;

/// The backend's string-width primitive.
pub trait Measure {
    /// Width of `text` in points, or `None` if the font lacks a glyph.
    fn measure_text(&self, text: &str, font: StandardFont, size: f64) -> Option<f64>;
}

/// Measures with the built-in standard font metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMetrics;

impl Measure for StandardMetrics {
    fn measure_text(&self, text: &str, font: StandardFont, size: f64) -> Option<f64> {
        font.metrics().measure_string(text, size)
    }
}

pub struct TextLayout;

impl Default for TextLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayout {
    pub fn new() -> Self {
        Self
    }

    /// Width of `text` in points, falling back to an estimate.
    pub fn measure_width<M: Measure + ?Sized>(
        &self,
        metrics: &M,
        text: &str,
        font: StandardFont,
        size: f64,
    ) -> f64 {
        match metrics.measure_text(text, font, size) {
            Some(w) => w,
            None => {
                log::debug!("estimating width of unmeasurable text {:?}", text);
                text.chars().count() as f64 * size * ESTIMATED_CHAR_WIDTH
            }
        }
    }

    /// Break `text` into lines no wider than `max_width`.
    ///
    /// Newlines are honored; blank paragraphs yield no lines.
    pub fn wrap<M: Measure + ?Sized>(
        &self,
        metrics: &M,
        text: &str,
        font: StandardFont,
        size: f64,
        max_width: f64,
    ) -> Vec<String> {
        text.split('\n')
            .flat_map(|paragraph| {
                self.flow(metrics, paragraph.split_whitespace(), " ", font, size, max_width)
            })
            .collect()
    }

    /// Greedily pack `tokens`, joined by `separator`, into rows no wider
    /// than `max_width`.
    ///
    /// Before a token is added the row is re-measured with it appended; if
    /// that overflows and the row is not empty, the row is committed and the
    /// token starts the next one. Empty tokens are skipped.
    pub fn flow<'t, M, I>(
        &self,
        metrics: &M,
        tokens: I,
        separator: &str,
        font: StandardFont,
        size: f64,
        max_width: f64,
    ) -> Vec<String>
    where
        M: Measure + ?Sized,
        I: IntoIterator<Item = &'t str>,
    {
        let mut rows = Vec::new();
        let mut row = String::new();

        for token in tokens {
            if token.is_empty() {
                continue;
            }
            if row.is_empty() {
                row.push_str(token);
                continue;
            }
            let candidate = format!("{row}{separator}{token}");
            if self.measure_width(metrics, &candidate, font, size) > max_width {
                rows.push(std::mem::replace(&mut row, token.to_string()));
            } else {
                row = candidate;
            }
        }

        if !row.is_empty() {
            rows.push(row);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every glyph is exactly `size` points wide.
    struct Monospace;

    impl Measure for Monospace {
        fn measure_text(&self, text: &str, _font: StandardFont, size: f64) -> Option<f64> {
            Some(text.chars().count() as f64 * size)
        }
    }

    /// A backend that can't measure anything.
    struct Blind;

    impl Measure for Blind {
        fn measure_text(&self, _: &str, _: StandardFont, _: f64) -> Option<f64> {
            None
        }
    }

    const FONT: StandardFont = StandardFont::Helvetica;

    fn wrap_mono(text: &str, max_chars: usize) -> Vec<String> {
        TextLayout::new().wrap(&Monospace, text, FONT, 1.0, max_chars as f64)
    }

    #[test]
    fn test_single_line() {
        assert_eq!(wrap_mono("Hello", 20), vec!["Hello"]);
    }

    #[test]
    fn test_line_break_at_space() {
        assert_eq!(
            wrap_mono("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        assert_eq!(wrap_mono("abcd efgh", 9), vec!["abcd efgh"]);
    }

    #[test]
    fn test_long_word_gets_own_line_unsplit() {
        assert_eq!(
            wrap_mono("a extraordinarily b", 5),
            vec!["a", "extraordinarily", "b"]
        );
    }

    #[test]
    fn test_explicit_newlines_are_honored() {
        assert_eq!(wrap_mono("Hello\nWorld", 40), vec!["Hello", "World"]);
    }

    #[test]
    fn test_blank_paragraphs_produce_no_lines() {
        assert_eq!(wrap_mono("one\n\n   \ntwo\n", 40), vec!["one", "two"]);
        assert!(wrap_mono("", 40).is_empty());
        assert!(wrap_mono(" \n\t", 40).is_empty());
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(wrap_mono("a   b\tc", 40), vec!["a b c"]);
    }

    #[test]
    fn test_lines_fit_and_words_survive() {
        let text = "Designed and shipped a distributed ingestion pipeline handling \
                    forty thousand events per second across three regions with \
                    zero-downtime deploys and supercalifragilisticexpialidocious tooling";
        let tl = TextLayout::new();
        let m = StandardMetrics;
        for max_width in [40.0, 80.0, 150.0, 300.0] {
            let lines = tl.wrap(&m, text, FONT, 10.0, max_width);
            for line in &lines {
                let w = tl.measure_width(&m, line, FONT, 10.0);
                let single_word = !line.contains(' ');
                assert!(
                    w <= max_width || single_word,
                    "line {line:?} is {w}pt, limit {max_width}pt"
                );
            }
            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
            let original: Vec<&str> = text.split_whitespace().collect();
            assert_eq!(rejoined, original);
        }
    }

    #[test]
    fn test_paragraph_groups_match_nonempty_lines() {
        let text = "first line\n\nsecond line\n  \nthird";
        let tl = TextLayout::new();
        let groups: Vec<Vec<String>> = text
            .split('\n')
            .map(|p| tl.wrap(&StandardMetrics, p, FONT, 10.0, 500.0))
            .filter(|lines| !lines.is_empty())
            .collect();
        let nonempty = text.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(groups.len(), nonempty);
        assert_eq!(tl.wrap(&StandardMetrics, text, FONT, 10.0, 500.0).len(), 3);
    }

    #[test]
    fn test_flow_with_separator() {
        let rows = TextLayout::new().flow(
            &Monospace,
            ["Rust", "Go", "Kotlin", "SQL"],
            " | ",
            FONT,
            1.0,
            12.0,
        );
        assert_eq!(rows, vec!["Rust | Go", "Kotlin | SQL"]);
    }

    #[test]
    fn test_flow_keeps_multi_word_tokens_whole() {
        let rows = TextLayout::new().flow(
            &Monospace,
            ["Machine Learning", "CI"],
            ", ",
            FONT,
            1.0,
            10.0,
        );
        assert_eq!(rows, vec!["Machine Learning", "CI"]);
    }

    #[test]
    fn test_measure_falls_back_to_estimate() {
        let w = TextLayout::new().measure_width(&Blind, "abcd", FONT, 10.0);
        assert!((w - 4.0 * 10.0 * ESTIMATED_CHAR_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn test_unsupported_glyphs_still_wrap() {
        let tl = TextLayout::new();
        let lines = tl.wrap(&StandardMetrics, "你好 世界 你好 世界", FONT, 10.0, 25.0);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_bold_text_wider() {
        let tl = TextLayout::new();
        let regular = tl.measure_width(&StandardMetrics, "ABCDEFG", FONT, 32.0);
        let bold = tl.measure_width(&StandardMetrics, "ABCDEFG", StandardFont::HelveticaBold, 32.0);
        assert!(bold > regular, "bold={bold}, regular={regular}");
    }
}
