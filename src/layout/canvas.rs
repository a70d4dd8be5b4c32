//! The built-in [`Surface`]: records every draw into [`LayoutPage`]s that
//! the PDF writer serializes afterwards.

use super::surface::{Rect, Surface};
use super::{DrawCommand, LayoutElement, LayoutPage};
use crate::font::StandardFont;
use crate::style::{Color, TextStyle};
use crate::text::{Measure, StandardMetrics, TextLayout};

pub struct Canvas {
    width: f64,
    height: f64,
    pages: Vec<LayoutPage>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pages: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[LayoutPage] {
        &self.pages
    }

    /// Finish recording. Trailing pages nothing was drawn on are dropped;
    /// the first page is always kept.
    pub fn into_pages(mut self) -> Vec<LayoutPage> {
        while self.pages.len() > 1 && self.pages.last().is_some_and(|p| p.elements.is_empty()) {
            self.pages.pop();
            log::debug!("dropped empty trailing page {}", self.pages.len() + 1);
        }
        self.pages
    }

    fn page_mut(&mut self, page: usize) -> &mut LayoutPage {
        // Pad rather than panic on an index this canvas never handed out.
        while self.pages.len() <= page {
            self.new_page();
        }
        &mut self.pages[page]
    }
}

impl Measure for Canvas {
    fn measure_text(&self, text: &str, font: StandardFont, size: f64) -> Option<f64> {
        StandardMetrics.measure_text(text, font, size)
    }
}

impl Surface for Canvas {
    fn new_page(&mut self) -> usize {
        self.pages.push(LayoutPage {
            width: self.width,
            height: self.height,
            elements: Vec::new(),
        });
        self.pages.len() - 1
    }

    fn fill_rect(&mut self, page: usize, rect: Rect, color: Color) {
        self.page_mut(page).elements.push(LayoutElement {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            draw: DrawCommand::Rect { color },
        });
    }

    fn draw_text(&mut self, page: usize, x: f64, baseline: f64, text: &str, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let width = TextLayout::new().measure_width(&*self, text, style.font, style.size);
        self.page_mut(page).elements.push(LayoutElement {
            x,
            y: baseline - style.size,
            width,
            height: style.size,
            draw: DrawCommand::Text {
                text: text.to_string(),
                baseline,
                style: *style,
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Theme;

    #[test]
    fn test_records_draws_per_page() {
        let mut canvas = Canvas::new(595.28, 841.89);
        let p0 = canvas.new_page();
        let p1 = canvas.new_page();
        canvas.fill_rect(p0, Rect::new(0.0, 0.0, 595.28, 130.0), Color::BLACK);
        canvas.draw_text(p1, 48.0, 60.0, "Hello", &Theme::default().body());

        let pages = canvas.into_pages();
        assert_eq!(pages.len(), 2);
        assert!(matches!(pages[0].elements[0].draw, DrawCommand::Rect { .. }));
        let text = &pages[1].elements[0];
        assert_eq!(text.y, 50.0);
        assert!(text.width > 0.0);
    }

    #[test]
    fn test_trailing_empty_pages_are_dropped() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let p0 = canvas.new_page();
        canvas.fill_rect(p0, Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        canvas.new_page();
        canvas.new_page();
        assert_eq!(canvas.into_pages().len(), 1);
    }

    #[test]
    fn test_blank_first_page_is_kept() {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.new_page();
        assert_eq!(canvas.into_pages().len(), 1);
    }

    #[test]
    fn test_empty_text_is_not_recorded() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let p = canvas.new_page();
        canvas.draw_text(p, 0.0, 20.0, "", &Theme::default().body());
        assert!(canvas.pages()[0].elements.is_empty());
    }
}
