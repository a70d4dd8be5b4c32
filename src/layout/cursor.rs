//! # Page Cursor
//!
//! The write position of a layout pass: which page is active and how far
//! down it content has reached. The cursor is a plain `Copy` value. Every
//! drawing routine takes one and hands back the advanced one, so the only
//! state a page break touches is the value in your hand.

use serde::Serialize;

use super::page_break::{decide_break, BreakDecision};
use super::surface::Surface;
use crate::config::Edges;

/// Fixed page geometry for a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: Edges,
}

impl PageGeometry {
    pub fn content_left(&self) -> f64 {
        self.margin.left
    }

    pub fn content_right(&self) -> f64 {
        self.width - self.margin.right
    }

    pub fn content_width(&self) -> f64 {
        self.width - self.margin.horizontal()
    }

    /// Where content starts on a continuation page.
    pub fn content_top(&self) -> f64 {
        self.margin.top
    }

    /// Nothing may extend below this line.
    pub fn printable_bottom(&self) -> f64 {
        self.height - self.margin.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    geometry: PageGeometry,
    page: usize,
    y: f64,
}

impl PageCursor {
    /// A cursor on `page` at vertical offset `y` from the page top.
    pub fn new(geometry: PageGeometry, page: usize, y: f64) -> Self {
        Self { geometry, page, y }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Index of the page draws should target.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Distance from the top of the page to the next free line.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Space left above the bottom margin. Negative after an oversized draw.
    pub fn remaining(&self) -> f64 {
        self.geometry.printable_bottom() - self.y
    }

    /// True when nothing has been placed on this continuation page yet.
    pub fn at_page_top(&self) -> bool {
        self.y <= self.geometry.content_top()
    }

    /// Make sure `height` points fit below the cursor, starting a new page
    /// on `surface` when they don't.
    pub fn ensure_space<S: Surface + ?Sized>(self, surface: &mut S, height: f64) -> Self {
        match decide_break(self.remaining(), height, self.at_page_top()) {
            BreakDecision::Place => self,
            BreakDecision::NewPage => {
                let page = surface.new_page();
                log::debug!(
                    "page break before {:.1}pt block: {:.1}pt left on page {}, continuing on page {}",
                    height,
                    self.remaining(),
                    self.page + 1,
                    page + 1
                );
                Self {
                    page,
                    y: self.geometry.content_top(),
                    ..self
                }
            }
        }
    }

    /// Move down by `height` points.
    pub fn advance(self, height: f64) -> Self {
        Self {
            y: self.y + height,
            ..self
        }
    }

    /// Move down to at least `y`.
    pub fn advance_to(self, y: f64) -> Self {
        Self {
            y: self.y.max(y),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::Canvas;

    fn setup() -> (Canvas, PageCursor) {
        let geometry = LayoutConfig::default().geometry();
        let mut canvas = Canvas::new(geometry.width, geometry.height);
        let page = canvas.new_page();
        (canvas, PageCursor::new(geometry, page, 150.0))
    }

    #[test]
    fn test_ensure_space_is_noop_when_it_fits() {
        let (mut canvas, cursor) = setup();
        let after = cursor.ensure_space(&mut canvas, 100.0);
        assert_eq!(after, cursor);
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn test_ensure_space_breaks_to_top_margin() {
        let (mut canvas, cursor) = setup();
        let near_bottom = cursor.advance(cursor.remaining() - 10.0);
        let after = near_bottom.ensure_space(&mut canvas, 14.0);
        assert_eq!(after.page(), 1);
        assert_eq!(after.y(), 48.0);
        assert_eq!(canvas.page_count(), 2);
    }

    #[test]
    fn test_oversized_block_creates_exactly_one_page() {
        let (mut canvas, cursor) = setup();
        let first = cursor.ensure_space(&mut canvas, 5000.0);
        assert_eq!(first.page(), 1);
        assert!(first.at_page_top());
        let again = first.ensure_space(&mut canvas, 5000.0);
        assert_eq!(again, first);
        assert_eq!(canvas.page_count(), 2);
    }

    #[test]
    fn test_advance_accumulates() {
        let (_, cursor) = setup();
        let moved = cursor.advance(10.0).advance(4.5);
        assert_eq!(moved.y(), 164.5);
        assert_eq!(moved.page(), cursor.page());
        assert_eq!(moved.advance_to(100.0).y(), 164.5);
        assert_eq!(moved.advance_to(200.0).y(), 200.0);
    }
}
