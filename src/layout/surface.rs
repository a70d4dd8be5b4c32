//! The drawing seam between layout and a rendering backend.
//!
//! Layout speaks in page-top coordinates: `y` grows downward from the top
//! edge of the page. A backend with a bottom-up coordinate system (PDF)
//! converts when it serializes, never earlier.

use serde::Serialize;

use crate::style::{Color, TextStyle};
use crate::text::Measure;

/// An axis-aligned rectangle in page-top coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// A paginated drawing surface.
///
/// Pages are addressed by the index `new_page` returned. Every page has the
/// size the surface was created with.
pub trait Surface: Measure {
    /// Append a blank page and return its index.
    fn new_page(&mut self) -> usize;

    /// Paint a filled rectangle.
    fn fill_rect(&mut self, page: usize, rect: Rect, color: Color);

    /// Paint a left-anchored text run whose baseline sits at `baseline`.
    fn draw_text(&mut self, page: usize, x: f64, baseline: f64, text: &str, style: &TextStyle);
}
