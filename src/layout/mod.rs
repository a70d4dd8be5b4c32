//! # Page-Native Layout
//!
//! Nothing here lays content out on an infinitely tall strip and slices it
//! afterwards. A layout pass opens page 1 with a known printable area and
//! walks the record top to bottom:
//!
//! 1. Draw the header band across the top of page 1.
//! 2. For every populated section, ask the cursor for headroom, then draw
//!    the title, the rule and the section's blocks.
//! 3. Every primitive asks the cursor for room before each line. When a
//!    line doesn't fit, the cursor opens a new page and the line lands at
//!    its top margin.
//!
//! Pages are therefore complete the moment the cursor leaves them. The
//! [`PageCursor`] is a value threaded through every draw call; the
//! [`Surface`] behind it only ever appends.

pub mod blocks;
pub mod canvas;
pub mod content;
pub mod cursor;
pub mod draw;
pub mod page_break;
pub mod section;
pub mod surface;

pub use canvas::Canvas;
pub use cursor::{PageCursor, PageGeometry};
pub use surface::{Rect, Surface};

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::model::CvRecord;
use crate::style::{Color, TextStyle};

// ── Serializable layout metadata (for --layout-json) ───────────────

/// Recorded layout of a whole document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutInfo {
    pub geometry: PageGeometry,
    pub content_left: f64,
    pub content_width: f64,
    pub printable_bottom: f64,
    pub pages: Vec<LayoutPage>,
}

impl LayoutInfo {
    pub fn from_pages(geometry: PageGeometry, pages: Vec<LayoutPage>) -> Self {
        Self {
            geometry,
            content_left: geometry.content_left(),
            content_width: geometry.content_width(),
            printable_bottom: geometry.printable_bottom(),
            pages,
        }
    }
}

/// A fully laid-out page ready for PDF serialization.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutPage {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<LayoutElement>,
}

/// A positioned element on a page.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutElement {
    /// Position of the top-left corner, from the page's top-left corner.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub draw: DrawCommand,
}

/// What to actually draw for this element.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum DrawCommand {
    /// A filled rectangle covering the element's box.
    Rect { color: Color },
    /// A single run of text. `baseline` is the page-top offset of the
    /// baseline; the element box spans one em above it.
    Text {
        text: String,
        baseline: f64,
        style: TextStyle,
    },
}

/// Lays a [`CvRecord`] out onto any [`Surface`].
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Main entry point: draw `record` onto `surface`, starting a fresh
    /// first page. Returns the cursor where content ended.
    pub fn layout<S: Surface + ?Sized>(&self, record: &CvRecord, surface: &mut S) -> PageCursor {
        let geometry = self.config.geometry();
        let first = surface.new_page();
        let cursor = PageCursor::new(geometry, first, 0.0);

        let cursor = blocks::draw_block(surface, cursor, &content::header(record, &self.config));
        let mut cursor = cursor.advance(self.config.header_gap);

        for section in content::sections(record, &self.config) {
            log::debug!(
                "section {:?}: {} blocks from page {} at y={:.1}",
                section.title,
                section.body.len(),
                cursor.page() + 1,
                cursor.y()
            );
            let theme = &self.config.theme;
            cursor = section::draw_section(surface, cursor, &section.title, theme, |s, c| {
                blocks::draw_blocks(s, c, &section.body)
            });
        }

        cursor
    }

    /// Lay `record` out onto a fresh [`Canvas`] and return its pages.
    pub fn layout_pages(&self, record: &CvRecord) -> Vec<LayoutPage> {
        let geometry = self.config.geometry();
        let mut canvas = Canvas::new(geometry.width, geometry.height);
        self.layout(record, &mut canvas);
        canvas.into_pages()
    }

    /// [`layout_pages`](Self::layout_pages) bundled with the geometry it
    /// was laid out against.
    pub fn layout_info(&self, record: &CvRecord) -> LayoutInfo {
        LayoutInfo::from_pages(self.config.geometry(), self.layout_pages(record))
    }
}
