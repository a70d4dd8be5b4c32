//! The closed set of content blocks and the one function that draws them.
//!
//! Content renderers never touch the surface directly. They translate record
//! entries into [`Block`]s; [`draw_block`] turns each block into primitive
//! draws, threading the cursor through.

use super::cursor::PageCursor;
use super::draw::{draw_bullet, draw_key_value, draw_paragraph};
use super::surface::{Rect, Surface};
use crate::style::{Color, TextStyle};
use crate::text::TextLayout;

/// Baseline of the name, from the top of the band.
pub const HEADER_NAME_BASELINE: f64 = 44.0;
/// Baseline of the job title.
pub const HEADER_TITLE_BASELINE: f64 = 66.0;
/// Baseline of the first contact line.
pub const HEADER_CONTACT_BASELINE: f64 = 92.0;
pub const HEADER_CONTACT_PITCH: f64 = 14.0;
/// Contact lines keep at least this much clearance above the band's edge.
pub const HEADER_INNER_PADDING: f64 = 10.0;
pub const CONTACT_SEPARATOR: &str = "  |  ";

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    HeaderBand(HeaderBand),
    Paragraph(Paragraph),
    BulletList(BulletList),
    KeyValueRow(KeyValueRow),
    TagFlow(TagFlow),
    /// Keep this many points together: break the page now if they don't fit.
    Reserve(f64),
    /// Vertical whitespace.
    Gap(f64),
}

/// Full-width coloured band at the top of the first page.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBand {
    pub height: f64,
    pub background: Color,
    pub name: String,
    pub name_style: TextStyle,
    /// Omitted when empty.
    pub title: String,
    pub title_style: TextStyle,
    pub contacts: Vec<String>,
    pub contact_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulletList {
    pub items: Vec<String>,
    pub style: TextStyle,
    pub glyph_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueRow {
    pub left: String,
    pub left_style: TextStyle,
    /// Right-aligned to the margin. Empty for a label-only row.
    pub right: String,
    pub right_style: TextStyle,
}

/// Whole tags flowed into rows, never split.
#[derive(Debug, Clone, PartialEq)]
pub struct TagFlow {
    pub tags: Vec<String>,
    pub separator: String,
    pub style: TextStyle,
    /// Row pitch.
    pub line_height: f64,
}

/// Draw one block and return the cursor below it.
pub fn draw_block<S: Surface + ?Sized>(
    surface: &mut S,
    cursor: PageCursor,
    block: &Block,
) -> PageCursor {
    match block {
        Block::HeaderBand(header) => draw_header(surface, cursor, header),
        Block::Paragraph(p) => {
            let geometry = cursor.geometry();
            let (x, width) = (geometry.content_left(), geometry.content_width());
            draw_paragraph(surface, cursor, x, width, &p.text, &p.style)
        }
        Block::BulletList(list) => list.items.iter().fold(cursor, |cursor, item| {
            draw_bullet(surface, cursor, item, &list.style, &list.glyph_style)
        }),
        Block::KeyValueRow(row) => draw_key_value(
            surface,
            cursor,
            &row.left,
            &row.left_style,
            &row.right,
            &row.right_style,
        ),
        Block::TagFlow(flow) => draw_tag_flow(surface, cursor, flow),
        Block::Reserve(height) => cursor.ensure_space(surface, *height),
        Block::Gap(height) => cursor.advance(*height),
    }
}

pub fn draw_blocks<S: Surface + ?Sized>(
    surface: &mut S,
    cursor: PageCursor,
    blocks: &[Block],
) -> PageCursor {
    blocks
        .iter()
        .fold(cursor, |cursor, block| draw_block(surface, cursor, block))
}

fn draw_tag_flow<S: Surface + ?Sized>(surface: &mut S, cursor: PageCursor, flow: &TagFlow) -> PageCursor {
    let geometry = *cursor.geometry();
    let rows = TextLayout::new().flow(
        &*surface,
        flow.tags.iter().map(String::as_str),
        &flow.separator,
        flow.style.font,
        flow.style.size,
        geometry.content_width(),
    );

    let mut cursor = cursor;
    for row in &rows {
        cursor = cursor.ensure_space(surface, flow.line_height);
        let baseline = cursor.y() + flow.style.size;
        surface.draw_text(cursor.page(), geometry.content_left(), baseline, row, &flow.style);
        cursor = cursor.advance(flow.line_height);
    }
    cursor
}

/// The header is anchored to the top of the cursor's page and never breaks.
///
/// The band grows past `header.height` when the name and title need more
/// room, so the cursor always leaves it below the last drawn baseline.
fn draw_header<S: Surface + ?Sized>(surface: &mut S, cursor: PageCursor, header: &HeaderBand) -> PageCursor {
    let geometry = *cursor.geometry();
    let page = cursor.page();
    let x = geometry.content_left();

    let identity_baseline = if header.title.is_empty() {
        HEADER_NAME_BASELINE
    } else {
        HEADER_TITLE_BASELINE
    };
    let height = header.height.max(identity_baseline + HEADER_INNER_PADDING);
    if height > header.height {
        log::debug!("header band grown from {:.1} to {:.1}", header.height, height);
    }

    surface.fill_rect(page, Rect::new(0.0, 0.0, geometry.width, height), header.background);
    surface.draw_text(page, x, HEADER_NAME_BASELINE, &header.name, &header.name_style);
    if !header.title.is_empty() {
        surface.draw_text(page, x, HEADER_TITLE_BASELINE, &header.title, &header.title_style);
    }

    let style = &header.contact_style;
    let lines = TextLayout::new().wrap(
        &*surface,
        &header.contacts.join(CONTACT_SEPARATOR),
        style.font,
        style.size,
        geometry.content_width(),
    );
    let last_baseline = height - HEADER_INNER_PADDING;
    for (i, line) in lines.iter().enumerate() {
        let baseline = HEADER_CONTACT_BASELINE + i as f64 * HEADER_CONTACT_PITCH;
        if baseline > last_baseline {
            log::warn!(
                "header band is full: dropped {} of {} contact lines",
                lines.len() - i,
                lines.len()
            );
            break;
        }
        surface.draw_text(page, x, baseline, line, style);
    }

    cursor.advance_to(height)
}
