//! Primitive drawers.
//!
//! Each primitive asks the cursor for room before every line it draws, so
//! a page break can fall between any two lines regardless of which block
//! is being drawn.

use super::cursor::PageCursor;
use super::surface::{Rect, Surface};
use crate::style::{Color, TextStyle};
use crate::text::TextLayout;

/// Bullet glyph offset from the content edge.
pub const BULLET_INDENT: f64 = 8.0;
/// Bullet text offset from the content edge.
pub const BULLET_TEXT_INDENT: f64 = 20.0;
/// Minimum air between a key-value row's label and its value.
pub const KEY_VALUE_GAP: f64 = 12.0;

const BULLET: &str = "\u{2022}";

/// Draw one line of text at `x`, breaking the page first if needed.
pub fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    cursor: PageCursor,
    x: f64,
    text: &str,
    style: &TextStyle,
) -> PageCursor {
    let cursor = cursor.ensure_space(surface, style.line_height());
    surface.draw_text(cursor.page(), x, cursor.y() + style.size, text, style);
    cursor.advance(style.line_height())
}

/// Wrap `text` into `width` and draw each line at `x`.
pub fn draw_paragraph<S: Surface + ?Sized>(
    surface: &mut S,
    cursor: PageCursor,
    x: f64,
    width: f64,
    text: &str,
    style: &TextStyle,
) -> PageCursor {
    let lines = TextLayout::new().wrap(&*surface, text, style.font, style.size, width);
    lines
        .iter()
        .fold(cursor, |cursor, line| draw_line(surface, cursor, x, line, style))
}

/// Draw one bulleted item: the glyph beside the first line, the text
/// wrapped into the indented column.
pub fn draw_bullet<S: Surface + ?Sized>(
    surface: &mut S,
    cursor: PageCursor,
    text: &str,
    style: &TextStyle,
    glyph_style: &TextStyle,
) -> PageCursor {
    let left = cursor.geometry().content_left();
    let width = cursor.geometry().content_width() - BULLET_TEXT_INDENT;
    let lines = TextLayout::new().wrap(&*surface, text, style.font, style.size, width);

    let mut cursor = cursor;
    for (i, line) in lines.iter().enumerate() {
        cursor = cursor.ensure_space(surface, style.line_height());
        let baseline = cursor.y() + style.size;
        if i == 0 {
            surface.draw_text(cursor.page(), left + BULLET_INDENT, baseline, BULLET, glyph_style);
        }
        surface.draw_text(cursor.page(), left + BULLET_TEXT_INDENT, baseline, line, style);
        cursor = cursor.advance(style.line_height());
    }
    cursor
}

/// Draw `left` flush with the content edge and `right` flush with the
/// right margin, on a shared baseline.
///
/// The left label wraps into whatever width the right value leaves; its
/// continuation lines follow below.
pub fn draw_key_value<S: Surface + ?Sized>(
    surface: &mut S,
    cursor: PageCursor,
    left: &str,
    left_style: &TextStyle,
    right: &str,
    right_style: &TextStyle,
) -> PageCursor {
    let geometry = *cursor.geometry();
    let tl = TextLayout::new();
    let right_width = if right.is_empty() {
        0.0
    } else {
        tl.measure_width(&*surface, right, right_style.font, right_style.size)
    };
    let left_width = if right.is_empty() {
        geometry.content_width()
    } else {
        (geometry.content_width() - right_width - KEY_VALUE_GAP).max(0.0)
    };
    let left_lines = tl.wrap(&*surface, left, left_style.font, left_style.size, left_width);

    let row_height = left_style.size.max(right_style.size) + 4.0;
    let cursor = cursor.ensure_space(surface, row_height);
    let baseline = cursor.y() + left_style.size.max(right_style.size);

    if let Some(first) = left_lines.first() {
        surface.draw_text(cursor.page(), geometry.content_left(), baseline, first, left_style);
    }
    if !right.is_empty() {
        let x = geometry.content_right() - right_width;
        surface.draw_text(cursor.page(), x, baseline, right, right_style);
    }

    left_lines.iter().skip(1).fold(cursor.advance(row_height), |cursor, line| {
        draw_line(surface, cursor, geometry.content_left(), line, left_style)
    })
}

/// Draw a full-content-width horizontal rule.
pub fn draw_rule<S: Surface + ?Sized>(
    surface: &mut S,
    cursor: PageCursor,
    thickness: f64,
    color: Color,
) -> PageCursor {
    let cursor = cursor.ensure_space(surface, thickness);
    let geometry = cursor.geometry();
    let rect = Rect::new(geometry.content_left(), cursor.y(), geometry.content_width(), thickness);
    surface.fill_rect(cursor.page(), rect, color);
    cursor.advance(thickness)
}
