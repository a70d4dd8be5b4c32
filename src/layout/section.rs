//! Titled sections.

use super::cursor::PageCursor;
use super::draw::{draw_line, draw_rule};
use super::surface::Surface;
use crate::style::Theme;

/// Room a section title must have before it is placed. Keeps the title, its
/// rule and the top of the body together.
pub const SECTION_HEADROOM: f64 = 50.0;
pub const SECTION_TOP_GAP: f64 = 10.0;
pub const TITLE_RULE_GAP: f64 = 6.0;
pub const RULE_THICKNESS: f64 = 1.5;
pub const RULE_BODY_GAP: f64 = 10.0;
pub const SECTION_BOTTOM_GAP: f64 = 6.0;

/// Draw an underlined section title, then hand the cursor to `body`.
///
/// The body requests its own space for every line it draws, so a long
/// section flows across as many pages as it needs.
pub fn draw_section<S, F>(
    surface: &mut S,
    cursor: PageCursor,
    title: &str,
    theme: &Theme,
    body: F,
) -> PageCursor
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S, PageCursor) -> PageCursor,
{
    let cursor = cursor
        .ensure_space(surface, SECTION_HEADROOM)
        .advance(SECTION_TOP_GAP);
    let x = cursor.geometry().content_left();
    let cursor = draw_line(surface, cursor, x, title, &theme.section_title()).advance(TITLE_RULE_GAP);
    let cursor = draw_rule(surface, cursor, RULE_THICKNESS, theme.accent).advance(RULE_BODY_GAP);

    body(surface, cursor).advance(SECTION_BOTTOM_GAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::{Canvas, DrawCommand};

    fn setup(y: f64) -> (Canvas, PageCursor) {
        let geometry = LayoutConfig::default().geometry();
        let mut canvas = Canvas::new(geometry.width, geometry.height);
        let page = canvas.new_page();
        (canvas, PageCursor::new(geometry, page, y))
    }

    #[test]
    fn test_section_geometry() {
        let (mut canvas, cursor) = setup(150.0);
        let mut body_start = None;
        let after = draw_section(&mut canvas, cursor, "SKILLS", &Theme::default(), |_, c| {
            body_start = Some(c.y());
            c
        });
        // 10 gap + 15 title line + 6 gap + 1.5 rule + 10 gap.
        assert_eq!(body_start, Some(192.5));
        assert_eq!(after.y(), 198.5);

        let elements = &canvas.pages()[0].elements;
        assert!(matches!(&elements[0].draw, DrawCommand::Text { text, .. } if text == "SKILLS"));
        assert!(matches!(elements[1].draw, DrawCommand::Rect { .. }));
        assert_eq!(elements[1].y, 181.0);
    }

    #[test]
    fn test_title_never_orphaned_at_page_bottom() {
        let (mut canvas, cursor) = setup(770.0);
        let after = draw_section(&mut canvas, cursor, "EDUCATION", &Theme::default(), |_, c| c);
        assert_eq!(after.page(), 1);
        assert!(canvas.pages()[0].elements.is_empty());
        assert_eq!(canvas.pages()[1].elements.len(), 2);
    }

    #[test]
    fn test_body_receives_surface() {
        let (mut canvas, cursor) = setup(150.0);
        draw_section(&mut canvas, cursor, "PROJECTS", &Theme::default(), |s, c| {
            let x = c.geometry().content_left();
            draw_line(s, c, x, "body", &Theme::default().body())
        });
        assert_eq!(canvas.pages()[0].elements.len(), 3);
    }
}
