//! # Page Break Decisions
//!
//! The single rule the cursor applies before every atomic draw. A line is
//! the smallest unit that can move; nothing below it is ever split.

/// What to do with a block of a given height at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakDecision {
    /// Draw it here.
    Place,
    /// Start a new page and draw it at the top.
    NewPage,
}

/// Decide whether `needed` points can be placed in `remaining` points.
///
/// A block that does not fit moves to a fresh page, unless the cursor is
/// already at the top of one: a block taller than the whole printable area
/// would not fit on the next page either, so it is placed here and allowed
/// to overflow.
pub fn decide_break(remaining: f64, needed: f64, at_page_top: bool) -> BreakDecision {
    if needed <= remaining || at_page_top {
        BreakDecision::Place
    } else {
        BreakDecision::NewPage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_fits() {
        assert_eq!(decide_break(100.0, 14.0, false), BreakDecision::Place);
    }

    #[test]
    fn test_exact_fit_places() {
        assert_eq!(decide_break(14.0, 14.0, false), BreakDecision::Place);
    }

    #[test]
    fn test_overflow_starts_new_page() {
        assert_eq!(decide_break(10.0, 14.0, false), BreakDecision::NewPage);
    }

    #[test]
    fn test_negative_remaining_starts_new_page() {
        assert_eq!(decide_break(-30.0, 14.0, false), BreakDecision::NewPage);
    }

    #[test]
    fn test_oversized_block_at_page_top_is_placed() {
        assert_eq!(decide_break(750.0, 2000.0, true), BreakDecision::Place);
    }
}
