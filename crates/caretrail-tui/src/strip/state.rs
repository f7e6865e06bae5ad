//! Strip scrolling and drag state.
//!
//! Positions are measured in terminal columns from the left edge of the
//! first card. Cards are laid out at `index * CARD_STRIDE`.

use super::card::CARD_WIDTH;

/// Blank columns between cards.
pub const CARD_GAP: usize = 2;

/// Distance between the left edges of neighbouring cards.
pub const CARD_STRIDE: usize = CARD_WIDTH as usize + CARD_GAP;

/// Columns a press may move and still count as a click.
pub const CLICK_SLOP: u16 = 2;

/// Columns scrolled per mouse wheel tick.
pub const WHEEL_STEP: usize = CARD_STRIDE / 2;

/// An in-progress mouse drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    /// Column where the button went down.
    start_x: u16,
    /// Scroll offset when the button went down.
    start_scroll: usize,
    /// Whether the pointer has left the click slop.
    moved: bool,
}

/// Scroll and drag state of the card strip.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StripState {
    /// First visible column.
    scroll: usize,
    drag: Option<Drag>,
}

/// Total width of `count` cards including the gaps between them.
fn content_width(count: usize) -> usize {
    if count == 0 {
        0
    } else {
        count * CARD_STRIDE - CARD_GAP
    }
}

impl StripState {
    /// Create a strip scrolled to the start.
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible column.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Largest useful scroll offset for `count` cards in `viewport` columns.
    pub fn max_scroll(count: usize, viewport: usize) -> usize {
        content_width(count).saturating_sub(viewport)
    }

    /// Scroll back to the start and drop any drag.
    pub fn reset(&mut self) {
        self.scroll = 0;
        self.drag = None;
    }

    /// Scroll by a signed number of columns, clamped to the content.
    pub fn scroll_by(&mut self, delta: isize, count: usize, viewport: usize) {
        let max = Self::max_scroll(count, viewport);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    /// Adjust the scroll so card `index` is fully visible (or starts at the
    /// left edge when it is wider than the viewport).
    pub fn ensure_visible(&mut self, index: usize, viewport: usize) {
        if viewport == 0 {
            return;
        }
        let start = index * CARD_STRIDE;
        let end = start + CARD_WIDTH as usize;

        if start < self.scroll || end - start > viewport {
            self.scroll = start;
        } else if end > self.scroll + viewport {
            self.scroll = end - viewport;
        }
    }

    /// Card under column `x` (relative to the strip's left edge), if any.
    ///
    /// Columns in the gap between cards hit nothing.
    pub fn card_at(&self, x: u16, count: usize) -> Option<usize> {
        let absolute = self.scroll + x as usize;
        let index = absolute / CARD_STRIDE;
        let within = absolute % CARD_STRIDE;
        (index < count && within < CARD_WIDTH as usize).then_some(index)
    }

    /// Mouse button pressed at column `x`.
    pub fn begin_drag(&mut self, x: u16) {
        self.drag = Some(Drag {
            start_x: x,
            start_scroll: self.scroll,
            moved: false,
        });
    }

    /// Mouse moved to column `x` with the button held.
    ///
    /// The strip moves `multiplier` columns per column of pointer travel,
    /// opposite to the pointer direction.
    pub fn drag_to(&mut self, x: u16, multiplier: u16, count: usize, viewport: usize) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if x.abs_diff(drag.start_x) >= CLICK_SLOP {
            drag.moved = true;
        }
        if !drag.moved {
            return;
        }

        let travel = usize::from(x.abs_diff(drag.start_x)) * usize::from(multiplier);
        let scroll = if x < drag.start_x {
            drag.start_scroll + travel
        } else {
            drag.start_scroll.saturating_sub(travel)
        };
        self.scroll = scroll.min(Self::max_scroll(count, viewport));
    }

    /// Mouse button released. Returns `true` when the press was a click
    /// rather than a drag.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some_and(|drag| !drag.moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: usize = 80;

    #[test]
    fn test_max_scroll() {
        assert_eq!(StripState::max_scroll(0, VIEW), 0);
        assert_eq!(StripState::max_scroll(1, VIEW), 0);
        // 10 cards: 10 * stride - gap
        let width = 10 * CARD_STRIDE - CARD_GAP;
        assert_eq!(StripState::max_scroll(10, VIEW), width - VIEW);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut strip = StripState::new();
        strip.scroll_by(-5, 10, VIEW);
        assert_eq!(strip.scroll(), 0);

        strip.scroll_by(10_000, 10, VIEW);
        assert_eq!(strip.scroll(), StripState::max_scroll(10, VIEW));
    }

    #[test]
    fn test_ensure_visible_scrolls_right_and_left() {
        let mut strip = StripState::new();

        strip.ensure_visible(5, VIEW);
        let end = 5 * CARD_STRIDE + CARD_WIDTH as usize;
        assert_eq!(strip.scroll(), end - VIEW);

        strip.ensure_visible(0, VIEW);
        assert_eq!(strip.scroll(), 0);
    }

    #[test]
    fn test_ensure_visible_noop_when_visible() {
        let mut strip = StripState::new();
        strip.ensure_visible(1, VIEW);
        assert_eq!(strip.scroll(), 0);
    }

    #[test]
    fn test_ensure_visible_narrow_viewport() {
        let mut strip = StripState::new();
        strip.ensure_visible(3, 10);
        assert_eq!(strip.scroll(), 3 * CARD_STRIDE);
    }

    #[test]
    fn test_card_at() {
        let strip = StripState::new();
        assert_eq!(strip.card_at(0, 3), Some(0));
        assert_eq!(strip.card_at(CARD_WIDTH - 1, 3), Some(0));
        // Gap
        assert_eq!(strip.card_at(CARD_WIDTH, 3), None);
        assert_eq!(strip.card_at(CARD_STRIDE as u16, 3), Some(1));
        // Past the last card
        assert_eq!(strip.card_at((3 * CARD_STRIDE) as u16, 3), None);
    }

    #[test]
    fn test_card_at_respects_scroll() {
        let mut strip = StripState::new();
        strip.scroll_by(CARD_STRIDE as isize, 5, VIEW);
        assert_eq!(strip.card_at(0, 5), Some(1));
    }

    #[test]
    fn test_press_release_is_click() {
        let mut strip = StripState::new();
        strip.begin_drag(10);
        strip.drag_to(11, 2, 10, VIEW);
        assert_eq!(strip.scroll(), 0);
        assert!(strip.end_drag());
        assert!(!strip.is_dragging());
    }

    #[test]
    fn test_drag_scrolls_with_multiplier() {
        let mut strip = StripState::new();
        strip.begin_drag(50);
        strip.drag_to(40, 2, 10, VIEW);
        // Dragging left by 10 moves content 20 columns
        assert_eq!(strip.scroll(), 20);

        strip.drag_to(45, 2, 10, VIEW);
        assert_eq!(strip.scroll(), 10);

        assert!(!strip.end_drag());
    }

    #[test]
    fn test_drag_clamps() {
        let mut strip = StripState::new();
        strip.begin_drag(10);
        strip.drag_to(70, 2, 10, VIEW);
        assert_eq!(strip.scroll(), 0);

        strip.drag_to(0, 50, 10, VIEW);
        assert_eq!(strip.scroll(), StripState::max_scroll(10, VIEW));
    }

    #[test]
    fn test_end_without_begin() {
        let mut strip = StripState::new();
        assert!(!strip.end_drag());
        strip.drag_to(5, 2, 10, VIEW);
        assert_eq!(strip.scroll(), 0);
    }
}
