//! Layout helpers for the caretrail TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::strip::CARD_HEIGHT;

/// Minimum terminal width for the full UI.
///
/// Keeps the stats third wide enough for its labels.
pub const MIN_WIDTH: u16 = 60;

/// Rows the detail and stats panels need, borders included.
pub const PANEL_MIN_HEIGHT: u16 = 10;

/// Strip pane rows that still show each card's month and id.
const STRIP_MIN_HEIGHT: u16 = 4;

/// Minimum terminal height for the full UI.
pub const MIN_HEIGHT: u16 = STRIP_MIN_HEIGHT + PANEL_MIN_HEIGHT + 1;

/// Whether an area is below the minimum size.
pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_WIDTH || area.height < MIN_HEIGHT
}

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Split off the one-line status bar at the bottom.
pub fn main_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Areas of the timeline screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineLayout {
    /// "Timeline Overview" pane, borders included.
    pub strip_pane: Rect,
    /// Inside of the strip pane where cards are drawn.
    pub strip: Rect,
    /// Detail panel (two thirds of the lower row).
    pub detail: Rect,
    /// Stats panel (remaining third).
    pub stats: Rect,
    /// Status bar.
    pub status: Rect,
}

impl TimelineLayout {
    /// Lay out the timeline screen in `area`.
    pub fn new(area: Rect) -> Self {
        let (main, status) = main_layout(area);

        // The strip gives up rows before the panels do.
        let strip_height = (CARD_HEIGHT + 2).min(main.height.saturating_sub(PANEL_MIN_HEIGHT));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(strip_height), Constraint::Min(0)])
            .split(main);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .split(rows[1]);

        let strip_pane = rows[0];
        let strip = Rect::new(
            strip_pane.x.saturating_add(1),
            strip_pane.y.saturating_add(1),
            strip_pane.width.saturating_sub(2),
            strip_pane.height.saturating_sub(2),
        );

        Self {
            strip_pane,
            strip,
            detail: columns[0],
            stats: columns[1],
            status,
        }
    }
}
