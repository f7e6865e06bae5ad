//! Card strip widget.

use caretrail_engine::TimelineRecord;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::card::{RecordCard, CARD_HEIGHT, CARD_WIDTH};
use super::state::{StripState, CARD_STRIDE};
use crate::theme::{BorderSet, Theme};

/// Horizontal row of record cards, clipped to the area at the current
/// scroll offset. Cards cut by either edge are drawn partially.
pub struct CardStrip<'a> {
    records: &'a [TimelineRecord],
    selected: Option<usize>,
    state: &'a StripState,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> CardStrip<'a> {
    pub fn new(
        records: &'a [TimelineRecord],
        state: &'a StripState,
        theme: &'a Theme,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            records,
            selected: None,
            state,
            theme,
            borders,
        }
    }

    #[must_use]
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Indices of cards at least partly inside a viewport of `width` columns.
    fn visible_range(&self, width: usize) -> std::ops::Range<usize> {
        let scroll = self.state.scroll();
        let first = scroll / CARD_STRIDE;
        let last = (scroll + width).div_ceil(CARD_STRIDE);
        first.min(self.records.len())..last.min(self.records.len())
    }
}

impl Widget for CardStrip<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Cards are drawn at full size and cut at the bottom when the pane is short.
        let height = CARD_HEIGHT.min(area.height);
        let card_area = Rect::new(0, 0, CARD_WIDTH, CARD_HEIGHT);
        let scroll = self.state.scroll();
        let viewport = area.width as usize;

        for index in self.visible_range(viewport) {
            let mut scratch = Buffer::empty(card_area);
            RecordCard::new(&self.records[index], self.theme, self.borders)
                .selected(self.selected == Some(index))
                .render(card_area, &mut scratch);

            // Copy the columns of this card that fall inside the viewport.
            let left = index * CARD_STRIDE;
            for col in 0..CARD_WIDTH {
                let absolute = left + col as usize;
                if absolute < scroll || absolute >= scroll + viewport {
                    continue;
                }
                let x = area.x + (absolute - scroll) as u16;
                for row in 0..height {
                    buf[(x, area.y + row)] = scratch[(col, row)].clone();
                }
            }
        }
    }
}
