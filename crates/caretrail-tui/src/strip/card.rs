//! Record summary card.

use caretrail_engine::TimelineRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::text::{clamp_lines, truncate_to_width, visual_width};
use crate::theme::{BorderSet, Theme};

/// Card width in columns, borders included.
pub const CARD_WIDTH: u16 = 32;

/// Card height in rows, borders included.
///
/// Header, concern (2), "Decision:", decision (3), "Reason:", reason (2),
/// plus the two border rows.
pub const CARD_HEIGHT: u16 = 12;

const CONCERN_LINES: usize = 2;
const DECISION_LINES: usize = 3;
const REASON_LINES: usize = 2;

/// One record rendered as a fixed-size card.
pub struct RecordCard<'a> {
    record: &'a TimelineRecord,
    theme: &'a Theme,
    borders: &'a BorderSet,
    selected: bool,
}

impl<'a> RecordCard<'a> {
    pub fn new(record: &'a TimelineRecord, theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            record,
            theme,
            borders,
            selected: false,
        }
    }

    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Month badge on the left, `#id` on the right.
    fn header(&self, width: usize) -> Line<'static> {
        let id = format!("#{}", self.record.id);
        let badge_room = width.saturating_sub(visual_width(&id) + 3);
        let month = if self.record.month.is_empty() {
            "-".to_string()
        } else {
            truncate_to_width(&self.record.month, badge_room)
        };
        let badge = format!(" {month} ");
        let pad = width.saturating_sub(visual_width(&badge) + visual_width(&id));

        Line::from(vec![
            Span::styled(
                badge,
                Style::default()
                    .fg(self.theme.base)
                    .bg(self.theme.badge)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(pad)),
            Span::styled(id, Style::default().fg(self.theme.muted)),
        ])
    }

    fn section(
        lines: &mut Vec<Line<'static>>,
        text: &str,
        width: usize,
        max_lines: usize,
        style: Style,
    ) {
        let clamped = clamp_lines(text, width, max_lines);
        let used = clamped.len();
        lines.extend(clamped.into_iter().map(|l| Line::styled(l, style)));
        // Pad so labels line up across cards.
        lines.extend((used..max_lines).map(|_| Line::raw("")));
    }
}

impl Widget for RecordCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = if self.selected {
            self.theme.card_selected
        } else {
            self.theme.base
        };
        let border_color = if self.selected {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.for_state(self.selected))
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(background));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        if width == 0 {
            return;
        }

        let label = Style::default()
            .fg(self.theme.primary)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![self.header(width)];
        Self::section(
            &mut lines,
            &self.record.member_concern,
            width,
            CONCERN_LINES,
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD),
        );
        lines.push(Line::styled("Decision:", label));
        Self::section(
            &mut lines,
            &self.record.decision_by_elyx,
            width,
            DECISION_LINES,
            Style::default().fg(self.theme.text),
        );
        lines.push(Line::styled("Reason:", label));
        Self::section(
            &mut lines,
            self.record.reason(),
            width,
            REASON_LINES,
            Style::default().fg(self.theme.subtext),
        );

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, sample_record};
    use crate::theme::IconMode;

    fn render(card: RecordCard<'_>) -> String {
        let area = Rect::new(0, 0, CARD_WIDTH, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_card_layout() {
        let theme = Theme::default();
        let borders = BorderSet::new(IconMode::Ascii);
        let record = sample_record(2, "Jan");
        let out = render(RecordCard::new(&record, &theme, &borders));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), CARD_HEIGHT as usize);
        assert!(lines[0].starts_with("+---"));
        assert_eq!(lines[1], format!("| Jan {}#2|", " ".repeat(23)));
        assert!(lines[2].contains("Back pain"));
        assert!(lines[4].contains("Decision:"));
        assert!(lines[5].contains("Refer to physio"));
        assert!(lines[8].contains("Reason:"));
        assert!(lines[9].contains("Chronic history"));
    }

    #[test]
    fn test_selected_card_uses_focused_border() {
        let theme = Theme::default();
        let borders = BorderSet::new(IconMode::Ascii);
        let record = sample_record(2, "Jan");
        let out = render(RecordCard::new(&record, &theme, &borders).selected(true));
        assert!(out.starts_with("#==="));
    }

    #[test]
    fn test_long_concern_is_clamped() {
        let theme = Theme::default();
        let borders = BorderSet::new(IconMode::Ascii);
        let mut record = sample_record(7, "Mar");
        record.member_concern = "word ".repeat(40);
        let out = render(RecordCard::new(&record, &theme, &borders));

        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[3].contains("..."));
        assert!(lines[4].contains("Decision:"));
    }

    #[test]
    fn test_missing_reason_renders_blank() {
        let theme = Theme::default();
        let borders = BorderSet::new(IconMode::Ascii);
        let mut record = sample_record(3, "Feb");
        record.reason_for_decision = None;
        let out = render(RecordCard::new(&record, &theme, &borders));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[9], format!("|{}|", " ".repeat(30)));
    }
}
