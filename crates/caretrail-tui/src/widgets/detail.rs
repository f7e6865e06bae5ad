//! Detail panel for the selected record.

use caretrail_engine::TimelineRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::theme::{BorderSet, IconSet, Theme};

/// Full text of one record under section headings.
pub struct DetailPanel<'a> {
    record: &'a TimelineRecord,
    theme: &'a Theme,
    borders: &'a BorderSet,
    icons: &'a IconSet,
}

impl<'a> DetailPanel<'a> {
    pub fn new(
        record: &'a TimelineRecord,
        theme: &'a Theme,
        borders: &'a BorderSet,
        icons: &'a IconSet,
    ) -> Self {
        Self {
            record,
            theme,
            borders,
            icons,
        }
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " {} Detailed View - {} ",
            self.icons.calendar(),
            self.record.month
        );
        let block = Block::default()
            .title(title)
            .title_style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_set(self.borders.normal())
            .border_style(Style::default().fg(self.theme.border));

        let heading = Style::default()
            .fg(self.theme.text)
            .add_modifier(Modifier::BOLD);
        let body = Style::default().fg(self.theme.subtext);

        let sections = [
            ("Member Concern", self.record.member_concern.as_str()),
            ("Decision by Elyx", self.record.decision_by_elyx.as_str()),
            ("Reason for Decision", self.record.reason()),
        ];

        let mut lines = Vec::new();
        for (i, (name, text)) in sections.into_iter().enumerate() {
            if i > 0 {
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(Span::styled(name, heading)));
            lines.push(Line::from(Span::styled(text, body)));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
