//! Timeline stats panel.

use caretrail_engine::TimelineStats;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::{BorderSet, IconSet, Theme};

/// Entry count and where the selection sits.
pub struct StatsPanel<'a> {
    stats: TimelineStats<'a>,
    theme: &'a Theme,
    borders: &'a BorderSet,
    icons: &'a IconSet,
}

impl<'a> StatsPanel<'a> {
    pub fn new(
        stats: TimelineStats<'a>,
        theme: &'a Theme,
        borders: &'a BorderSet,
        icons: &'a IconSet,
    ) -> Self {
        Self {
            stats,
            theme,
            borders,
            icons,
        }
    }

    /// Label and value on one line, or the value on its own line below
    /// when both do not fit.
    fn row(&self, label: &str, value: String, width: usize) -> Vec<Line<'static>> {
        let label_style = Style::default().fg(self.theme.subtext);
        let value_style = Style::default()
            .fg(self.theme.text)
            .add_modifier(Modifier::BOLD);
        let used = crate::text::visual_width(label) + crate::text::visual_width(&value);

        if used < width {
            return vec![Line::from(vec![
                Span::styled(label.to_string(), label_style),
                Span::raw(" ".repeat(width - used)),
                Span::styled(value, value_style),
            ])];
        }
        vec![
            Line::styled(label.to_string(), label_style),
            Line::styled(value, value_style).alignment(Alignment::Right),
        ]
    }
}

impl Widget for StatsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Timeline Stats ")
            .title_style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_set(self.borders.normal())
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let hint = format!(
            "{} {} to browse entries",
            self.icons.arrow_left(),
            self.icons.arrow_right()
        );

        let mut lines = vec![
            Line::styled(
                self.stats.total.to_string(),
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
            Line::styled("Total Entries", Style::default().fg(self.theme.subtext))
                .alignment(Alignment::Center),
            Line::raw(""),
        ];
        lines.extend(self.row(
            "Current Entry:",
            format!("{} of {}", self.stats.position, self.stats.total),
            width,
        ));
        lines.extend(self.row("Month:", self.stats.month.to_string(), width));
        lines.push(Line::raw(""));
        lines.push(
            Line::styled(hint, Style::default().fg(self.theme.muted)).alignment(Alignment::Center),
        );

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;

    #[test]
    fn test_stats_rows() {
        let theme = Theme::default();
        let borders = BorderSet::new(IconMode::Ascii);
        let icons = IconSet::new(IconMode::Ascii);
        let stats = TimelineStats {
            total: 8,
            position: 3,
            month: "Mar",
        };

        let area = Rect::new(0, 0, 30, 9);
        let mut buf = Buffer::empty(area);
        StatsPanel::new(stats, &theme, &borders, &icons).render(area, &mut buf);
        let out = buffer_to_string(&buf);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].contains("Timeline Stats"));
        assert_eq!(lines[1].trim_matches(&['|', ' '][..]), "8");
        assert_eq!(lines[2].trim_matches(&['|', ' '][..]), "Total Entries");
        assert_eq!(lines[4], format!("|Current Entry:{}3 of 8|", " ".repeat(8)));
        assert_eq!(lines[5], format!("|Month:{}Mar|", " ".repeat(19)));
        assert!(lines[7].contains("<- -> to browse entries"));
    }

    #[test]
    fn test_narrow_panel_moves_value_down() {
        let theme = Theme::default();
        let borders = BorderSet::new(IconMode::Ascii);
        let icons = IconSet::new(IconMode::Ascii);
        let stats = TimelineStats {
            total: 8,
            position: 1,
            month: "Jan",
        };

        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        StatsPanel::new(stats, &theme, &borders, &icons).render(area, &mut buf);
        let out = buffer_to_string(&buf);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[4].trim_matches(&['|', ' '][..]), "Current Entry:");
        assert_eq!(lines[5], format!("|{}1 of 8|", " ".repeat(12)));
        assert_eq!(lines[6], format!("|Month:{}Jan|", " ".repeat(9)));
    }
}
