//! Timeline screen: card strip, detail panel and stats.

use crate::app::App;
use crate::layout::TimelineLayout;
use crate::screens::Screen;
use crate::strip::{CardStrip, StripState};
use crate::widgets::{DetailPanel, KeyHint, StatsPanel, StatusBar};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The timeline screen.
pub struct TimelineScreen;

impl Screen for TimelineScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let layout = TimelineLayout::new(area);

        render_strip_pane(app, &layout, buf);

        match (app.controller.selected(), app.controller.stats()) {
            (Some(record), Some(stats)) => {
                DetailPanel::new(record, &app.theme, &app.borders, &app.icons)
                    .render(layout.detail, buf);
                StatsPanel::new(stats, &app.theme, &app.borders, &app.icons)
                    .render(layout.stats, buf);
            }
            _ => render_no_selection(app, layout.detail, buf),
        }

        let hints = vec![
            KeyHint::new(app.icons.arrow_left(), "Prev"),
            KeyHint::new(app.icons.arrow_right(), "Next"),
            KeyHint::new("u", "Upload New File"),
            KeyHint::new("?", "Help"),
            KeyHint::new("q", "Quit"),
        ];
        StatusBar::new("Timeline", &app.theme)
            .hints(hints)
            .icons(&app.icons)
            .toast(app.toast.as_ref())
            .render(layout.status, buf);
    }
}

fn render_strip_pane(app: &App, layout: &TimelineLayout, buf: &mut Buffer) {
    let theme = &app.theme;
    let count = app.controller.len();
    let scrollable =
        StripState::max_scroll(count, usize::from(layout.strip.width)) > 0;

    let mut block = Block::default()
        .title(format!(" {} Timeline Overview ", app.icons.calendar()))
        .title_style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .title(
            Line::styled(
                format!(" {count} entries "),
                Style::default().fg(theme.muted),
            )
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_set(app.borders.for_state(app.strip.is_dragging()))
        .border_style(Style::default().fg(if app.strip.is_dragging() {
            theme.border_focused
        } else {
            theme.border
        }));
    if scrollable {
        block = block.title_bottom(
            Line::styled(" drag or scroll to see more ", Style::default().fg(theme.muted))
                .right_aligned(),
        );
    }
    block.render(layout.strip_pane, buf);

    CardStrip::new(app.controller.records(), &app.strip, theme, &app.borders)
        .selected(app.controller.selected_index())
        .render(layout.strip, buf);
}

fn render_no_selection(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(app.borders.normal())
        .border_style(Style::default().fg(app.theme.border));
    Paragraph::new(Line::styled(
        "Select an entry to see its details",
        Style::default().fg(app.theme.muted),
    ))
    .alignment(Alignment::Center)
    .block(block)
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strip::CARD_STRIDE;
    use crate::test_utils::{create_loaded_app, render_screen_to_string};

    #[test]
    fn test_timeline_screen_sections() {
        let app = create_loaded_app();
        let out = render_screen_to_string(&TimelineScreen, &app);

        assert!(out.contains("Timeline Overview"));
        assert!(out.contains(" 8 entries "));
        assert!(out.contains("Detailed View - Jan"));
        assert!(out.contains("Timeline Stats"));
        assert!(out.contains("1 of 8"));
        assert!(out.contains("drag or scroll to see more"));
    }

    #[test]
    fn test_selection_drives_detail_and_stats() {
        let mut app = create_loaded_app();
        app.controller.select_index(2);
        let out = render_screen_to_string(&TimelineScreen, &app);

        assert!(out.contains("Detailed View - Mar"));
        assert!(out.contains("3 of 8"));
    }

    #[test]
    fn test_scrolled_strip_shows_later_months() {
        let mut app = create_loaded_app();
        app.strip.scroll_by(CARD_STRIDE as isize * 4, 8, 118);
        let out = render_screen_to_string(&TimelineScreen, &app);
        let header = out.lines().nth(2).unwrap();

        assert!(header.contains("May"));
        assert!(!header.contains("Jan"));
    }

    #[test]
    fn test_no_selection_placeholder() {
        let mut app = create_loaded_app();
        app.controller.reset();
        let out = render_screen_to_string(&TimelineScreen, &app);
        assert!(out.contains("Select an entry to see its details"));
        assert!(out.contains(" 0 entries "));
    }

    #[test]
    fn test_status_bar_hints() {
        let app = create_loaded_app();
        let out = render_screen_to_string(&TimelineScreen, &app);
        let status = out.lines().last().unwrap();
        assert!(status.contains("Timeline"));
        assert!(status.contains("Upload New File"));
    }
}
