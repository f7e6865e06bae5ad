//! Screen definitions for the caretrail TUI.

pub mod timeline;
pub mod upload;

use crate::app::{App, Screen as ScreenKind};
use crate::layout::{centered_fixed, is_too_small, MIN_HEIGHT, MIN_WIDTH};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render whatever the app currently shows, overlays included.
pub fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    if is_too_small(area) {
        render_too_small(app, area, buf);
        return;
    }

    match app.screen {
        ScreenKind::Upload => upload::UploadScreen.render(app, area, buf),
        ScreenKind::Timeline => timeline::TimelineScreen.render(app, area, buf),
    }

    if app.show_help {
        render_help_overlay(app, area, buf);
    }
}

/// Notice shown instead of the UI when the terminal is below the minimum size.
pub fn render_too_small(app: &App, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default()
                .fg(app.theme.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("Need {MIN_WIDTH}x{MIN_HEIGHT}, have {}x{}", area.width, area.height),
            Style::default().fg(app.theme.subtext),
        ),
    ];
    let y = area.y + area.height.saturating_sub(2) / 2;
    let notice = Rect::new(area.x, y, area.width, 2.min(area.height));
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(notice, buf);
}

const HELP_TEXT: &str = "
  Upload
    Enter             Load the typed path
    Up/Down           Previous paths
    Ctrl+S            Write sample file

  Timeline
    Left/Right, h/l   Previous/next entry
    Home/End          First/last entry
    Enter             Scroll to the selected card
    Click             Select a card
    Drag, wheel       Scroll the strip
    u                 Upload new file

  q / Ctrl+C          Quit
  ?                   Toggle this help

  [Press any key to close]
";

/// Render the help overlay.
pub fn render_help_overlay(app: &App, area: Rect, buf: &mut Buffer) {
    let width = 48.min(area.width.saturating_sub(4));
    let height = 22.min(area.height.saturating_sub(2));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_set(app.borders.focused())
        .border_style(Style::default().fg(app.theme.border_focused))
        .style(Style::default().bg(app.theme.surface).fg(app.theme.text));

    Paragraph::new(HELP_TEXT)
        .block(block)
        .render(overlay_area, buf);
}
