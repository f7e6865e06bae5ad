//! Upload screen: path input and the expected file format.

use crate::app::App;
use crate::layout::{centered_fixed, main_layout};
use crate::screens::Screen;
use crate::widgets::{KeyHint, StatusBar, TextInput};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Widest the upload card gets.
const CARD_WIDTH: u16 = 76;

/// Rows used by the upload card, borders included.
const CARD_HEIGHT: u16 = 20;

const FORMAT_EXAMPLE: [&str; 2] = [
    "| Month | Member Concern | Decision by Elyx | Reason for Decision |",
    "| Jan | Concern details | Decision details | Reason details |",
];

/// The upload screen.
pub struct UploadScreen;

impl Screen for UploadScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (main_area, status_area) = main_layout(area);

        render_upload_content(app, main_area, buf);

        let hints = vec![
            KeyHint::new("Enter", "Load"),
            KeyHint::new("Ctrl+S", "Sample"),
            KeyHint::new("?", "Help"),
            KeyHint::new("Ctrl+C", "Quit"),
        ];
        StatusBar::new("Upload", &app.theme)
            .hints(hints)
            .icons(&app.icons)
            .toast(app.toast.as_ref())
            .render(status_area, buf);
    }
}

fn render_upload_content(app: &App, area: Rect, buf: &mut Buffer) {
    let theme = &app.theme;
    let width = CARD_WIDTH.min(area.width.saturating_sub(2));
    let content_area = centered_fixed(width, CARD_HEIGHT, area);

    let block = Block::default()
        .title(format!(" {} Health Timeline Visualizer ", app.icons.heart()))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_set(app.borders.normal())
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(content_area);
    block.render(content_area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // intro
            Constraint::Length(3), // path input
            Constraint::Length(2), // loading status
            Constraint::Min(0),    // expected format
        ])
        .split(inner);

    let dim = Style::default().fg(theme.subtext);
    let intro = vec![
        Line::styled(
            "Upload your healthcare timeline CSV to visualize your journey",
            dim,
        ),
        Line::raw(""),
        Line::styled(
            format!("{} Upload Your Timeline Data", app.icons.upload()),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ];
    Paragraph::new(intro)
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    let focused = app.loading.is_none() && !app.show_help;
    let input_block = Block::default()
        .title(format!(" {} CSV file ", app.icons.file()))
        .borders(Borders::ALL)
        .border_set(app.borders.for_state(focused))
        .border_style(Style::default().fg(if focused {
            theme.border_focused
        } else {
            theme.border
        }));
    TextInput::new(&app.path_input, theme)
        .block(input_block)
        .placeholder("path/to/timeline.csv")
        .focused(focused)
        .render(chunks[1], buf);

    if let Some(path) = &app.loading {
        Paragraph::new(Line::styled(
            format!("Loading {}...", path.display()),
            Style::default().fg(theme.info),
        ))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);
    }

    let code = Style::default().fg(theme.secondary);
    let key = Style::default()
        .fg(theme.primary)
        .add_modifier(Modifier::BOLD);
    let mut format = vec![Line::styled(
        "Expected CSV format:",
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )];
    format.extend(FORMAT_EXAMPLE.iter().map(|row| Line::styled(*row, code)));
    format.push(Line::raw(""));
    format.push(Line::from(vec![
        Span::styled("Ctrl+S", key),
        Span::styled(
            format!(" {} writes a sample CSV you can load", app.icons.download()),
            dim,
        ),
    ]));
    Paragraph::new(format).render(chunks[3], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_screen_to_string;
    use std::path::PathBuf;

    #[test]
    fn test_upload_screen_content() {
        let app = App::new_for_test();
        let out = render_screen_to_string(&UploadScreen, &app);

        assert!(out.contains("Health Timeline Visualizer"));
        assert!(out.contains("Upload Your Timeline Data"));
        assert!(out.contains(">  path/to/timeline.csv"));
        assert!(out.contains("Expected CSV format:"));
        assert!(out.contains(FORMAT_EXAMPLE[0]));
        assert!(out.contains(FORMAT_EXAMPLE[1]));
    }

    #[test]
    fn test_upload_screen_shows_typed_path() {
        let mut app = App::new_for_test();
        app.path_input.set("data/t.csv");
        let out = render_screen_to_string(&UploadScreen, &app);
        assert!(out.contains("> data/t.csv"));
    }

    #[test]
    fn test_upload_screen_loading_line() {
        let mut app = App::new_for_test();
        app.loading = Some(PathBuf::from("big.csv"));
        let out = render_screen_to_string(&UploadScreen, &app);
        assert!(out.contains("Loading big.csv..."));
    }

    #[test]
    fn test_upload_status_bar() {
        let app = App::new_for_test();
        let out = render_screen_to_string(&UploadScreen, &app);
        let status = out.lines().last().unwrap();
        assert!(status.contains("Upload"));
        assert!(status.contains("Ctrl+S"));
    }
}
