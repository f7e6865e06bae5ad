//! Test utilities for caretrail-tui rendering tests.

use crate::app::App;
use crate::screens::Screen as ScreenTrait;
use caretrail_engine::TimelineRecord;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 120;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 40;

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create a test app with the bundled sample loaded and shown.
pub fn create_loaded_app() -> App {
    let mut app = App::new_for_test();
    let ticket = app.controller.begin_load();
    app.controller
        .finish_load(ticket, caretrail_engine::SAMPLE_TIMELINE)
        .expect("fresh ticket");
    app.screen = crate::app::Screen::Timeline;
    app
}

/// A record with fixed text and the given id and month.
pub fn sample_record(id: usize, month: &str) -> TimelineRecord {
    TimelineRecord {
        id,
        month: month.to_string(),
        member_concern: "Back pain".to_string(),
        decision_by_elyx: "Refer to physio".to_string(),
        reason_for_decision: Some("Chronic history".to_string()),
    }
}

/// Convert a buffer to text, one line per row with trailing spaces trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render a screen to a buffer and return it as a string.
pub fn render_screen_to_string<S: ScreenTrait>(screen: &S, app: &App) -> String {
    render_screen_to_string_sized(screen, app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render a screen at custom dimensions and return it as a string.
pub fn render_screen_to_string_sized<S: ScreenTrait>(
    screen: &S,
    app: &App,
    width: u16,
    height: u16,
) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    screen.render(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT);
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_create_loaded_app() {
        let app = create_loaded_app();
        assert_eq!(app.controller.len(), 8);
        assert_eq!(app.controller.selected_index(), Some(0));
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 2, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\n\nWorld");
    }
}
