//! caretrail-tui: Terminal UI for browsing health timelines
//!
//! This crate provides the TUI layer for caretrail, including:
//! - Upload screen with a path input and sample export
//! - Timeline screen with a scrollable card strip, detail and stats panels
//! - Shared widgets (status bar, text input) and theming

mod app;
mod event;
mod layout;
mod screens;
mod strip;
#[cfg(test)]
pub mod test_utils;
mod text;
mod theme;
mod toast;
mod widgets;

pub use app::{App, LoadRequest, Screen, UiConfig};
pub use caretrail_engine;
pub use event::{Action, Event, EventHandler};

use caretrail_engine::{Config, IngestEvent, Ingestor};
use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::{Buffer, Cell},
    layout::Rect,
    Terminal,
};
use std::io::{self, stdout};
use std::path::PathBuf;
use tracing::info;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            ShowCursor
        );
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, optionally starts loading `initial_file`, runs the
/// event loop, and restores the terminal on exit.
pub async fn run_tui(
    config: Config,
    initial_file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate_ms = config.tick_rate_ms;
    let mut app = App::new(config, UiConfig::from_env());
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    if let Some(path) = initial_file {
        app.path_input.set(path.display().to_string());
        app.request_load(path);
    }

    let mut events = EventHandler::new(tick_rate_ms);
    let mut ingestor = Ingestor::new();

    info!("tui started");
    let result = run_loop(&mut terminal, &mut app, &mut events, &mut ingestor).await;

    terminal.show_cursor()?;
    info!("tui stopped");

    result
}

/// What woke the UI loop.
enum Wake {
    Input(Event),
    Ingest(IngestEvent),
}

/// Wait for terminal input or a finished read, whichever comes first.
///
/// Returns `None` once the terminal event source has shut down.
async fn next_wake(events: &mut EventHandler, ingestor: &mut Ingestor) -> Option<Wake> {
    tokio::select! {
        Some(done) = ingestor.recv() => Some(Wake::Ingest(done)),
        event = events.next() => event.map(Wake::Input),
    }
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    ingestor: &mut Ingestor,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Start any read the last event asked for
        if let Some(request) = app.take_load_request() {
            ingestor.spawn(request.ticket, request.path);
        }

        terminal.draw(|frame| {
            let area = frame.area();
            screens::render_app(app, area, frame.buffer_mut());
        })?;

        match next_wake(events, ingestor).await {
            Some(Wake::Ingest(done)) => app.on_ingest(done),
            Some(Wake::Input(event)) => match event {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Tick => app.tick(),
                Event::Resize(width, height) => app.resize(width, height),
                Event::Paste(text) => app.handle_paste(&text),
            },
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the app into an off-screen buffer.
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    screens::render_app(app, area, &mut buf);
    buf
}

/// Render the app as plain text, one line per terminal row.
///
/// Trailing spaces are trimmed. Used by `caretrail render`.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let buf = render_to_buffer(app, width, height);
    let mut out = String::new();
    for row in buf.content.chunks(usize::from(width.max(1))) {
        let line: String = row.iter().map(Cell::symbol).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}


/// End-to-end flows driven through key, mouse and ingest events.
#[cfg(test)]
mod navigation_tests {
    use crate::app::Screen;
    use crate::test_utils::{buffer_to_string, TEST_HEIGHT, TEST_WIDTH};
    use crate::App;
    use caretrail_engine::Ingestor;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::path::PathBuf;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen_text(app: &App) -> String {
        buffer_to_string(&crate::render_to_buffer(app, TEST_WIDTH, TEST_HEIGHT))
    }

    #[tokio::test]
    async fn test_upload_browse_reset_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new_for_test();
        app.config.sample_dir = dir.path().to_path_buf();
        let mut ingestor = Ingestor::new();

        // Write the sample and load it from the pre-filled input
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        press(&mut app, KeyCode::Enter);
        let request = app.take_load_request().unwrap();
        assert!(screen_text(&app).contains("Loading"));

        ingestor.spawn(request.ticket, request.path);
        let done = ingestor.recv().await.unwrap();
        app.on_ingest(done);

        assert_eq!(app.screen, Screen::Timeline);
        let text = screen_text(&app);
        assert!(text.contains("Detailed View - Jan"));
        assert!(text.contains("Loaded 8 entries"));

        // Browse
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert!(screen_text(&app).contains("Detailed View - Mar"));

        // Back to upload
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.screen, Screen::Upload);
        assert!(screen_text(&app).contains("Upload Your Timeline Data"));
    }

    #[tokio::test]
    async fn test_missing_file_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new_for_test();
        let mut ingestor = Ingestor::new();

        let path = dir.path().join("nope.csv");
        type_str(&mut app, &path.display().to_string());
        press(&mut app, KeyCode::Enter);
        let request = app.take_load_request().unwrap();
        ingestor.spawn(request.ticket, request.path);
        app.on_ingest(ingestor.recv().await.unwrap());

        assert_eq!(app.screen, Screen::Upload);
        assert!(screen_text(&app).contains("failed to read"));
    }

    #[tokio::test]
    async fn test_newer_upload_wins_race() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        std::fs::write(&first, "h\n|Jan|a|b|c\n|Feb|a|b|c\n").unwrap();
        std::fs::write(&second, "h\n|Sep|x|y|z\n").unwrap();

        let mut app = App::new_for_test();
        let mut ingestor = Ingestor::new();

        app.request_load(first);
        let old = app.take_load_request().unwrap();
        app.request_load(second);
        let new = app.take_load_request().unwrap();

        // Deliver the newer read first, then the older one
        ingestor.spawn(new.ticket, new.path);
        app.on_ingest(ingestor.recv().await.unwrap());
        ingestor.spawn(old.ticket, old.path);
        app.on_ingest(ingestor.recv().await.unwrap());

        assert_eq!(app.controller.len(), 1);
        assert_eq!(app.controller.selected().unwrap().month, "Sep");
    }

    #[test]
    fn test_initial_path_is_requested() {
        let mut app = App::new_for_test();
        app.request_load(PathBuf::from("start.csv"));
        assert!(app.take_load_request().is_some());
        assert_eq!(app.loading, Some(PathBuf::from("start.csv")));
    }
}
