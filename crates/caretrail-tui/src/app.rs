//! Application state and update logic for the caretrail TUI.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use caretrail_engine::{
    write_sample, Config, IngestEvent, LoadReport, LoadTicket, SampleError, TimelineController,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info, warn};

use crate::event::{key_to_action, Action};
use crate::layout::TimelineLayout;
use crate::strip::{StripState, WHEEL_STEP};
use crate::theme::{BorderSet, IconMode, IconSet, Theme};
use crate::toast::Toast;
use crate::widgets::TextInputState;

/// Most skipped line numbers spelled out in a toast.
const MAX_LISTED_LINES: usize = 5;

#[allow(clippy::cast_possible_wrap)]
const WHEEL_DELTA: isize = WHEEL_STEP as isize;

/// The current screen being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Path input and expected format.
    #[default]
    Upload,
    /// Card strip, detail and stats.
    Timeline,
}

/// Presentation settings taken from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiConfig {
    /// Icon and border mode.
    pub icons: IconMode,
    /// Whether `NO_COLOR` is set.
    pub no_color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl UiConfig {
    /// Create config from environment, respecting `NO_COLOR`.
    pub fn from_env() -> Self {
        Self::with_no_color(std::env::var_os("NO_COLOR").is_some())
    }

    pub fn with_no_color(no_color: bool) -> Self {
        let icons = if no_color {
            IconMode::Ascii
        } else {
            IconMode::Nerd
        };
        Self { icons, no_color }
    }
}

/// A file read the event loop should start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub path: PathBuf,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Current screen.
    pub screen: Screen,

    /// Loaded records and selection.
    pub controller: TimelineController,

    /// Card strip scroll and drag state.
    pub strip: StripState,

    /// Path typed on the upload screen.
    pub path_input: TextInputState,

    /// Notification shown in the status bar.
    pub toast: Option<Toast>,

    /// File whose read is in flight.
    pub loading: Option<PathBuf>,

    /// Full terminal area, used to map mouse positions.
    pub terminal_size: Rect,

    pub config: Config,
    pub theme: Theme,
    pub icons: IconSet,
    pub borders: BorderSet,

    /// Read requested but not yet handed to the ingestor.
    pending_load: Option<LoadRequest>,
}

impl App {
    /// Create the app from loaded configuration.
    pub fn new(config: Config, ui: UiConfig) -> Self {
        let theme = if ui.no_color {
            Theme::high_contrast()
        } else {
            Theme::from_name(config.theme)
        };

        Self {
            should_quit: false,
            show_help: false,
            screen: Screen::Upload,
            controller: TimelineController::new(),
            strip: StripState::new(),
            path_input: TextInputState::new(),
            toast: None,
            loading: None,
            terminal_size: Rect::default(),
            config,
            theme,
            icons: IconSet::new(ui.icons),
            borders: BorderSet::new(ui.icons),
            pending_load: None,
        }
    }

    /// App with default config, ASCII drawing and a 120x40 terminal.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        let mut app = Self::new(Config::default(), UiConfig::with_no_color(true));
        app.terminal_size = Rect::new(0, 0, 120, 40);
        app
    }

    /// Take the pending read, if any.
    pub fn take_load_request(&mut self) -> Option<LoadRequest> {
        self.pending_load.take()
    }

    /// Queue a read of `path`, superseding any read still in flight.
    pub fn request_load(&mut self, path: PathBuf) {
        if !has_csv_extension(&path) {
            self.toast = Some(Toast::warning(format!(
                "Please choose a .csv file (got {})",
                display_name(&path)
            )));
            return;
        }

        let ticket = self.controller.begin_load();
        info!(%ticket, path = %path.display(), "load requested");
        self.loading = Some(path.clone());
        self.pending_load = Some(LoadRequest { ticket, path });
    }

    /// Apply text that has already been read, as if its read just finished.
    pub fn load_text(&mut self, path: PathBuf, text: String) {
        let ticket = self.controller.begin_load();
        self.on_ingest(IngestEvent {
            ticket,
            path,
            result: Ok(text),
        });
    }

    /// Select the record with `id` and scroll it into view.
    pub fn select_id(&mut self, id: usize) -> bool {
        let found = self.controller.select(id);
        if found {
            self.reveal_selection();
        }
        found
    }

    /// Submit the path input.
    pub fn submit_path(&mut self) {
        let raw = self.path_input.submit();
        let path = raw.trim();
        if path.is_empty() {
            self.toast = Some(Toast::warning("Enter the path of a .csv file"));
            return;
        }
        self.request_load(PathBuf::from(path));
    }

    /// Apply a finished read.
    pub fn on_ingest(&mut self, event: IngestEvent) {
        let IngestEvent {
            ticket,
            path,
            result,
        } = event;

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                if !self.controller.is_current(ticket) {
                    debug!(%ticket, "ignoring error from stale read");
                    return;
                }
                self.loading = None;
                self.toast = Some(Toast::error(e.to_string()));
                return;
            }
        };

        match self.controller.finish_load(ticket, &text) {
            Ok(report) => {
                self.loading = None;
                self.apply_report(&path, &report);
            }
            Err(e) => debug!("{e}"),
        }
    }

    fn apply_report(&mut self, path: &Path, report: &LoadReport) {
        self.strip.reset();
        let name = display_name(path);

        if report.is_empty() {
            self.screen = Screen::Upload;
            self.toast = Some(Toast::warning(format!(
                "No timeline entries found in {name}"
            )));
            return;
        }

        self.screen = Screen::Timeline;
        self.toast = Some(if report.skipped_lines.is_empty() {
            Toast::success(format!("Loaded {} entries from {name}", report.accepted))
        } else {
            Toast::warning(format!(
                "Loaded {} entries, skipped {} malformed rows: lines {}",
                report.accepted,
                report.skipped_lines.len(),
                list_lines(&report.skipped_lines)
            ))
        });
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = key_to_action(key);

        if self.show_help {
            // Any key closes help; Ctrl+C still quits.
            self.show_help = false;
            if action == Action::Quit && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
            }
            return;
        }

        if self.screen == Screen::Upload && self.handle_upload_key(key) {
            return;
        }
        self.handle_action(action);
    }

    /// Insert pasted text into the path input on the upload screen.
    ///
    /// Only the first line is kept, since a path never spans lines.
    pub fn handle_paste(&mut self, text: &str) {
        if self.screen != Screen::Upload || self.show_help {
            return;
        }
        let line = text.lines().next().unwrap_or_default();
        self.path_input.insert_str(line.trim_end_matches('\r'));
    }

    /// Route text editing keys to the path input.
    /// Returns true if the key was consumed.
    fn handle_upload_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Enter => {
                if self.loading.is_none() {
                    self.submit_path();
                }
                true
            }
            KeyCode::Esc if !self.path_input.is_empty() => {
                self.path_input.clear();
                true
            }
            // With an empty input `?` opens help instead of being typed.
            KeyCode::Char('?') if self.path_input.is_empty() => false,
            KeyCode::Char(c) => {
                self.path_input.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.path_input.backspace();
                true
            }
            KeyCode::Delete => {
                self.path_input.delete();
                true
            }
            KeyCode::Left => {
                self.path_input.move_left();
                true
            }
            KeyCode::Right => {
                self.path_input.move_right();
                true
            }
            KeyCode::Home => {
                self.path_input.move_home();
                true
            }
            KeyCode::End => {
                self.path_input.move_end();
                true
            }
            KeyCode::Up => {
                self.path_input.history_prev();
                true
            }
            KeyCode::Down => {
                self.path_input.history_next();
                true
            }
            _ => false,
        }
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = !self.show_help,
            Action::Back => self.show_help = false,
            Action::WriteSample => self.write_sample(),
            Action::Left if self.screen == Screen::Timeline => {
                self.controller.select_prev();
                self.reveal_selection();
            }
            Action::Right if self.screen == Screen::Timeline => {
                self.controller.select_next();
                self.reveal_selection();
            }
            Action::First if self.screen == Screen::Timeline => {
                self.controller.select_index(0);
                self.reveal_selection();
            }
            Action::Last if self.screen == Screen::Timeline => {
                self.controller
                    .select_index(self.controller.len().saturating_sub(1));
                self.reveal_selection();
            }
            Action::Select if self.screen == Screen::Timeline => self.reveal_selection(),
            Action::Reset if self.screen == Screen::Timeline => self.reset(),
            _ => {}
        }
    }

    /// Handle a mouse event on the timeline screen.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen != Screen::Timeline || self.show_help {
            return;
        }

        let layout = TimelineLayout::new(self.terminal_size);
        let area = layout.strip;
        let count = self.controller.len();
        let viewport = usize::from(area.width);
        let position = Position::new(mouse.column, mouse.row);
        let x = mouse.column.saturating_sub(area.x);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if area.contains(position) => {
                self.strip.begin_drag(x);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.strip
                    .drag_to(x, self.config.drag_multiplier, count, viewport);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.strip.end_drag() && area.contains(position) {
                    if let Some(index) = self.strip.card_at(x, count) {
                        self.controller.select_index(index);
                    }
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight
                if layout.strip_pane.contains(position) =>
            {
                self.strip.scroll_by(WHEEL_DELTA, count, viewport);
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft
                if layout.strip_pane.contains(position) =>
            {
                self.strip.scroll_by(-WHEEL_DELTA, count, viewport);
            }
            _ => {}
        }
    }

    /// Terminal was resized.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_size = Rect::new(0, 0, width, height);
        let viewport = self.strip_viewport();
        // Re-clamp the scroll to the new width.
        self.strip.scroll_by(0, self.controller.len(), viewport);
        self.reveal_selection();
    }

    /// Advance timers.
    pub fn tick(&mut self) {
        if self.toast.as_mut().is_some_and(Toast::tick) {
            self.toast = None;
        }
    }

    /// Drop the timeline and go back to the upload screen.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.strip.reset();
        self.loading = None;
        self.pending_load = None;
        self.screen = Screen::Upload;
    }

    /// Write the bundled sample into the configured directory and put its
    /// path in the input.
    pub fn write_sample(&mut self) {
        match write_sample(&self.config.sample_dir) {
            Ok(path) => {
                self.toast = Some(Toast::success(format!(
                    "Sample written to {}",
                    path.display()
                )));
                self.path_input.set(path.display().to_string());
            }
            Err(SampleError::AlreadyExists(path)) => {
                self.toast = Some(Toast::info(format!(
                    "Sample already exists at {}",
                    path.display()
                )));
                self.path_input.set(path.display().to_string());
            }
            Err(e) => {
                warn!("{e}");
                self.toast = Some(Toast::error(e.to_string()));
            }
        }
    }

    fn strip_viewport(&self) -> usize {
        usize::from(TimelineLayout::new(self.terminal_size).strip.width)
    }

    fn reveal_selection(&mut self) {
        if let Some(index) = self.controller.selected_index() {
            let viewport = self.strip_viewport();
            self.strip.ensure_visible(index, viewport);
        }
    }
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// "3, 7, 9" or "3, 7, 9, 11, 12 and 4 more".
fn list_lines(lines: &[usize]) -> String {
    let shown: Vec<String> = lines
        .iter()
        .take(MAX_LISTED_LINES)
        .map(ToString::to_string)
        .collect();
    let mut out = shown.join(", ");
    if lines.len() > MAX_LISTED_LINES {
        out.push_str(&format!(" and {} more", lines.len() - MAX_LISTED_LINES));
    }
    out
}
