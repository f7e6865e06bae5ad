//! Reusable widgets for the caretrail TUI.

mod detail;
mod stats;
pub mod status_bar;
pub mod text_input;

pub use detail::DetailPanel;
pub use stats::StatsPanel;
pub use status_bar::{KeyHint, StatusBar};
pub use text_input::{TextInput, TextInputState};
