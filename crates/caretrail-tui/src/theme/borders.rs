//! Border sets for Unicode and ASCII fallback.
//!
//! Under `NO_COLOR` the TUI runs in ASCII mode and draws boxes with `+-|`.

use ratatui::symbols::border;

use super::icons::IconMode;

/// Pure ASCII box, for terminals without box-drawing glyphs.
const ASCII: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Emphasised ASCII box for the selected card and focused panes.
const ASCII_BOLD: border::Set = border::Set {
    top_left: "#",
    top_right: "#",
    bottom_left: "#",
    bottom_right: "#",
    vertical_left: "#",
    vertical_right: "#",
    horizontal_top: "=",
    horizontal_bottom: "=",
};

/// Border set based on icon mode.
#[derive(Debug, Clone)]
pub struct BorderSet {
    mode: IconMode,
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Normal borders: rounded for Unicode.
    pub fn normal(&self) -> border::Set {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => border::ROUNDED,
            IconMode::Ascii => ASCII,
        }
    }

    /// Highlighted borders: thick for Unicode.
    pub fn focused(&self) -> border::Set {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => border::THICK,
            IconMode::Ascii => ASCII_BOLD,
        }
    }

    /// Pick the set for a card or pane.
    pub fn for_state(&self, highlighted: bool) -> border::Set {
        if highlighted {
            self.focused()
        } else {
            self.normal()
        }
    }
}
