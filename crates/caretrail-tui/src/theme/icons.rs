//! Icon sets for Nerd Fonts, Unicode, and ASCII fallback.

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons (default, richest experience).
    #[default]
    Nerd,
    /// Standard Unicode symbols (wide compatibility).
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    pub fn heart(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰋑",
            IconMode::Unicode => "♥",
            IconMode::Ascii => "<3",
        }
    }

    pub fn calendar(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰃭",
            IconMode::Unicode => "▦",
            IconMode::Ascii => "[#]",
        }
    }

    pub fn upload(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰕒",
            IconMode::Unicode => "⇪",
            IconMode::Ascii => "^",
        }
    }

    pub fn download(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰇚",
            IconMode::Unicode => "⇩",
            IconMode::Ascii => "v",
        }
    }

    pub fn file(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰈙",
            IconMode::Unicode => "▤",
            IconMode::Ascii => "[f]",
        }
    }

    pub fn success(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰄬",
            IconMode::Unicode => "✓",
            IconMode::Ascii => "[ok]",
        }
    }

    pub fn warning(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰀦",
            IconMode::Unicode => "⚠",
            IconMode::Ascii => "[!]",
        }
    }

    pub fn error(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰅖",
            IconMode::Unicode => "✗",
            IconMode::Ascii => "[x]",
        }
    }

    pub fn arrow_left(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰁍",
            IconMode::Unicode => "←",
            IconMode::Ascii => "<-",
        }
    }

    pub fn arrow_right(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰁔",
            IconMode::Unicode => "→",
            IconMode::Ascii => "->",
        }
    }
}
