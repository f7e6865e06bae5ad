//! Catppuccin color palettes for the TUI.

use caretrail_engine::ThemeName;
use ratatui::style::Color;

/// The Catppuccin swatches the themes draw from.
struct Flavor {
    base: Color,
    surface0: Color,
    surface1: Color,
    surface2: Color,
    overlay0: Color,
    subtext0: Color,
    text: Color,
    lavender: Color,
    blue: Color,
    sapphire: Color,
    green: Color,
    yellow: Color,
    red: Color,
}

const MOCHA: Flavor = Flavor {
    base: Color::Rgb(0x1e, 0x1e, 0x2e),
    surface0: Color::Rgb(0x31, 0x32, 0x44),
    surface1: Color::Rgb(0x45, 0x47, 0x5a),
    surface2: Color::Rgb(0x58, 0x5b, 0x70),
    overlay0: Color::Rgb(0x6c, 0x70, 0x86),
    subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
    text: Color::Rgb(0xcd, 0xd6, 0xf4),
    lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
    blue: Color::Rgb(0x89, 0xb4, 0xfa),
    sapphire: Color::Rgb(0x74, 0xc7, 0xec),
    green: Color::Rgb(0xa6, 0xe3, 0xa1),
    yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
    red: Color::Rgb(0xf3, 0x8b, 0xa8),
};

const LATTE: Flavor = Flavor {
    base: Color::Rgb(0xef, 0xf1, 0xf5),
    surface0: Color::Rgb(0xcc, 0xd0, 0xda),
    surface1: Color::Rgb(0xbc, 0xc0, 0xcc),
    surface2: Color::Rgb(0xac, 0xb0, 0xbe),
    overlay0: Color::Rgb(0x9c, 0xa0, 0xb0),
    subtext0: Color::Rgb(0x6c, 0x6f, 0x85),
    text: Color::Rgb(0x4c, 0x4f, 0x69),
    lavender: Color::Rgb(0x72, 0x87, 0xfd),
    blue: Color::Rgb(0x1e, 0x66, 0xf5),
    sapphire: Color::Rgb(0x20, 0x9f, 0xb5),
    green: Color::Rgb(0x40, 0xa0, 0x2b),
    yellow: Color::Rgb(0xdf, 0x8e, 0x1d),
    red: Color::Rgb(0xd2, 0x0f, 0x39),
};

/// Colors by UI role.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub secondary: Color,

    // Semantic
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Cards
    pub badge: Color,
    pub card_selected: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Resolve a configured theme name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Catppuccin Mocha (default dark theme).
    pub fn mocha() -> Self {
        Self::from_flavor(&MOCHA)
    }

    /// Catppuccin Latte (light theme).
    pub fn latte() -> Self {
        Self::from_flavor(&LATTE)
    }

    /// Map Catppuccin swatches onto UI roles.
    fn from_flavor(f: &Flavor) -> Self {
        Self {
            base: f.base,
            surface: f.surface0,
            overlay: f.surface1,
            text: f.text,
            subtext: f.subtext0,
            muted: f.overlay0,
            primary: f.blue,
            secondary: f.sapphire,
            success: f.green,
            warning: f.yellow,
            error: f.red,
            info: f.sapphire,
            badge: f.lavender,
            card_selected: f.surface0,
            border: f.surface2,
            border_focused: f.blue,
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),
            overlay: Color::Rgb(40, 40, 40),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,
            secondary: Color::Magenta,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,

            badge: Color::LightCyan,
            card_selected: Color::Rgb(40, 40, 40),

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mocha_roles() {
        let theme = Theme::mocha();
        assert!(matches!(theme.base, Color::Rgb(30, 30, 46)));
        // Selected cards sit one step above the background
        assert_eq!(theme.card_selected, theme.surface);
        assert_eq!(theme.border_focused, theme.primary);
    }

    #[test]
    fn test_latte_theme_creates() {
        let theme = Theme::latte();
        assert!(matches!(theme.base, Color::Rgb(239, 241, 245)));
    }

    #[test]
    fn test_high_contrast_theme_creates() {
        let theme = Theme::high_contrast();
        assert!(matches!(theme.base, Color::Black));
    }

    #[test]
    fn test_from_name() {
        assert!(matches!(
            Theme::from_name(ThemeName::Latte).base,
            Color::Rgb(239, 241, 245)
        ));
        assert!(matches!(
            Theme::from_name(ThemeName::HighContrast).base,
            Color::Black
        ));
        assert!(matches!(Theme::default().base, Color::Rgb(30, 30, 46)));
    }
}
