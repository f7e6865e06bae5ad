//! Status bar widget.
//!
//! `[ Mode ]  key label  key label ...                     <toast>`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::text::visual_width;
use crate::theme::{IconSet, Theme};
use crate::toast::{Toast, ToastLevel};

/// A key hint for the status bar.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Status bar displayed at the bottom of the screen.
pub struct StatusBar<'a> {
    mode: &'a str,
    hints: Vec<KeyHint>,
    toast: Option<&'a Toast>,
    icons: Option<&'a IconSet>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar.
    pub fn new(mode: &'a str, theme: &'a Theme) -> Self {
        Self {
            mode,
            hints: Vec::new(),
            toast: None,
            icons: None,
            theme,
        }
    }

    /// Add key hints.
    #[must_use]
    pub fn hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// Show a toast on the right.
    #[must_use]
    pub fn toast(mut self, toast: Option<&'a Toast>) -> Self {
        self.toast = toast;
        self
    }

    /// Prefix toasts with a level icon.
    #[must_use]
    pub fn icons(mut self, icons: &'a IconSet) -> Self {
        self.icons = Some(icons);
        self
    }

    fn toast_text(&self, toast: &Toast) -> String {
        let icon = self.icons.and_then(|icons| match toast.level {
            ToastLevel::Success => Some(icons.success()),
            ToastLevel::Warning => Some(icons.warning()),
            ToastLevel::Error => Some(icons.error()),
            ToastLevel::Info => None,
        });
        match icon {
            Some(icon) => format!("{icon} {}", toast.message),
            None => toast.message.clone(),
        }
    }

    fn toast_style(&self, level: ToastLevel) -> Style {
        let fg = match level {
            ToastLevel::Success => self.theme.success,
            ToastLevel::Info => self.theme.info,
            ToastLevel::Warning => self.theme.warning,
            ToastLevel::Error => self.theme.error,
        };
        Style::default()
            .fg(fg)
            .bg(self.theme.surface)
            .add_modifier(Modifier::BOLD)
    }
}

impl Widget for StatusBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let bar = Style::default().fg(self.theme.text).bg(self.theme.surface);
        for x in area.x..area.x.saturating_add(area.width) {
            buf[(x, area.y)].set_char(' ').set_style(bar);
        }

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.mode),
                Style::default()
                    .fg(self.theme.base)
                    .bg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", bar),
        ];
        for hint in &self.hints {
            spans.push(Span::styled(
                format!(" {} ", hint.key),
                Style::default()
                    .fg(self.theme.text)
                    .bg(self.theme.overlay)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {} ", hint.label), bar));
        }

        let left = Line::from(spans);
        let left_width = left.width() as u16;
        buf.set_line(area.x, area.y, &left, area.width);

        // The toast wins over hints when space is short.
        if let Some(toast) = self.toast {
            let available = area.width.saturating_sub(2) as usize;
            let text = crate::text::truncate_to_width(&self.toast_text(toast), available);
            let width = visual_width(&text) as u16;
            let x = area.x + area.width.saturating_sub(width + 1);
            if x < area.x + left_width {
                for clear_x in x..area.x + area.width {
                    buf[(clear_x, area.y)].set_char(' ').set_style(bar);
                }
            }
            buf.set_string(x, area.y, text, self.toast_style(toast.level));
        }
    }
}
