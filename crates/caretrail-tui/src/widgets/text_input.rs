//! Single-line text input, used for the file path on the upload screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::text::visual_width;
use crate::theme::Theme;

/// State for a text input, managing content and cursor position.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    /// The text content.
    content: String,
    /// Cursor position in characters (not bytes).
    cursor: usize,
    /// Previously submitted values, oldest first.
    history: Vec<String>,
    /// Position while browsing history; `None` means editing fresh input.
    history_index: Option<usize>,
    /// Input saved when history browsing started.
    saved_input: String,
}

impl TextInputState {
    /// Create a new empty text input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Replace the content, placing the cursor at the end.
    pub fn set(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.chars().count();
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_offset(self.cursor);
        self.content.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Record the current content in history and return it.
    ///
    /// The content stays in place so a failed load can be corrected.
    pub fn submit(&mut self) -> String {
        let content = self.content.clone();
        let trimmed = content.trim();
        if !trimmed.is_empty() && self.history.last().map(String::as_str) != Some(trimmed) {
            self.history.push(trimmed.to_string());
        }
        self.history_index = None;
        self.saved_input.clear();
        content
    }

    /// Step back to an older history entry.
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next = match self.history_index {
            None => {
                self.saved_input = self.content.clone();
                self.history.len() - 1
            }
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.history_index = Some(next);
        let entry = self.history[next].clone();
        self.set(entry);
    }

    /// Step forward to a newer history entry, or back to the saved input.
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(i) if i + 1 < self.history.len() => {
                self.history_index = Some(i + 1);
                let entry = self.history[i + 1].clone();
                self.set(entry);
            }
            Some(_) => {
                self.history_index = None;
                let saved = std::mem::take(&mut self.saved_input);
                self.set(saved);
            }
        }
    }
}

/// Renders a [`TextInputState`] on one line.
///
/// When the content is wider than the area, the view scrolls so the cursor
/// stays visible.
pub struct TextInput<'a> {
    state: &'a TextInputState,
    theme: &'a Theme,
    block: Option<Block<'a>>,
    placeholder: Option<&'a str>,
    focused: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(state: &'a TextInputState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            block: None,
            placeholder: None,
            focused: true,
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

const PROMPT: &str = "> ";

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.height < 1 || inner.width < 1 {
            return;
        }

        let prompt_style = Style::default().fg(self.theme.primary);
        let text_style = Style::default().fg(self.theme.text);
        let cursor_style = Style::default()
            .fg(self.theme.base)
            .bg(self.theme.primary)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(PROMPT, prompt_style)];

        if self.state.is_empty() {
            if self.focused {
                spans.push(Span::styled(" ", cursor_style));
            }
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(placeholder, Style::default().fg(self.theme.muted)));
            }
            Paragraph::new(Line::from(spans)).render(inner, buf);
            return;
        }

        // Keep the cursor cell inside the visible window.
        let room = (inner.width as usize).saturating_sub(PROMPT.len() + 1);
        let chars: Vec<char> = self.state.content().chars().collect();
        let cursor = self.state.cursor();
        let mut start = 0;
        while start < cursor
            && visual_width(&chars[start..cursor].iter().collect::<String>()) > room
        {
            start += 1;
        }

        let before: String = chars[start..cursor].iter().collect();
        spans.push(Span::styled(before, text_style));
        if self.focused {
            let at = chars.get(cursor).map_or(" ".to_string(), char::to_string);
            spans.push(Span::styled(at, cursor_style));
            let after: String = chars.iter().skip(cursor + 1).collect();
            spans.push(Span::styled(after, text_style));
        } else {
            let after: String = chars[cursor..].iter().collect();
            spans.push(Span::styled(after, text_style));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
