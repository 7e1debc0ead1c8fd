use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};

/// The search field. The query text lives here, not in the store: it is
/// transient input owned by the view until the operator submits.
///
/// The field is never cleared on submit, there is no pending state, and
/// empty queries are allowed through.
#[derive(Debug, Default)]
pub struct SearchInput {
    value: String,
    /// Cursor position in characters, not bytes.
    cursor: usize,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the query wholesale and put the cursor at the end.
    pub fn set_value(&mut self, value: String) {
        self.cursor = value.chars().count();
        self.value = value;
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index();
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.value.chars().count();
        self.cursor = (self.cursor + 1).min(len);
    }

    /// Byte offset of the cursor into `value`.
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn widget(&self, focused: bool) -> Paragraph<'_> {
        let border = if focused { ACCENT } else { GLOBAL_BORDER };
        let line = if self.value.is_empty() {
            Line::from(Span::styled(
                "username",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(Span::styled(
                self.value.as_str(),
                Style::default().fg(HEADER_TEXT),
            ))
        };
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search user ")
                .border_style(Style::default().fg(border)),
        )
    }

    /// Terminal cursor position when the field is focused, clamped to the
    /// field's interior.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let interior = area.width.saturating_sub(2);
        let x = (self.cursor as u16).min(interior.saturating_sub(1));
        (area.x + 1 + x, area.y + 1)
    }
}
