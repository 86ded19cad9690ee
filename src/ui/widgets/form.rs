//! Form input widgets

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::events::EditKey;

/// Single-line text buffer with a char-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    value: String,
    cursor: usize,
}

impl LineEditor {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn apply(&mut self, edit: EditKey) {
        let len = self.value.chars().count();
        match edit {
            EditKey::Insert(c) => {
                let at = self.byte_offset(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
            }
            EditKey::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
            }
            EditKey::Delete => {
                if self.cursor < len {
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
            }
            EditKey::Left => self.cursor = self.cursor.saturating_sub(1),
            EditKey::Right => self.cursor = (self.cursor + 1).min(len),
            EditKey::Home => self.cursor = 0,
            EditKey::End => self.cursor = len,
        }
    }

    /// Display columns left of the cursor
    pub fn cursor_column(&self) -> u16 {
        let prefix: String = self.value.chars().take(self.cursor).collect();
        Span::raw(prefix).width() as u16
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.value
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// Text input field
pub struct TextInput {
    pub label: String,
    pub editor: LineEditor,
    pub focused: bool,
}

impl TextInput {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            editor: LineEditor::default(),
            focused: false,
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.editor = LineEditor::new(value);
        self
    }

    pub fn value(&self) -> &str {
        self.editor.value()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, style: Style, focused_style: Style) {
        let border_style = if self.focused { focused_style } else { style };

        let block = Block::default()
            .title(format!(" {} ", self.label))
            .borders(Borders::ALL)
            .border_style(border_style);

        let paragraph = Paragraph::new(self.editor.value().to_string())
            .block(block)
            .style(style);

        frame.render_widget(paragraph, area);

        if self.focused {
            frame.set_cursor_position((area.x + 1 + self.editor.cursor_column(), area.y + 1));
        }
    }
}

/// Select/dropdown field
pub struct SelectInput {
    pub label: String,
    pub options: Vec<String>,
    pub selected: usize,
    pub focused: bool,
}

impl SelectInput {
    pub fn new(label: &str, options: Vec<String>) -> Self {
        Self {
            label: label.to_string(),
            options,
            selected: 0,
            focused: false,
        }
    }

    /// Preselect `value` when it is one of the options
    pub fn with_selected(mut self, value: &str) -> Self {
        if let Some(i) = self.options.iter().position(|o| o == value) {
            self.selected = i;
        }
        self
    }

    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.selected = 0;
    }

    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = if self.selected == 0 {
                self.options.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.options.get(self.selected).map(|s| s.as_str())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, style: Style, focused_style: Style) {
        let border_style = if self.focused { focused_style } else { style };

        let block = Block::default()
            .title(format!(" {} ", self.label))
            .borders(Borders::ALL)
            .border_style(border_style);

        let display = self.options.get(self.selected)
            .map(|s| format!("< {} >", s))
            .unwrap_or_else(|| "No options".to_string());

        let paragraph = Paragraph::new(display)
            .block(block)
            .style(style);

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_multibyte_text() {
        let mut editor = LineEditor::default();
        for c in "僵尸网络".chars() {
            editor.apply(EditKey::Insert(c));
        }
        editor.apply(EditKey::Left);
        editor.apply(EditKey::Backspace);
        assert_eq!(editor.value(), "僵尸络");

        editor.apply(EditKey::Home);
        editor.apply(EditKey::Delete);
        assert_eq!(editor.value(), "尸络");
        assert_eq!(editor.cursor_column(), 0);

        editor.apply(EditKey::End);
        assert_eq!(editor.cursor_column(), 4);
    }

    #[test]
    fn select_wraps_and_preselects() {
        let options = vec!["Any".to_string(), "TCP".to_string(), "UDP".to_string()];
        let mut select = SelectInput::new("Protocol", options).with_selected("UDP");
        assert_eq!(select.value(), Some("UDP"));
        select.next();
        assert_eq!(select.value(), Some("Any"));
        select.prev();
        assert_eq!(select.value(), Some("UDP"));
    }
}
