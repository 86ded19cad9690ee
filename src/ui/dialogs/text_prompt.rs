//! Single-line text prompt

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::events::edit_key;
use crate::ui::layout::DialogLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::form::TextInput;

pub struct TextPromptDialog {
    title: String,
    message: String,
    input: TextInput,
    /// Entered text, set on Enter
    pub result: Option<String>,
}

impl TextPromptDialog {
    pub fn new(title: &str, message: &str, label: &str) -> Self {
        let mut input = TextInput::new(label);
        input.focused = true;

        Self {
            title: title.to_string(),
            message: message.to_string(),
            input,
            result: None,
        }
    }

    /// Returns true when the dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Enter => {
                self.result = Some(self.input.value().to_string());
                return true;
            }
            _ => {
                if let Some(edit) = edit_key(&key) {
                    self.input.editor.apply(edit);
                }
            }
        }
        false
    }

    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        let dialog_area = DialogLayout::centered(frame.area(), 56, 9).dialog;

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(theme.border_focused());
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        frame.render_widget(Paragraph::new(self.message.clone()).style(theme.normal()), chunks[0]);
        self.input.render(frame, chunks[1], theme.normal(), theme.border_focused());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn enter_submits_typed_text() {
        let mut prompt = TextPromptDialog::new("Save", "Name this filter", "Name");
        for c in "夜间扫描".chars() {
            assert!(!prompt.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }
        assert!(prompt.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert_eq!(prompt.result.as_deref(), Some("夜间扫描"));
    }

    #[test]
    fn escape_cancels() {
        let mut prompt = TextPromptDialog::new("Save", "Name this filter", "Name");
        assert!(prompt.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(prompt.result.is_none());
    }
}
