//! Yes/no confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::DialogLayout;
use crate::ui::theme::Theme;

pub struct ConfirmDialog {
    title: String,
    message: String,
    /// Whether "Yes" is highlighted
    selected: bool,
    pub result: Option<bool>,
}

impl ConfirmDialog {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            selected: false,
            result: None,
        }
    }

    /// Returns true when the dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.selected = !self.selected;
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.result = Some(true);
                return true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.result = Some(false);
                return true;
            }
            KeyCode::Enter => {
                self.result = Some(self.selected);
                return true;
            }
            _ => {}
        }
        false
    }

    pub fn confirmed(&self) -> bool {
        self.result == Some(true)
    }

    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        let dialog_area = DialogLayout::centered(frame.area(), 50, 8).dialog;

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(theme.warning());
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(2), Constraint::Length(1)])
            .split(inner);

        let message = Paragraph::new(self.message.clone())
            .style(theme.normal())
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let (yes_style, no_style) = if self.selected {
            (theme.accent().add_modifier(Modifier::BOLD), theme.dim())
        } else {
            (theme.dim(), theme.accent().add_modifier(Modifier::BOLD))
        };

        let buttons = Line::from(vec![
            Span::raw("  "),
            Span::styled("[ Yes ]", yes_style),
            Span::raw("    "),
            Span::styled("[ No ]", no_style),
        ]);
        frame.render_widget(Paragraph::new(buttons), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn enter_defaults_to_no() {
        let mut dialog = ConfirmDialog::new("Delete", "Really?");
        assert!(dialog.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!dialog.confirmed());
    }

    #[test]
    fn y_confirms() {
        let mut dialog = ConfirmDialog::new("Delete", "Really?");
        assert!(dialog.handle_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE)));
        assert!(dialog.confirmed());
    }
}
