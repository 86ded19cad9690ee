//! Quick search bar widget

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::form::LineEditor;
use crate::app::events::EditKey;

/// Search bar state
#[derive(Default)]
pub struct SearchBar {
    pub editor: LineEditor,
    pub active: bool,
    /// Name of the field the query is matched against
    pub target: String,
}

impl SearchBar {
    pub fn new(target: &str) -> Self {
        Self {
            editor: LineEditor::default(),
            active: false,
            target: target.to_string(),
        }
    }

    pub fn query(&self) -> &str {
        self.editor.value()
    }

    pub fn activate(&mut self, current: &str) {
        self.active = true;
        self.editor = LineEditor::new(current);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn clear(&mut self) {
        self.editor.clear();
    }

    pub fn apply(&mut self, edit: EditKey) {
        self.editor.apply(edit);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, style: Style, focused_style: Style) {
        let border_style = if self.active { focused_style } else { style };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Search {} (Enter to apply, Esc to cancel) ", self.target));

        let paragraph = Paragraph::new(self.editor.value().to_string())
            .block(block)
            .style(style);

        frame.render_widget(paragraph, area);

        if self.active {
            frame.set_cursor_position((area.x + 1 + self.editor.cursor_column(), area.y + 1));
        }
    }
}
