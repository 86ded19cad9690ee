//! Saved filter preset picker

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};

use super::confirm::ConfirmDialog;
use crate::app::events::{navigation_delta, step_index};
use crate::engine::SavedFilterPreset;
use crate::models::RecordField;
use crate::ui::layout::DialogLayout;
use crate::ui::theme::Theme;
use crate::utils::truncate;

/// One preset as listed in the picker
#[derive(Debug, Clone, PartialEq)]
pub struct PresetItem {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub create_time: String,
}

impl PresetItem {
    pub fn from_preset<F: RecordField>(preset: &SavedFilterPreset<F>) -> Self {
        let summary = preset
            .conditions
            .iter()
            .map(|(field, criterion)| format!("{}={}", field.label(), criterion.summary()))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: preset.id.clone(),
            name: preset.name.clone(),
            summary,
            create_time: preset.create_time.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    Apply(String),
    Delete(String),
}

pub struct PresetPickerDialog {
    items: Vec<PresetItem>,
    table_state: TableState,
    confirm: Option<ConfirmDialog>,
    action: Option<PickerAction>,
}

impl PresetPickerDialog {
    pub fn new(items: Vec<PresetItem>) -> Self {
        let mut table_state = TableState::default();
        table_state.select(if items.is_empty() { None } else { Some(0) });

        Self {
            items,
            table_state,
            confirm: None,
            action: None,
        }
    }

    /// Swap in a fresh list, keeping the cursor in range
    pub fn set_items(&mut self, items: Vec<PresetItem>) {
        let current = self.table_state.selected().unwrap_or(0);
        self.items = items;
        self.table_state.select(if self.items.is_empty() {
            None
        } else {
            Some(current.min(self.items.len() - 1))
        });
    }

    /// Action requested by the last key, if any
    pub fn take_action(&mut self) -> Option<PickerAction> {
        self.action.take()
    }

    fn selected_item(&self) -> Option<&PresetItem> {
        self.table_state.selected().and_then(|i| self.items.get(i))
    }

    /// Returns true when the picker should close
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(confirm) = &mut self.confirm {
            if confirm.handle_key(key) {
                if confirm.confirmed() {
                    self.action = self.selected_item().map(|item| PickerAction::Delete(item.id.clone()));
                }
                self.confirm = None;
            }
            return false;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Enter => {
                if let Some(item) = self.selected_item() {
                    self.action = Some(PickerAction::Apply(item.id.clone()));
                    return true;
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(item) = self.selected_item() {
                    let message = format!("Delete saved filter \"{}\"?", item.name);
                    self.confirm = Some(ConfirmDialog::new("Delete Preset", &message));
                }
            }
            _ => {
                if let Some(delta) = navigation_delta(&key) {
                    if !self.items.is_empty() {
                        let current = self.table_state.selected().unwrap_or(0);
                        self.table_state.select(Some(step_index(current, delta, self.items.len())));
                    }
                }
            }
        }
        false
    }

    pub fn render(&mut self, frame: &mut Frame, theme: &Theme) {
        let height = (self.items.len() as u16).clamp(3, 15) + 5;
        let dialog_area = DialogLayout::centered(frame.area(), 90, height).dialog;

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" Saved Filters ({}) ", self.items.len()))
            .borders(Borders::ALL)
            .border_style(theme.border_focused());
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(2), Constraint::Length(1)])
            .split(inner);

        if self.items.is_empty() {
            let empty = Paragraph::new(" No saved filters. Press s on a filtered table to save one.")
                .style(theme.dim());
            frame.render_widget(empty, chunks[0]);
        } else {
            let header = Row::new(["Name", "Conditions", "Created"].map(|h| Cell::from(h).style(theme.header())));
            let rows: Vec<Row> = self
                .items
                .iter()
                .map(|item| {
                    Row::new(vec![
                        Cell::from(truncate(&item.name, 20)),
                        Cell::from(truncate(&item.summary, 48)),
                        Cell::from(item.create_time.clone()).style(theme.dim()),
                    ])
                })
                .collect();

            let table = Table::new(
                rows,
                [Constraint::Length(22), Constraint::Min(20), Constraint::Length(19)],
            )
            .header(header)
            .row_highlight_style(theme.selected())
            .highlight_symbol("▶ ");

            frame.render_stateful_widget(table, chunks[0], &mut self.table_state);
        }

        let hint = Line::from(vec![
            Span::styled(" Enter", theme.accent()),
            Span::styled(" apply  ", theme.dim()),
            Span::styled("d/Del", theme.accent()),
            Span::styled(" delete  ", theme.dim()),
            Span::styled("Esc", theme.accent()),
            Span::styled(" close", theme.dim()),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[1]);

        if let Some(confirm) = &self.confirm {
            confirm.render(frame, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn items() -> Vec<PresetItem> {
        ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, name)| PresetItem {
                id: (i + 100).to_string(),
                name: name.to_string(),
                summary: String::new(),
                create_time: "2026-01-01 00:00:00".to_string(),
            })
            .collect()
    }

    fn press(picker: &mut PresetPickerDialog, code: KeyCode) -> bool {
        picker.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_applies_highlighted_preset() {
        let mut picker = PresetPickerDialog::new(items());
        press(&mut picker, KeyCode::Down);
        assert!(press(&mut picker, KeyCode::Enter));
        assert_eq!(picker.take_action(), Some(PickerAction::Apply("101".into())));
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut picker = PresetPickerDialog::new(items());
        assert!(!press(&mut picker, KeyCode::Char('d')));
        assert!(!press(&mut picker, KeyCode::Char('n')));
        assert_eq!(picker.take_action(), None);

        press(&mut picker, KeyCode::Char('d'));
        assert!(!press(&mut picker, KeyCode::Char('y')));
        assert_eq!(picker.take_action(), Some(PickerAction::Delete("100".into())));
    }

    #[test]
    fn shrinking_list_keeps_cursor_in_range() {
        let mut picker = PresetPickerDialog::new(items());
        press(&mut picker, KeyCode::End);
        picker.set_items(items()[..1].to_vec());
        assert_eq!(picker.selected_item().map(|i| i.id.as_str()), Some("100"));
    }

    #[test]
    fn empty_list_applies_nothing() {
        let mut picker = PresetPickerDialog::new(Vec::new());
        assert!(!press(&mut picker, KeyCode::Enter));
        assert!(press(&mut picker, KeyCode::Esc));
        assert_eq!(picker.take_action(), None);
    }
}
