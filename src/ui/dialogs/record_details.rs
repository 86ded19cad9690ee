//! Record details dialog with favorite actions

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::tabs::FavoriteTarget;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DetailsFocus {
    Info,
    Actions,
}

#[derive(Debug, Clone, PartialEq)]
enum ActionItem {
    ToggleFavorite { target: FavoriteTarget, favorited: bool },
    Close,
}

impl ActionItem {
    fn label(&self) -> String {
        match self {
            Self::ToggleFavorite { target, favorited: false } => {
                format!("Favorite {} IP {}", target.role, target.ip)
            }
            Self::ToggleFavorite { target, favorited: true } => {
                format!("Unfavorite {} IP {}", target.role, target.ip)
            }
            Self::Close => "Close".to_string(),
        }
    }
}

pub struct RecordDetailsDialog {
    title: String,
    fields: Vec<(&'static str, String)>,
    actions: Vec<ActionItem>,
    focus: DetailsFocus,
    action_index: usize,
    scroll_offset: u16,
    /// Favorite toggle requested by the user
    pub chosen: Option<FavoriteTarget>,
}

impl RecordDetailsDialog {
    /// `targets` pairs each favoritable IP with whether it is already a favorite
    pub fn new(
        title: &str,
        fields: Vec<(&'static str, String)>,
        targets: Vec<(FavoriteTarget, bool)>,
    ) -> Self {
        let mut actions: Vec<ActionItem> = targets
            .into_iter()
            .map(|(target, favorited)| ActionItem::ToggleFavorite { target, favorited })
            .collect();
        actions.push(ActionItem::Close);

        Self {
            title: title.to_string(),
            fields,
            actions,
            focus: DetailsFocus::Info,
            action_index: 0,
            scroll_offset: 0,
            chosen: None,
        }
    }

    /// Returns true when the dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    DetailsFocus::Info => DetailsFocus::Actions,
                    DetailsFocus::Actions => DetailsFocus::Info,
                };
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.focus == DetailsFocus::Actions {
                    self.action_index = self.action_index.saturating_sub(1);
                } else {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.focus == DetailsFocus::Actions {
                    self.action_index = (self.action_index + 1).min(self.actions.len() - 1);
                } else if (self.scroll_offset as usize) + 1 < self.fields.len() {
                    self.scroll_offset += 1;
                }
            }
            KeyCode::Enter => {
                if self.focus == DetailsFocus::Actions {
                    if let ActionItem::ToggleFavorite { target, .. } = &self.actions[self.action_index] {
                        self.chosen = Some(target.clone());
                    }
                    return true;
                }
            }
            _ => {}
        }
        false
    }

    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        let area = frame.area();

        let dialog_width = (area.width as f32 * 0.8) as u16;
        let dialog_height = (area.height as f32 * 0.8) as u16;
        let x = area.x + (area.width - dialog_width) / 2;
        let y = area.y + (area.height - dialog_height) / 2;
        let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(theme.border_focused());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);

        self.render_info_panel(frame, chunks[0], theme);
        self.render_actions_panel(frame, chunks[1], theme);
    }

    fn render_info_panel(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let label_width = self.fields.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

        let lines: Vec<Line> = self
            .fields
            .iter()
            .skip(self.scroll_offset as usize)
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("  {:<width$}  ", label, width = label_width), theme.accent()),
                    Span::styled(value.clone(), theme.normal()),
                ])
            })
            .collect();

        let border_style = if self.focus == DetailsFocus::Info {
            theme.border_focused()
        } else {
            theme.border()
        };

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Details ")
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .style(theme.normal());

        frame.render_widget(paragraph, area);
    }

    fn render_actions_panel(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let style = if i == self.action_index && self.focus == DetailsFocus::Actions {
                    theme.selected()
                } else if matches!(action, ActionItem::ToggleFavorite { .. }) {
                    theme.favorite()
                } else {
                    theme.normal()
                };
                ListItem::new(action.label()).style(style)
            })
            .collect();

        let border_style = if self.focus == DetailsFocus::Actions {
            theme.border_focused()
        } else {
            theme.border()
        };

        let list = List::new(items).block(
            Block::default()
                .title(" Actions ")
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        frame.render_widget(list, area);

        if area.height > 8 {
            let hint_area = Rect::new(area.x + 1, area.y + area.height - 2, area.width.saturating_sub(2), 1);
            let hint = Paragraph::new("Tab=switch  Enter=select").style(theme.dim());
            frame.render_widget(hint, hint_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FavoriteRole;
    use crossterm::event::KeyModifiers;

    fn press(dialog: &mut RecordDetailsDialog, code: KeyCode) -> bool {
        dialog.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn dialog() -> RecordDetailsDialog {
        let targets = vec![
            (FavoriteTarget { role: FavoriteRole::Attack, ip: "45.1.1.1".into() }, false),
            (FavoriteTarget { role: FavoriteRole::Target, ip: "10.0.0.5".into() }, true),
        ];
        RecordDetailsDialog::new("Attack Log", vec![("Attacker", "45.1.1.1:4444".into())], targets)
    }

    #[test]
    fn choosing_an_action_reports_its_target() {
        let mut dialog = dialog();
        press(&mut dialog, KeyCode::Tab);
        press(&mut dialog, KeyCode::Down);
        assert!(press(&mut dialog, KeyCode::Enter));
        assert_eq!(dialog.chosen.map(|t| t.ip), Some("10.0.0.5".to_string()));
    }

    #[test]
    fn close_action_chooses_nothing() {
        let mut dialog = dialog();
        press(&mut dialog, KeyCode::Tab);
        for _ in 0..5 {
            press(&mut dialog, KeyCode::Down);
        }
        assert!(press(&mut dialog, KeyCode::Enter));
        assert!(dialog.chosen.is_none());
    }

    #[test]
    fn labels_reflect_favorite_state() {
        let dialog = dialog();
        assert_eq!(dialog.actions[0].label(), "Favorite attack IP 45.1.1.1");
        assert_eq!(dialog.actions[1].label(), "Unfavorite target IP 10.0.0.5");
    }
}
