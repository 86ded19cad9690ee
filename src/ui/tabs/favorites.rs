//! Favorite IPs of both scopes

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};
use tokio::sync::mpsc;

use crate::app::events::{navigation_delta, step_index};
use crate::app::state::{AppMessage, AppState};
use crate::config::KeyBindings;
use crate::engine::{FavoriteIp, FavoriteScope};
use crate::ui::theme::Theme;

pub struct FavoritesTab {
    entries: Vec<(FavoriteScope, FavoriteIp)>,
    table_state: TableState,
    keys: KeyBindings,
    stale: bool,
}

impl FavoritesTab {
    pub fn new(keys: KeyBindings) -> Self {
        Self {
            entries: Vec::new(),
            table_state: TableState::default(),
            keys,
            stale: true,
        }
    }

    /// Reload from storage on the next cache update
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub async fn update_cache(&mut self, state: &AppState) {
        if !self.stale {
            return;
        }

        let mut entries = Vec::new();
        for scope in [FavoriteScope::Inbound, FavoriteScope::Outbound] {
            match state.favorites_for(scope).lock().await.list() {
                Ok(list) => entries.extend(list.into_iter().map(|f| (scope, f))),
                Err(e) => tracing::error!(key = scope.storage_key(), error = %e, "Failed to read favorites"),
            }
        }

        self.entries = entries;
        self.stale = false;

        let selected = self.table_state.selected().unwrap_or(0);
        self.table_state.select(if self.entries.is_empty() {
            None
        } else {
            Some(selected.min(self.entries.len() - 1))
        });
    }

    pub async fn handle_key(&mut self, key: KeyEvent, state: &AppState, state_tx: &mpsc::Sender<AppMessage>) {
        if self.keys.delete.is(&key) || self.keys.favorite.is(&key) {
            let Some((scope, favorite)) = self.table_state.selected().and_then(|i| self.entries.get(i)).cloned() else {
                return;
            };

            let result = state.favorites_for(scope).lock().await.remove(&favorite.ip);
            match result {
                Ok(true) => {
                    let _ = state_tx.try_send(AppMessage::FavoritesChanged { scope });
                }
                Ok(false) => tracing::debug!(ip = %favorite.ip, "Favorite already removed"),
                Err(e) => tracing::error!(ip = %favorite.ip, error = %e, "Failed to remove favorite"),
            }
            self.stale = true;
        } else if let Some(delta) = navigation_delta(&key) {
            if !self.entries.is_empty() {
                let current = self.table_state.selected().unwrap_or(0);
                self.table_state.select(Some(step_index(current, delta, self.entries.len())));
            }
        } else if key.code == KeyCode::Esc {
            self.table_state.select(None);
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let header = Row::new(["Scope", "IP", "Role"].map(|h| Cell::from(h).style(theme.header())));

        let rows: Vec<Row> = if self.entries.is_empty() {
            vec![Row::new(vec![
                Cell::from(""),
                Cell::from("No favorites yet. Press * on a log row to add one."),
            ])
            .style(theme.dim())]
        } else {
            self.entries
                .iter()
                .map(|(scope, favorite)| {
                    Row::new(vec![
                        Cell::from(scope.title()),
                        Cell::from(favorite.ip.clone()).style(theme.favorite()),
                        Cell::from(favorite.role.to_string()),
                    ])
                })
                .collect()
        };

        let title = format!(" Favorite IPs ({})  Del = remove ", self.entries.len());
        let table = Table::new(
            rows,
            [Constraint::Length(10), Constraint::Length(40), Constraint::Min(12)],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::NONE)
                .title(Span::styled(title, theme.accent())),
        )
        .row_highlight_style(theme.selected())
        .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::RecordCounts;
    use crate::engine::{FavoriteRole, FavoriteStore};
    use crate::mock::MockGenerator;
    use crate::store::MemoryStore;
    use crossterm::event::KeyModifiers;
    use std::sync::Arc;
    use tokio::sync::broadcast;

    fn state() -> AppState {
        let (ui_tx, _) = broadcast::channel(4);
        let counts = RecordCounts {
            attack_logs: 1,
            external_logs: 1,
            exposure_logs: 1,
            mapping_assets: 1,
        };
        AppState::new(Arc::new(MemoryStore::new()), MockGenerator::with_seed(3), counts, ui_tx)
    }

    #[tokio::test]
    async fn lists_both_scopes_and_removes_entries() {
        let state = state();
        state.favorites.lock().await.toggle("1.1.1.1", FavoriteRole::Attack).unwrap();
        state
            .outbound_favorites
            .lock()
            .await
            .toggle("8.8.8.8", FavoriteRole::Destination)
            .unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        let mut tab = FavoritesTab::new(KeyBindings::default());
        tab.update_cache(&state).await;
        assert_eq!(tab.len(), 2);
        assert_eq!(tab.entries[1].0, FavoriteScope::Outbound);

        tab.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &state, &tx).await;
        tab.handle_key(KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE), &state, &tx).await;
        tab.update_cache(&state).await;

        assert_eq!(tab.len(), 1);
        assert!(!state.outbound_favorites.lock().await.contains("8.8.8.8"));
        assert!(matches!(
            rx.try_recv(),
            Ok(AppMessage::FavoritesChanged { scope: FavoriteScope::Outbound })
        ));
    }

    #[tokio::test]
    async fn delete_of_an_entry_removed_elsewhere_stays_removed() {
        let state = state();
        state.favorites.lock().await.toggle("1.1.1.1", FavoriteRole::Attack).unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        let mut tab = FavoritesTab::new(KeyBindings::default());
        tab.update_cache(&state).await;
        assert_eq!(tab.len(), 1);

        // Another console sharing the database drops the entry first
        let mut other = FavoriteStore::load(state.store.clone(), FavoriteScope::Inbound);
        assert!(other.remove("1.1.1.1").unwrap());

        tab.handle_key(KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE), &state, &tx).await;
        tab.update_cache(&state).await;

        assert_eq!(tab.len(), 0);
        assert!(state.favorites.lock().await.list().unwrap().is_empty());
        assert!(rx.try_recv().is_err());
    }
}
