//! Generic log table tab: quick search, filter form, presets, favorites and paging

use std::collections::HashSet;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use tokio::sync::mpsc;

use super::{FavoriteTarget, LogPage};
use crate::app::events::{edit_key, navigation_delta, step_index};
use crate::app::state::{AppMessage, AppState};
use crate::config::KeyBindings;
use crate::engine::{
    Criterion, FilterCriteria, ListView, PageSize, PresetError, PresetStore, ToggleOutcome,
};
use crate::models::RecordField;
use crate::store::KvStore;
use crate::ui::dialogs::filter_form::FilterFormDialog;
use crate::ui::dialogs::preset_picker::{PickerAction, PresetItem, PresetPickerDialog};
use crate::ui::dialogs::record_details::RecordDetailsDialog;
use crate::ui::dialogs::text_prompt::TextPromptDialog;
use crate::ui::layout::ListLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::searchbar::SearchBar;
use crate::ui::widgets::statusbar::{build_status_line, StatusItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    tone: Tone,
}

pub struct LogTab<P: LogPage> {
    view: ListView<P>,
    /// Revision of the shared collection last copied into `view`
    revision: u64,
    presets: PresetStore<P::Field>,
    favorites: HashSet<String>,
    keys: KeyBindings,

    table_state: TableState,
    search_bar: SearchBar,
    filter_form: Option<FilterFormDialog<P::Field>>,
    details: Option<RecordDetailsDialog>,
    name_prompt: Option<TextPromptDialog>,
    preset_picker: Option<PresetPickerDialog>,
    status: Option<StatusMessage>,
}

impl<P: LogPage> LogTab<P> {
    pub fn new(store: Arc<dyn KvStore>, page_size: PageSize, keys: KeyBindings) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            view: ListView::new(page_size),
            revision: 0,
            presets: PresetStore::load(store, P::KIND.feature()),
            favorites: HashSet::new(),
            keys,
            table_state,
            search_bar: SearchBar::new(P::search_field().label()),
            filter_form: None,
            details: None,
            name_prompt: None,
            preset_picker: None,
            status: None,
        }
    }

    /// Whether keys should go to this tab before global shortcuts
    pub fn captures_input(&self) -> bool {
        self.search_bar.active
            || self.filter_form.is_some()
            || self.details.is_some()
            || self.name_prompt.is_some()
            || self.preset_picker.is_some()
    }

    /// Number of records matching the active criteria
    pub fn matched_count(&self) -> usize {
        self.view.matched_count()
    }

    /// Update cached data from state (call before render)
    pub async fn update_cache(&mut self, state: &AppState) {
        {
            let collection = P::collection(state).read().await;
            if collection.revision != self.revision {
                self.view.replace_records(collection.records.clone());
                self.revision = collection.revision;
                self.table_state.select(Some(0));
            }
        }

        if let Some(scope) = P::favorite_scope() {
            self.favorites = state.favorites_for(scope).lock().await.ips().clone();
        }
    }

    fn set_status(&mut self, tone: Tone, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            tone,
        });
    }

    fn highlighted(&self) -> Option<P> {
        let index = self.table_state.selected()?;
        self.view.page().rows.get(index).map(|record| (*record).clone())
    }

    fn apply_criteria(&mut self, criteria: FilterCriteria<P::Field>) {
        self.view.set_criteria(criteria);
        self.table_state.select(Some(0));
        let matched = self.view.matched_count();
        self.set_status(Tone::Info, format!("{} matching records", matched));
    }

    fn preset_items(&self) -> Vec<PresetItem> {
        self.presets.presets().iter().map(PresetItem::from_preset).collect()
    }

    fn save_preset(&mut self, name: &str) {
        match self.presets.save_preset(name, self.view.criteria()) {
            Ok(preset) => {
                self.set_status(Tone::Info, format!("Saved filter \"{}\"", preset.name));
            }
            Err(e @ (PresetError::EmptyCriteria | PresetError::EmptyName)) => {
                self.set_status(Tone::Warning, e.to_string());
            }
            Err(e) => {
                tracing::error!(feature = P::KIND.feature(), error = %e, "Failed to save filter preset");
                self.set_status(Tone::Error, format!("Could not save filter: {}", e));
            }
        }
    }

    fn run_picker_action(&mut self, action: PickerAction) {
        match action {
            PickerAction::Apply(id) => {
                let mut form = self.view.criteria().clone();
                if self.presets.apply_preset(&id, &mut form) {
                    self.apply_criteria(form);
                } else {
                    self.set_status(Tone::Warning, "That saved filter no longer exists");
                }
            }
            PickerAction::Delete(id) => match self.presets.delete_preset(&id) {
                Ok(true) => {
                    let items = self.preset_items();
                    if let Some(picker) = &mut self.preset_picker {
                        picker.set_items(items);
                    }
                    self.set_status(Tone::Info, "Saved filter deleted");
                }
                Ok(false) => self.set_status(Tone::Warning, "That saved filter no longer exists"),
                Err(e) => {
                    tracing::error!(feature = P::KIND.feature(), error = %e, "Failed to delete filter preset");
                    self.set_status(Tone::Error, format!("Could not delete filter: {}", e));
                }
            },
        }
    }

    /// Rows the `*` shortcut acts on: marked rows, else the highlighted one
    fn favorite_batch(&self) -> Vec<FavoriteTarget> {
        let mut seen = HashSet::new();
        let mut targets: Vec<FavoriteTarget> = self
            .view
            .records()
            .iter()
            .filter(|record| self.view.is_selected(record.key()))
            .filter_map(|record| record.favorite_targets().into_iter().next())
            .filter(|target| seen.insert(target.ip.clone()))
            .collect();

        if targets.is_empty() {
            if let Some(target) = self.highlighted().and_then(|r| r.favorite_targets().into_iter().next()) {
                targets.push(target);
            }
        }
        targets
    }

    async fn toggle_favorites(
        &mut self,
        targets: Vec<FavoriteTarget>,
        state: &AppState,
        state_tx: &mpsc::Sender<AppMessage>,
    ) {
        let Some(scope) = P::favorite_scope() else {
            self.set_status(Tone::Info, format!("{} has no favorites", P::TITLE));
            return;
        };
        if targets.is_empty() {
            return;
        }

        let mut store = state.favorites_for(scope).lock().await;
        let mut last = None;
        let mut failure = None;
        let mut done = 0;
        for target in &targets {
            match store.toggle(&target.ip, target.role) {
                Ok(outcome) => {
                    done += 1;
                    last = Some((target.ip.clone(), outcome));
                }
                Err(e) => {
                    tracing::error!(ip = %target.ip, error = %e, "Failed to toggle favorite");
                    failure = Some(e);
                    break;
                }
            }
        }
        self.favorites = store.ips().clone();
        drop(store);

        if done > 0 {
            let _ = state_tx.try_send(AppMessage::FavoritesChanged { scope });
        }

        if let Some(e) = failure {
            let text = if targets.len() > 1 {
                format!("Updated {} of {} favorites: {}", done, targets.len(), e)
            } else {
                format!("Could not update favorites: {}", e)
            };
            self.set_status(Tone::Error, text);
            return;
        }

        match last {
            Some((_, _)) if targets.len() > 1 => {
                self.set_status(Tone::Info, format!("Toggled {} favorites", targets.len()));
            }
            Some((ip, ToggleOutcome::Favorited)) => {
                self.set_status(Tone::Info, format!("Favorited {}", ip));
            }
            Some((ip, ToggleOutcome::Unfavorited)) => {
                self.set_status(Tone::Info, format!("Removed {} from favorites", ip));
            }
            None => {}
        }
    }

    pub async fn handle_key(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        state_tx: &mpsc::Sender<AppMessage>,
    ) {
        if let Some(dialog) = &mut self.filter_form {
            if dialog.handle_key(key) {
                let submitted = dialog.result.take();
                self.filter_form = None;
                if let Some(criteria) = submitted {
                    self.apply_criteria(criteria);
                }
            }
            return;
        }

        if let Some(prompt) = &mut self.name_prompt {
            if prompt.handle_key(key) {
                let name = prompt.result.take();
                self.name_prompt = None;
                if let Some(name) = name {
                    self.save_preset(&name);
                }
            }
            return;
        }

        if let Some(picker) = &mut self.preset_picker {
            let close = picker.handle_key(key);
            let action = picker.take_action();
            if close {
                self.preset_picker = None;
            }
            if let Some(action) = action {
                self.run_picker_action(action);
            }
            return;
        }

        if let Some(dialog) = &mut self.details {
            if dialog.handle_key(key) {
                let chosen = dialog.chosen.take();
                self.details = None;
                if let Some(target) = chosen {
                    self.toggle_favorites(vec![target], state, state_tx).await;
                }
            }
            return;
        }

        if self.search_bar.active {
            match key.code {
                KeyCode::Esc => self.search_bar.deactivate(),
                KeyCode::Enter => {
                    self.search_bar.deactivate();
                    let mut criteria = self.view.criteria().clone();
                    criteria.set(P::search_field(), Criterion::contains(self.search_bar.query().trim()));
                    self.apply_criteria(criteria);
                }
                _ => {
                    if let Some(edit) = edit_key(&key) {
                        self.search_bar.apply(edit);
                    }
                }
            }
            return;
        }

        if self.keys.search.is(&key) {
            let current = match self.view.criteria().get(P::search_field()) {
                Some(Criterion::Contains(s)) => s.clone(),
                _ => String::new(),
            };
            self.search_bar.activate(&current);
        } else if self.keys.filter_form.is(&key) {
            self.filter_form = Some(FilterFormDialog::new(
                &format!("Filter {}", P::TITLE),
                &P::form_fields(),
                self.view.criteria(),
            ));
        } else if self.keys.reset_filter.is(&key) {
            self.view.reset_criteria();
            self.search_bar.clear();
            self.table_state.select(Some(0));
            self.set_status(Tone::Info, "Filters cleared");
        } else if self.keys.next_page.is(&key) {
            self.view.next_page();
            self.table_state.select(Some(0));
        } else if self.keys.prev_page.is(&key) {
            self.view.prev_page();
            self.table_state.select(Some(0));
        } else if self.keys.cycle_page_size.is(&key) {
            let size = self.view.window().page_size.cycle();
            self.view.set_page_size(size);
            self.table_state.select(Some(0));
            self.set_status(Tone::Info, format!("{} rows per page", size.get()));
        } else if self.keys.select_row.is(&key) {
            if let Some(record) = self.highlighted() {
                self.view.toggle_selection(record.key());
            }
        } else if self.keys.favorite.is(&key) {
            let targets = self.favorite_batch();
            self.toggle_favorites(targets, state, state_tx).await;
        } else if self.keys.save_preset.is(&key) {
            if self.view.criteria().is_empty() {
                self.set_status(Tone::Warning, PresetError::EmptyCriteria.to_string());
            } else {
                self.name_prompt = Some(TextPromptDialog::new(
                    "Save Filter",
                    "Name for the current filter:",
                    "Name",
                ));
            }
        } else if self.keys.presets.is(&key) {
            self.preset_picker = Some(PresetPickerDialog::new(self.preset_items()));
        } else if self.keys.details.is(&key) {
            if let Some(record) = self.highlighted() {
                let targets = record
                    .favorite_targets()
                    .into_iter()
                    .map(|t| {
                        let favorited = self.favorites.contains(&t.ip);
                        (t, favorited)
                    })
                    .collect();
                self.details = Some(RecordDetailsDialog::new(P::TITLE, record.details(), targets));
            }
        } else if self.keys.refresh.is(&key) {
            let _ = state_tx.try_send(AppMessage::Regenerate { page: P::KIND });
            self.set_status(Tone::Info, "Refreshing...");
        } else if key.code == KeyCode::Esc {
            self.status = None;
        } else if let Some(delta) = navigation_delta(&key) {
            let len = self.view.page().rows.len();
            if len > 0 {
                let current = self.table_state.selected().unwrap_or(0);
                self.table_state.select(Some(step_index(current, delta, len)));
            }
        }
    }

    fn criteria_line(&self, theme: &Theme) -> Line<'static> {
        if self.view.criteria().is_empty() {
            return Line::from(Span::styled(" No filters", theme.dim()));
        }

        let mut spans = vec![Span::styled(" Filters: ", theme.accent())];
        for (i, (field, criterion)) in self.view.criteria().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(", ", theme.dim()));
            }
            spans.push(Span::raw(format!("{}={}", field.label(), criterion.summary())));
        }
        Line::from(spans)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let layout = ListLayout::new(area, self.search_bar.active);

        if self.search_bar.active {
            self.search_bar.render(frame, layout.search, theme.normal(), theme.border_focused());
        }

        frame.render_widget(Paragraph::new(self.criteria_line(theme)), layout.criteria);

        let columns = P::columns();
        let page = self.view.page();
        let total = page.total;

        let header = Row::new(
            std::iter::once(Cell::from(""))
                .chain(columns.iter().map(|c| Cell::from(c.title).style(theme.header()))),
        );

        let rows: Vec<Row> = if page.rows.is_empty() {
            vec![Row::new(vec![Cell::from(""), Cell::from("No matching records")]).style(theme.dim())]
        } else {
            page.rows
                .iter()
                .map(|record| {
                    let marked = self.view.is_selected(record.key());
                    let favorite = record
                        .favorite_targets()
                        .first()
                        .is_some_and(|t| self.favorites.contains(&t.ip));

                    let marker = Line::from(vec![
                        Span::styled(if marked { "●" } else { " " }, theme.marked()),
                        Span::styled(if favorite { "★" } else { " " }, theme.favorite()),
                    ]);

                    let row = Row::new(std::iter::once(Cell::from(marker)).chain(record.cells(theme)));
                    if marked {
                        row.style(theme.marked())
                    } else {
                        row
                    }
                })
                .collect()
        };
        drop(page);

        let widths: Vec<Constraint> = std::iter::once(Constraint::Length(2))
            .chain(columns.iter().map(|c| c.width))
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme.selected())
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, layout.table, &mut self.table_state);

        let window = self.view.window();
        let mut items = vec![
            StatusItem::new("Page", format!("{}/{}", window.current_page, self.view.page_count()))
                .with_style(theme.accent()),
            StatusItem::new("Total", total.to_string()),
            StatusItem::new("Size", window.page_size.get().to_string()),
        ];
        if !self.view.selection().is_empty() {
            items.push(StatusItem::new("Marked", self.view.selection().len().to_string()).with_style(theme.marked()));
        }
        if let Some(status) = &self.status {
            let style = match status.tone {
                Tone::Info => theme.success(),
                Tone::Warning => theme.warning(),
                Tone::Error => theme.error(),
            };
            items.push(StatusItem::new("", status.text.clone()).with_style(style));
        }
        frame.render_widget(Paragraph::new(build_status_line(items, "│")), layout.footer);

        if let Some(dialog) = &self.filter_form {
            dialog.render(frame, theme);
        }
        if let Some(dialog) = &self.details {
            dialog.render(frame, theme);
        }
        if let Some(prompt) = &self.name_prompt {
            prompt.render(frame, theme);
        }
        if let Some(picker) = &mut self.preset_picker {
            picker.render(frame, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::PageKind;
    use crate::config::settings::RecordCounts;
    use crate::engine::FavoriteScope;
    use crate::mock::MockGenerator;
    use crate::models::{AttackField, AttackLog, Record};
    use crate::store::{MemoryStore, StoreError};
    use crossterm::event::KeyModifiers;
    use std::sync::Mutex;
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::broadcast;

    struct Harness {
        state: Arc<AppState>,
        tx: mpsc::Sender<AppMessage>,
        rx: mpsc::Receiver<AppMessage>,
        tab: LogTab<AttackLog>,
    }

    /// Memory store whose `nth` write to `key` fails
    struct FailingStore {
        inner: MemoryStore,
        key: &'static str,
        nth: usize,
        writes: Mutex<usize>,
    }

    impl KvStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
            if key == self.key {
                let mut writes = self.writes.lock().map_err(|_| StoreError::Poisoned)?;
                *writes += 1;
                if *writes == self.nth {
                    return Err(StoreError::Io(std::io::Error::other("disk full")));
                }
            }
            self.inner.set(key, value)
        }
    }

    impl Harness {
        async fn new() -> Self {
            Self::with_store(Arc::new(MemoryStore::new())).await
        }

        async fn with_store(store: Arc<dyn KvStore>) -> Self {
            let (ui_tx, _) = broadcast::channel(16);
            let counts = RecordCounts {
                attack_logs: 35,
                external_logs: 5,
                exposure_logs: 5,
                mapping_assets: 5,
            };
            let state = Arc::new(AppState::new(
                store,
                MockGenerator::with_seed(17),
                counts,
                ui_tx,
            ));
            let (tx, rx) = mpsc::channel(8);
            let mut tab = LogTab::new(state.store.clone(), PageSize::Ten, KeyBindings::default());
            tab.update_cache(&state).await;
            Self { state, tx, rx, tab }
        }

        async fn press(&mut self, code: KeyCode) {
            self.tab
                .handle_key(KeyEvent::new(code, KeyModifiers::NONE), &self.state, &self.tx)
                .await;
        }

        async fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.press(KeyCode::Char(c)).await;
            }
        }

        fn status(&self) -> Option<(Tone, String)> {
            self.tab.status.as_ref().map(|s| (s.tone, s.text.clone()))
        }
    }

    #[tokio::test]
    async fn quick_search_filters_on_attacker_ip() {
        let mut h = Harness::new().await;
        let ip = h.tab.view.records()[0].attacker_ip.clone();

        h.press(KeyCode::Char('/')).await;
        assert!(h.tab.captures_input());
        h.type_text(&ip).await;
        h.press(KeyCode::Enter).await;

        assert!(!h.tab.captures_input());
        assert_eq!(
            h.tab.view.criteria().get(AttackField::AttackerIp),
            Some(&Criterion::contains(ip.clone()))
        );
        let page = h.tab.view.page();
        assert!(page.total >= 1);
        assert!(page.rows.iter().all(|r| r.attacker_ip.contains(&ip)));
    }

    #[tokio::test]
    async fn escape_leaves_search_without_applying() {
        let mut h = Harness::new().await;
        h.press(KeyCode::Char('/')).await;
        h.type_text("1.2.3").await;
        h.press(KeyCode::Esc).await;
        assert!(h.tab.view.criteria().is_empty());
    }

    #[tokio::test]
    async fn saving_requires_criteria_and_a_name() {
        let mut h = Harness::new().await;

        h.press(KeyCode::Char('s')).await;
        assert!(h.tab.name_prompt.is_none());
        assert_eq!(h.status().map(|s| s.0), Some(Tone::Warning));

        h.press(KeyCode::Char('/')).await;
        h.type_text("45").await;
        h.press(KeyCode::Enter).await;

        h.press(KeyCode::Char('s')).await;
        h.type_text("   ").await;
        h.press(KeyCode::Enter).await;
        assert_eq!(h.status(), Some((Tone::Warning, PresetError::EmptyName.to_string())));
        assert!(h.tab.presets.presets().is_empty());

        h.press(KeyCode::Char('s')).await;
        h.type_text("nightly").await;
        h.press(KeyCode::Enter).await;
        assert_eq!(h.tab.presets.presets().len(), 1);
        assert!(h.state.store.get("attackLogsSavedFilters").unwrap().is_some());
    }

    #[tokio::test]
    async fn preset_picker_restores_saved_criteria() {
        let mut h = Harness::new().await;
        h.press(KeyCode::Char('/')).await;
        h.type_text("45").await;
        h.press(KeyCode::Enter).await;
        let saved = h.tab.view.criteria().clone();

        h.press(KeyCode::Char('s')).await;
        h.type_text("forty-five").await;
        h.press(KeyCode::Enter).await;

        h.press(KeyCode::Char('r')).await;
        assert!(h.tab.view.criteria().is_empty());

        h.press(KeyCode::Char('p')).await;
        h.press(KeyCode::Enter).await;
        assert!(h.tab.preset_picker.is_none());
        assert_eq!(h.tab.view.criteria(), &saved);
    }

    #[tokio::test]
    async fn favorite_shortcut_toggles_attacker_ip() {
        let mut h = Harness::new().await;
        let ip = h.tab.highlighted().map(|r| r.attacker_ip).unwrap();

        h.press(KeyCode::Char('*')).await;
        assert!(h.state.favorites.lock().await.contains(&ip));
        assert!(h.tab.favorites.contains(&ip));
        assert!(matches!(
            h.rx.try_recv(),
            Ok(AppMessage::FavoritesChanged { scope: FavoriteScope::Inbound })
        ));

        h.press(KeyCode::Char('*')).await;
        assert!(!h.state.favorites.lock().await.contains(&ip));
    }

    #[tokio::test]
    async fn failed_batch_toggle_reports_partial_progress() {
        let store = Arc::new(FailingStore {
            inner: MemoryStore::new(),
            key: "favoriteIps",
            nth: 2,
            writes: Mutex::new(0),
        });
        let mut h = Harness::with_store(store).await;

        let mut ips = HashSet::new();
        let keys: Vec<String> = h
            .tab
            .view
            .records()
            .iter()
            .filter(|r| ips.insert(r.attacker_ip.clone()))
            .take(3)
            .map(|r| r.key().to_string())
            .collect();
        assert_eq!(keys.len(), 3);
        for key in &keys {
            h.tab.view.toggle_selection(key);
        }

        h.press(KeyCode::Char('*')).await;

        let (tone, text) = h.status().unwrap();
        assert_eq!(tone, Tone::Error);
        assert!(text.starts_with("Updated 1 of 3 favorites"), "{}", text);
        assert_eq!(h.state.favorites.lock().await.list().unwrap().len(), 1);
        assert_eq!(h.tab.favorites.len(), 1);
    }

    #[tokio::test]
    async fn paging_clears_marked_rows() {
        let mut h = Harness::new().await;
        h.press(KeyCode::Char(' ')).await;
        assert_eq!(h.tab.view.selection().len(), 1);

        h.press(KeyCode::Char(']')).await;
        assert_eq!(h.tab.view.window().current_page, 2);
        assert!(h.tab.view.selection().is_empty());

        for _ in 0..10 {
            h.press(KeyCode::Char(']')).await;
        }
        assert_eq!(h.tab.view.window().current_page, 4);
        assert_eq!(h.tab.view.page().rows.len(), 5);
    }

    #[tokio::test]
    async fn page_size_cycles_and_resets_page() {
        let mut h = Harness::new().await;
        h.press(KeyCode::Char(']')).await;
        h.press(KeyCode::Char('z')).await;
        assert_eq!(h.tab.view.window().page_size, PageSize::Twenty);
        assert_eq!(h.tab.view.window().current_page, 1);
    }

    #[tokio::test]
    async fn new_revision_replaces_records() {
        let mut h = Harness::new().await;
        h.press(KeyCode::Char(']')).await;
        h.state.regenerate(PageKind::AttackLogs).await;
        h.tab.update_cache(&h.state).await;

        assert_eq!(h.tab.revision, 2);
        assert_eq!(h.tab.view.window().current_page, 1);
    }

    #[tokio::test]
    async fn refresh_key_requests_regeneration() {
        let mut h = Harness::new().await;
        h.press(KeyCode::F(5)).await;
        assert!(matches!(
            h.rx.try_recv(),
            Ok(AppMessage::Regenerate { page: PageKind::AttackLogs })
        ));
    }

    #[tokio::test]
    async fn renders_without_panicking() {
        let mut h = Harness::new().await;
        h.press(KeyCode::Char('f')).await;

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                h.tab.render(frame, area, &theme);
            })
            .unwrap();
    }
}
