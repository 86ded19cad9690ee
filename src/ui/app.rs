//! Main TUI application

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame, Terminal,
};
use tokio::sync::{broadcast, mpsc};

use crate::app::events::{is_quit, tab_delta, tab_number, AppEvent, EventHandler};
use crate::app::state::{AppMessage, AppState, UiUpdateSignal};
use crate::config::{KeyBindings, Settings};
use crate::models::{AttackLog, ExposureLog, ExternalLog, MappingAsset};
use crate::ui::layout::{AppLayout, DialogLayout};
use crate::ui::tabs::{FavoritesTab, LogPage, LogTab};
use crate::ui::theme::Theme;
use crate::ui::widgets::statusbar::{build_status_line, StatusItem};

/// Tab identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    AttackLogs = 0,
    ExternalLogs = 1,
    ExposureLogs = 2,
    AntiMapping = 3,
    Favorites = 4,
}

impl TabId {
    pub fn title(&self) -> &'static str {
        match self {
            Self::AttackLogs => AttackLog::TITLE,
            Self::ExternalLogs => ExternalLog::TITLE,
            Self::ExposureLogs => ExposureLog::TITLE,
            Self::AntiMapping => MappingAsset::TITLE,
            Self::Favorites => "Favorites",
        }
    }

    pub fn all() -> &'static [TabId] {
        &[
            Self::AttackLogs,
            Self::ExternalLogs,
            Self::ExposureLogs,
            Self::AntiMapping,
            Self::Favorites,
        ]
    }
}

/// Main TUI application
pub struct TuiApp {
    state: Arc<AppState>,
    state_tx: mpsc::Sender<AppMessage>,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_handler: EventHandler,
    ui_update_rx: broadcast::Receiver<UiUpdateSignal>,

    // UI state
    current_tab: usize,
    theme: Theme,
    keys: KeyBindings,
    show_help: bool,
    last_refresh: DateTime<Local>,
    refresh_interval_secs: u64,

    // Tabs
    attack_tab: LogTab<AttackLog>,
    external_tab: LogTab<ExternalLog>,
    exposure_tab: LogTab<ExposureLog>,
    mapping_tab: LogTab<MappingAsset>,
    favorites_tab: FavoritesTab,
}

impl TuiApp {
    pub fn new(state: Arc<AppState>, state_tx: mpsc::Sender<AppMessage>, settings: &Settings) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let ui_update_rx = state.ui_update_tx.subscribe();
        let keys = KeyBindings::default();
        let page_size = settings.default_page_size;
        let store = state.store.clone();

        Ok(Self {
            state,
            state_tx,
            terminal,
            event_handler: EventHandler::new(Duration::from_millis(100)),
            ui_update_rx,

            current_tab: 0,
            theme: Theme::from_name(&settings.theme),
            keys: keys.clone(),
            show_help: false,
            last_refresh: Local::now(),
            refresh_interval_secs: settings.refresh_interval_secs,

            attack_tab: LogTab::new(store.clone(), page_size, keys.clone()),
            external_tab: LogTab::new(store.clone(), page_size, keys.clone()),
            exposure_tab: LogTab::new(store.clone(), page_size, keys.clone()),
            mapping_tab: LogTab::new(store, page_size, keys.clone()),
            favorites_tab: FavoritesTab::new(keys),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Check for UI update signals
            while let Ok(signal) = self.ui_update_rx.try_recv() {
                match signal {
                    UiUpdateSignal::RecordsUpdated(page) => {
                        tracing::debug!(page = page.feature(), "Records updated");
                        self.last_refresh = Local::now();
                    }
                    UiUpdateSignal::FavoritesUpdated => self.favorites_tab.mark_stale(),
                }
            }

            // Update tab caches before drawing
            self.update_tab_caches().await;

            self.draw()?;

            if let Some(event) = self.event_handler.next() {
                match event {
                    AppEvent::Key(key) => {
                        if self.show_help {
                            self.show_help = false;
                            continue;
                        }

                        // Text entry and dialogs get keys before global shortcuts
                        if !self.current_captures_input() {
                            if self.keys.quit.is(&key) || is_quit(&key) {
                                break;
                            }

                            if self.keys.help.is(&key) {
                                self.show_help = true;
                                continue;
                            }

                            if let Some(tab) = tab_number(&key, TabId::all().len()) {
                                self.current_tab = tab;
                                continue;
                            }

                            if let Some(delta) = tab_delta(&key) {
                                let len = TabId::all().len() as i32;
                                self.current_tab = ((self.current_tab as i32 + delta).rem_euclid(len)) as usize;
                                continue;
                            }
                        }

                        self.dispatch_key(key).await;
                    }
                    AppEvent::Resize(_, _) => {}
                    AppEvent::Tick => {}
                }
            }
        }

        Ok(())
    }

    fn current_captures_input(&self) -> bool {
        match TabId::all()[self.current_tab] {
            TabId::AttackLogs => self.attack_tab.captures_input(),
            TabId::ExternalLogs => self.external_tab.captures_input(),
            TabId::ExposureLogs => self.exposure_tab.captures_input(),
            TabId::AntiMapping => self.mapping_tab.captures_input(),
            TabId::Favorites => false,
        }
    }

    async fn dispatch_key(&mut self, key: KeyEvent) {
        let state = self.state.as_ref();
        let tx = &self.state_tx;

        match TabId::all()[self.current_tab] {
            TabId::AttackLogs => self.attack_tab.handle_key(key, state, tx).await,
            TabId::ExternalLogs => self.external_tab.handle_key(key, state, tx).await,
            TabId::ExposureLogs => self.exposure_tab.handle_key(key, state, tx).await,
            TabId::AntiMapping => self.mapping_tab.handle_key(key, state, tx).await,
            TabId::Favorites => self.favorites_tab.handle_key(key, state, tx).await,
        }
    }

    async fn update_tab_caches(&mut self) {
        let state = self.state.as_ref();

        match TabId::all()[self.current_tab] {
            TabId::AttackLogs => self.attack_tab.update_cache(state).await,
            TabId::ExternalLogs => self.external_tab.update_cache(state).await,
            TabId::ExposureLogs => self.exposure_tab.update_cache(state).await,
            TabId::AntiMapping => self.mapping_tab.update_cache(state).await,
            TabId::Favorites => self.favorites_tab.update_cache(state).await,
        }
    }

    fn draw(&mut self) -> Result<()> {
        let theme = &self.theme;
        let current_tab = self.current_tab;
        let show_help = self.show_help;

        let matched = match TabId::all()[current_tab] {
            TabId::AttackLogs => Some(self.attack_tab.matched_count()),
            TabId::ExternalLogs => Some(self.external_tab.matched_count()),
            TabId::ExposureLogs => Some(self.exposure_tab.matched_count()),
            TabId::AntiMapping => Some(self.mapping_tab.matched_count()),
            TabId::Favorites => None,
        };

        let mut items = vec![StatusItem::new("", "● Mock data").with_style(theme.success())];
        if let Some(matched) = matched {
            items.push(StatusItem::new("Matches", matched.to_string()));
        }
        items.push(StatusItem::new("Favorites", self.favorites_tab.len().to_string()).with_style(theme.favorite()));
        items.push(StatusItem::new("Refreshed", self.last_refresh.format("%H:%M:%S").to_string()));
        items.push(StatusItem::new("Every", format!("{}s", self.refresh_interval_secs)));
        items.push(StatusItem::new("", "?=help q=quit").with_style(theme.dim()));
        let status_line = build_status_line(items, "│");

        let attack_tab = &mut self.attack_tab;
        let external_tab = &mut self.external_tab;
        let exposure_tab = &mut self.exposure_tab;
        let mapping_tab = &mut self.mapping_tab;
        let favorites_tab = &mut self.favorites_tab;

        self.terminal.draw(|frame| {
            let layout = AppLayout::new(frame.area());

            // Tab bar
            let tab_titles: Vec<Line> = TabId::all()
                .iter()
                .enumerate()
                .map(|(i, tab)| {
                    let style = if i == current_tab {
                        theme.tab_active()
                    } else {
                        theme.tab_inactive()
                    };
                    Line::from(Span::styled(format!(" {} {} ", i + 1, tab.title()), style))
                })
                .collect();

            let tabs = Tabs::new(tab_titles)
                .select(current_tab)
                .highlight_style(theme.tab_active())
                .divider("|");

            frame.render_widget(tabs, layout.tabs);

            // Content
            let content_block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(format!(" {} ", TabId::all()[current_tab].title()));

            let inner = content_block.inner(layout.content);
            frame.render_widget(content_block, layout.content);

            match TabId::all()[current_tab] {
                TabId::AttackLogs => attack_tab.render(frame, inner, theme),
                TabId::ExternalLogs => external_tab.render(frame, inner, theme),
                TabId::ExposureLogs => exposure_tab.render(frame, inner, theme),
                TabId::AntiMapping => mapping_tab.render(frame, inner, theme),
                TabId::Favorites => favorites_tab.render(frame, inner, theme),
            }

            frame.render_widget(Paragraph::new(status_line), layout.status);

            if show_help {
                render_help(frame, theme);
            }
        })?;

        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let help_area = DialogLayout::centered(area, 62, 30).dialog;

    let help_text = [
        "",
        "  ThreatWatch - Keyboard Shortcuts",
        "  ────────────────────────────────",
        "",
        "  Navigation:",
        "    1-5, Tab      Switch tabs",
        "    ↑/↓, j/k      Move within the page",
        "    [ / ]         Previous / next page",
        "    z             Cycle page size (10/20/50/100)",
        "",
        "  Filtering:",
        "    /             Quick search on the IP column",
        "    f             Filter form",
        "    r             Reset filters",
        "    s             Save current filter",
        "    p             Saved filters (Enter apply, d delete)",
        "",
        "  Rows:",
        "    Enter         Details",
        "    Space         Mark row",
        "    *             Toggle favorite (marked rows or current)",
        "    F5            Regenerate this page",
        "",
        "  Press any key to close",
    ];

    let help_block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.normal());

    let help_content = Paragraph::new(help_text.join("\n"))
        .block(help_block)
        .style(theme.normal());

    frame.render_widget(Clear, help_area);
    frame.render_widget(help_content, help_area);
}
