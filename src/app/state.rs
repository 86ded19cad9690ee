//! Application state management

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, Mutex, RwLock};

use crate::config::settings::RecordCounts;
use crate::engine::{FavoriteScope, FavoriteStore};
use crate::mock::MockGenerator;
use crate::models::{AttackLog, ExposureLog, ExternalLog, MappingAsset};
use crate::store::KvStore;

/// The log pages of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    AttackLogs,
    ExternalLogs,
    ExposureLogs,
    AntiMapping,
}

impl PageKind {
    /// Feature name used to scope persisted presets
    pub fn feature(&self) -> &'static str {
        match self {
            Self::AttackLogs => "attackLogs",
            Self::ExternalLogs => "externalLogs",
            Self::ExposureLogs => "exposureLogs",
            Self::AntiMapping => "antiMapping",
        }
    }

    /// Pages regenerated by the periodic refresh
    pub fn live() -> &'static [PageKind] {
        &[Self::AttackLogs, Self::ExternalLogs]
    }
}

/// Messages for state updates
#[derive(Debug)]
pub enum AppMessage {
    /// Periodic tick: regenerate every live page
    AutoRefresh,
    /// Explicit refresh of one page
    Regenerate { page: PageKind },
    /// A favorites list was rewritten
    FavoritesChanged { scope: FavoriteScope },
}

/// UI update signals
#[derive(Debug, Clone)]
pub enum UiUpdateSignal {
    RecordsUpdated(PageKind),
    FavoritesUpdated,
}

/// A record collection plus a revision bumped on every replacement
#[derive(Debug, Clone)]
pub struct Collection<R> {
    pub revision: u64,
    pub records: Vec<R>,
}

impl<R> Collection<R> {
    fn new(records: Vec<R>) -> Self {
        Self {
            revision: 1,
            records,
        }
    }

    fn replace(&mut self, records: Vec<R>) {
        self.records = records;
        self.revision += 1;
    }
}

/// Central application state
pub struct AppState {
    pub attack_logs: RwLock<Collection<AttackLog>>,
    pub external_logs: RwLock<Collection<ExternalLog>>,
    pub exposure_logs: RwLock<Collection<ExposureLog>>,
    pub mapping_assets: RwLock<Collection<MappingAsset>>,
    pub favorites: Mutex<FavoriteStore>,
    pub outbound_favorites: Mutex<FavoriteStore>,
    pub store: Arc<dyn KvStore>,
    pub ui_update_tx: broadcast::Sender<UiUpdateSignal>,

    generator: Mutex<MockGenerator>,
    record_counts: RecordCounts,
}

impl AppState {
    pub fn new(
        store: Arc<dyn KvStore>,
        mut generator: MockGenerator,
        record_counts: RecordCounts,
        ui_update_tx: broadcast::Sender<UiUpdateSignal>,
    ) -> Self {
        Self {
            attack_logs: RwLock::new(Collection::new(generator.attack_logs(record_counts.attack_logs))),
            external_logs: RwLock::new(Collection::new(generator.external_logs(record_counts.external_logs))),
            exposure_logs: RwLock::new(Collection::new(generator.exposure_logs(record_counts.exposure_logs))),
            mapping_assets: RwLock::new(Collection::new(generator.mapping_assets(record_counts.mapping_assets))),
            favorites: Mutex::new(FavoriteStore::load(store.clone(), FavoriteScope::Inbound)),
            outbound_favorites: Mutex::new(FavoriteStore::load(store.clone(), FavoriteScope::Outbound)),
            store,
            ui_update_tx,
            generator: Mutex::new(generator),
            record_counts,
        }
    }

    pub fn favorites_for(&self, scope: FavoriteScope) -> &Mutex<FavoriteStore> {
        match scope {
            FavoriteScope::Inbound => &self.favorites,
            FavoriteScope::Outbound => &self.outbound_favorites,
        }
    }

    /// Replace one page's collection with freshly generated records
    pub async fn regenerate(&self, page: PageKind) {
        let mut generator = self.generator.lock().await;
        let counts = &self.record_counts;

        match page {
            PageKind::AttackLogs => {
                let records = generator.attack_logs(counts.attack_logs);
                self.attack_logs.write().await.replace(records);
            }
            PageKind::ExternalLogs => {
                let records = generator.external_logs(counts.external_logs);
                self.external_logs.write().await.replace(records);
            }
            PageKind::ExposureLogs => {
                let records = generator.exposure_logs(counts.exposure_logs);
                self.exposure_logs.write().await.replace(records);
            }
            PageKind::AntiMapping => {
                let records = generator.mapping_assets(counts.mapping_assets);
                self.mapping_assets.write().await.replace(records);
            }
        }

        tracing::debug!(page = page.feature(), "Regenerated records");
    }
}

/// Run the state manager task
pub async fn run_state_manager(
    state: Arc<AppState>,
    mut rx: mpsc::Receiver<AppMessage>,
    ui_update_tx: broadcast::Sender<UiUpdateSignal>,
) {
    tracing::info!("State manager started");

    while let Some(msg) = rx.recv().await {
        match msg {
            AppMessage::AutoRefresh => {
                tracing::info!("Auto-refreshing live pages");
                for page in PageKind::live() {
                    state.regenerate(*page).await;
                    let _ = ui_update_tx.send(UiUpdateSignal::RecordsUpdated(*page));
                }
            }

            AppMessage::Regenerate { page } => {
                state.regenerate(page).await;
                let _ = ui_update_tx.send(UiUpdateSignal::RecordsUpdated(page));
            }

            AppMessage::FavoritesChanged { scope } => {
                tracing::debug!("Favorites changed: {}", scope.title());
                let _ = ui_update_tx.send(UiUpdateSignal::FavoritesUpdated);
            }
        }
    }

    tracing::info!("State manager stopped");
}

/// Ask for a refresh of the live pages every `period`, until the
/// receiving side goes away. The first tick fires one period after start.
pub async fn run_auto_refresh(tx: mpsc::Sender<AppMessage>, period: Duration) {
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);

    loop {
        ticker.tick().await;
        if tx.send(AppMessage::AutoRefresh).await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn counts() -> RecordCounts {
        RecordCounts {
            attack_logs: 15,
            external_logs: 10,
            exposure_logs: 5,
            mapping_assets: 4,
        }
    }

    fn state() -> (Arc<AppState>, broadcast::Receiver<UiUpdateSignal>, broadcast::Sender<UiUpdateSignal>) {
        let (ui_tx, ui_rx) = broadcast::channel(16);
        let state = AppState::new(
            Arc::new(MemoryStore::new()),
            MockGenerator::with_seed(9),
            counts(),
            ui_tx.clone(),
        );
        (Arc::new(state), ui_rx, ui_tx)
    }

    #[tokio::test]
    async fn collections_are_seeded() {
        let (state, _, _) = state();
        assert_eq!(state.attack_logs.read().await.records.len(), 15);
        assert_eq!(state.mapping_assets.read().await.records.len(), 4);
        assert_eq!(state.attack_logs.read().await.revision, 1);
    }

    #[tokio::test]
    async fn auto_refresh_regenerates_live_pages_only() {
        let (state, mut ui_rx, ui_tx) = state();
        let (tx, rx) = mpsc::channel(4);
        let manager = tokio::spawn(run_state_manager(state.clone(), rx, ui_tx));

        tx.send(AppMessage::AutoRefresh).await.unwrap();
        drop(tx);
        manager.await.unwrap();

        assert_eq!(state.attack_logs.read().await.revision, 2);
        assert_eq!(state.external_logs.read().await.revision, 2);
        assert_eq!(state.exposure_logs.read().await.revision, 1);

        let mut updated = Vec::new();
        while let Ok(UiUpdateSignal::RecordsUpdated(page)) = ui_rx.try_recv() {
            updated.push(page);
        }
        assert_eq!(updated, vec![PageKind::AttackLogs, PageKind::ExternalLogs]);
    }

    #[tokio::test]
    async fn refresh_task_sends_ticks() {
        let (tx, mut rx) = mpsc::channel(1);
        let handle = tokio::spawn(run_auto_refresh(tx, Duration::from_millis(10)));

        let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
        assert!(matches!(msg, Some(AppMessage::AutoRefresh)));

        drop(rx);
        tokio::time::timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn favorites_are_scoped() {
        let (state, _, _) = state();
        state
            .favorites_for(FavoriteScope::Outbound)
            .lock()
            .await
            .toggle("7.7.7.7", crate::engine::FavoriteRole::Destination)
            .unwrap();

        assert!(state.outbound_favorites.lock().await.contains("7.7.7.7"));
        assert!(!state.favorites.lock().await.contains("7.7.7.7"));
    }
}
