use anyhow::Result;
use clap::Parser;
use std::fs::{File, OpenOptions};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod engine;
mod mock;
mod models;
mod store;
mod ui;
mod utils;

use app::state::AppState;
use config::settings::Settings;
use mock::MockGenerator;
use store::{KvStore, MemoryStore, SqliteStore};
use ui::app::TuiApp;

#[derive(Parser, Debug)]
#[command(name = "threatwatch-tui")]
#[command(about = "Terminal console for browsing network threat logs")]
#[command(version)]
struct Args {
    /// Database path (use :memory: for in-memory)
    #[arg(short, long)]
    database: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Seed for reproducible mock data
    #[arg(long)]
    seed: Option<u64>,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

/// Log to a file; the terminal belongs to the TUI
fn init_logging(settings: &Settings) -> Result<()> {
    let path = Settings::log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file: File = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn open_store(path: &str) -> Arc<dyn KvStore> {
    match SqliteStore::open(path) {
        Ok(store) => {
            match store.key_count() {
                Ok(count) => tracing::info!(path, keys = count, "Opened preference store"),
                Err(e) => tracing::warn!(path, error = %e, "Could not count stored keys"),
            }
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!(path, error = %e, "Falling back to in-memory preferences");
            Arc::new(MemoryStore::new())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let settings = Settings::default();
        settings.save(args.config.as_deref())?;
        println!(
            "Wrote default configuration to {}",
            args.config
                .clone()
                .unwrap_or_else(|| Settings::default_config_path().display().to_string())
        );
        return Ok(());
    }

    // Load settings
    let settings = Settings::load(args.config.as_deref())?;
    init_logging(&settings)?;

    // Suppress panic output in TUI mode; the log file keeps the message
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));

    let database_path = args.database.clone().unwrap_or_else(|| settings.database_path.clone());
    if database_path != ":memory:" {
        if let Some(parent) = std::path::Path::new(&database_path).parent() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let store = open_store(&database_path);

    let generator = match args.seed.or(settings.mock_seed) {
        Some(seed) => MockGenerator::with_seed(seed).anchored_at(chrono::Utc::now()),
        None => MockGenerator::from_entropy(),
    };

    // Create channels for communication
    let (state_tx, state_rx) = mpsc::channel(100);
    let (ui_update_tx, _) = broadcast::channel(100);

    // Create shared application state
    let state = Arc::new(AppState::new(
        store,
        generator,
        settings.record_counts.clone(),
        ui_update_tx.clone(),
    ));

    // Start state manager
    let state_clone = state.clone();
    let state_manager_handle = tokio::spawn(async move {
        app::state::run_state_manager(state_clone, state_rx, ui_update_tx).await;
    });

    let refresh_handle = tokio::spawn(app::state::run_auto_refresh(
        state_tx.clone(),
        Duration::from_secs(settings.refresh_interval_secs.max(1)),
    ));

    tracing::info!(
        refresh_secs = settings.refresh_interval_secs,
        "Starting threat console"
    );

    // Run TUI (blocks until user quits)
    let mut tui = TuiApp::new(state.clone(), state_tx, &settings)?;
    let result = tui.run().await;
    drop(tui);

    // Cleanup
    refresh_handle.abort();
    state_manager_handle.abort();

    result
}
