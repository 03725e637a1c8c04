//! CLI command implementations

pub mod catalog;
pub mod complete;
pub mod init;
pub mod reset;
pub mod status;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use healthquest::ProgressEngine;
use healthquest::clock::{Clock, SystemClock};
use healthquest::config::{Config, StoreBackend};
use healthquest::store::{JsonFileStore, ProgressStore, SqliteStore};

/// Open the configured progress store
pub fn open_store(config: &Config) -> Result<Box<dyn ProgressStore>> {
    let store = &config.settings.store;
    let path = store.resolved_path();

    let store: Box<dyn ProgressStore> = match store.backend {
        StoreBackend::Sqlite => Box::new(
            SqliteStore::open(&path)
                .with_context(|| format!("Failed to open progress db: {}", path.display()))?,
        ),
        StoreBackend::Json => Box::new(JsonFileStore::new(path)),
    };
    Ok(store)
}

/// Open the store and load the engine from it
pub fn open_engine(config: &Config) -> Result<ProgressEngine<Box<dyn ProgressStore>>> {
    let store = open_store(config)?;
    ProgressEngine::new(store).context("Failed to load progress")
}

/// `date` if given, otherwise today in the configured timezone
pub fn resolve_today(config: &Config, date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| SystemClock::new(config.settings.clock.timezone).today())
}
