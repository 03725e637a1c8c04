//! Shared test utilities for progress engine tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDate;

use healthquest::ProgressEngine;
use healthquest::ProgressState;
use healthquest::store::{MemoryStore, ProgressStore, StoreError};

/// Parse a YYYY-MM-DD date
pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("Invalid test date")
}

/// Engine over an empty in-memory store
pub fn fresh_engine() -> ProgressEngine<MemoryStore> {
    ProgressEngine::new(MemoryStore::new()).expect("Failed to create engine")
}

/// Engine over an in-memory store seeded with `state`
pub fn engine_with(state: ProgressState) -> ProgressEngine<MemoryStore> {
    ProgressEngine::new(MemoryStore::with_state(state)).expect("Failed to create engine")
}

/// Memory store whose saves can be switched to fail
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub failing: AtomicBool,
}

impl FlakyStore {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl ProgressStore for FlakyStore {
    fn load(&self) -> Result<ProgressState, StoreError> {
        self.inner.load()
    }

    fn save(&self, state: &ProgressState) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("disk detached".to_string()));
        }
        self.inner.save(state)
    }
}
