//! Progress persistence
//!
//! The engine only sees the [`ProgressStore`] trait. Three backends ship with
//! the crate:
//!
//! - [`MemoryStore`]: in-process, nothing survives a restart
//! - [`JsonFileStore`]: one JSON document, written atomically under a lock
//! - [`SqliteStore`]: `~/.healthquest/progress.db`, one transaction per save

mod error;
mod json;
mod memory;
mod sqlite;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::progress::ProgressState;

/// Durable storage for a single [`ProgressState`]
pub trait ProgressStore {
    /// Load the stored state, or defaults if nothing has been saved yet
    fn load(&self) -> Result<ProgressState, StoreError>;

    /// Replace the stored state with `state` in one logical write
    fn save(&self, state: &ProgressState) -> Result<(), StoreError>;
}

impl<S: ProgressStore + ?Sized> ProgressStore for Box<S> {
    fn load(&self) -> Result<ProgressState, StoreError> {
        (**self).load()
    }

    fn save(&self, state: &ProgressState) -> Result<(), StoreError> {
        (**self).save(state)
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for std::sync::Arc<S> {
    fn load(&self) -> Result<ProgressState, StoreError> {
        (**self).load()
    }

    fn save(&self, state: &ProgressState) -> Result<(), StoreError> {
        (**self).save(state)
    }
}
