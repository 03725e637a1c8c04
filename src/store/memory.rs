use std::sync::Mutex;

use super::{ProgressStore, StoreError};
use crate::progress::ProgressState;

/// In-process store, mainly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<ProgressState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `state`
    pub fn with_state(state: ProgressState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
        }
    }

    /// Last saved state, if any
    pub fn snapshot(&self) -> Option<ProgressState> {
        self.lock().ok().and_then(|s| s.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<ProgressState>>, StoreError> {
        self.state
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<ProgressState, StoreError> {
        Ok(self.lock()?.clone().unwrap_or_default())
    }

    fn save(&self, state: &ProgressState) -> Result<(), StoreError> {
        *self.lock()? = Some(state.clone());
        Ok(())
    }
}
