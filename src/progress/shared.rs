//! Thread-safe handle around a [`ProgressEngine`]

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

use super::engine::{Completion, ProgressEngine};
use super::error::ProgressError;
use super::state::ProgressState;
use crate::store::ProgressStore;

/// Cloneable handle that serializes all access to one engine.
///
/// The engine only replaces its state after a successful save, so a lock
/// poisoned by a panicking holder still guards a consistent state and is
/// recovered rather than propagated.
pub struct SharedEngine<S> {
    inner: Arc<Mutex<ProgressEngine<S>>>,
}

impl<S> Clone for SharedEngine<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ProgressStore> SharedEngine<S> {
    pub fn new(engine: ProgressEngine<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProgressEngine<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn complete_challenge(
        &self,
        challenge_id: &str,
        today: NaiveDate,
    ) -> Result<Completion, ProgressError> {
        self.lock().complete_challenge(challenge_id, today)
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ProgressState {
        self.lock().state().clone()
    }
}
