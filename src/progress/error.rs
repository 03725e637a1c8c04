//! Error types for progress operations

use chrono::NaiveDate;

use crate::store::StoreError;

/// Errors returned by [`ProgressEngine`](super::ProgressEngine)
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("Unknown challenge: {id}")]
    InvalidChallenge { id: String },

    #[error("Date {today} is earlier than the last activity on {last_activity}")]
    InvalidDate {
        today: NaiveDate,
        last_activity: NaiveDate,
    },

    #[error("Failed to persist progress: {0}")]
    Persistence(#[from] StoreError),
}
