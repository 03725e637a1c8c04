//! JSON file backend
//!
//! Keeps the whole progress state in one JSON document. Saves take an
//! exclusive lock on a sidecar `.lock` file and go through a temp file plus
//! rename, so a crash mid-write leaves the previous document intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{ProgressStore, StoreError};
use crate::atomic::write_locked;
use crate::progress::ProgressState;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<ProgressState, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No progress file at {}, using defaults", self.path.display());
                return Ok(ProgressState::default());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(ProgressState::default());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, state: &ProgressState) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(state)?;
        write_locked(&self.path, content.as_bytes())?;
        debug!("Saved progress to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    use crate::progress::{AchievementId, ChallengeId};

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("progress.json"));
        assert_eq!(store.load().unwrap(), ProgressState::default());
    }

    #[test]
    fn test_roundtrip_creates_parent_dir() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/progress.json"));

        let mut state = ProgressState {
            points: 560,
            level: 2,
            streak: 3,
            last_activity_date: NaiveDate::from_ymd_opt(2024, 6, 3),
            ..Default::default()
        };
        state.completed_today.insert(ChallengeId::SleepSchedule);
        state.unlocked_achievements.insert(AchievementId::HealthNovice);
        state.unlocked_achievements.insert(AchievementId::WellnessWarrior);

        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), state);
        assert!(!store.path().with_extension("json.tmp").exists());
        assert!(store.path().with_extension("json.lock").exists());
    }

    #[test]
    fn test_garbage_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }
}
