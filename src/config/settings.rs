//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Config;
use crate::clock::Timezone;

/// General settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where progress is stored
    #[serde(default)]
    pub store: StoreSettings,

    /// How "today" is determined
    #[serde(default)]
    pub clock: ClockSettings,
}

/// Storage backend for progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// SQLite database (default)
    #[default]
    Sqlite,
    /// Single JSON document
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Explicit file path. When unset, `progress.db` / `progress.json`
    /// inside the global config directory is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StoreSettings {
    /// Resolved path of the progress file
    pub fn resolved_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        let file_name = match self.backend {
            StoreBackend::Sqlite => "progress.db",
            StoreBackend::Json => "progress.json",
        };
        Config::global_config_dir().join(file_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockSettings {
    /// Timezone whose midnight starts a new day: "local" (default) or "utc"
    #[serde(default)]
    pub timezone: Timezone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_follows_backend() {
        let sqlite = StoreSettings::default();
        assert!(sqlite.resolved_path().ends_with("progress.db"));

        let json = StoreSettings {
            backend: StoreBackend::Json,
            path: None,
        };
        assert!(json.resolved_path().ends_with("progress.json"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let settings = StoreSettings {
            backend: StoreBackend::Sqlite,
            path: Some(PathBuf::from("/data/quest.db")),
        };
        assert_eq!(settings.resolved_path(), PathBuf::from("/data/quest.db"));
    }
}
