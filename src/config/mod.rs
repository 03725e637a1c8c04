//! Configuration loading and management

mod io;
mod settings;

pub use io::write_config_file;
pub use settings::{ClockSettings, Settings, StoreBackend, StoreSettings};

use serde::{Deserialize, Serialize};

/// Main configuration structure (`~/.healthquest/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Timezone;

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.settings.store.backend, StoreBackend::Sqlite);
        assert_eq!(config.settings.clock.timezone, Timezone::Local);
    }

    #[test]
    fn test_partial_settings() {
        let config: Config = toml::from_str(
            r#"
            [settings.store]
            backend = "json"

            [settings.clock]
            timezone = "utc"
            "#,
        )
        .unwrap();

        assert_eq!(config.settings.store.backend, StoreBackend::Json);
        assert!(config.settings.store.path.is_none());
        assert_eq!(config.settings.clock.timezone, Timezone::Utc);
    }
}
