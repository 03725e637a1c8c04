//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;

use healthquest::config::write_config_file;

/// Default configuration content for healthquest init
pub const DEFAULT_CONFIG: &str = r#"# Health Quest Configuration
# ==========================

# ============================================================================
# STORE - Where points, streaks and achievements are kept
# ============================================================================
#
# Available options:
#   backend - "sqlite" (default) or "json"
#   path    - Progress file; defaults to ~/.healthquest/progress.db
#             (or progress.json for the json backend)

[settings.store]
backend = "sqlite"
# path = "/home/me/health/progress.db"

# ============================================================================
# CLOCK - When a new day starts
# ============================================================================
#
# Streaks and the daily challenge reset follow calendar days in this timezone.
#   timezone - "local" (default) or "utc"

[settings.clock]
timezone = "local"
"#;

/// Write a default config file to `config_path`
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    write_config_file(config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
