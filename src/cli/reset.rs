//! Reset command implementation

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;

use healthquest::ProgressState;
use healthquest::config::Config;
use healthquest::store::ProgressStore;

use super::open_store;

/// Overwrite stored progress with defaults
pub fn reset_command(config: &Config, yes: bool) -> Result<()> {
    if !yes && !confirm("Reset all points, streaks and achievements? [y/N] ")? {
        println!("Aborted.");
        return Ok(());
    }

    let store = open_store(config)?;
    store
        .save(&ProgressState::default())
        .context("Failed to reset progress")?;

    info!(
        "Reset progress in {}",
        config.settings.store.resolved_path().display()
    );
    println!("Progress reset.");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
