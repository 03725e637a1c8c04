use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use healthquest::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "healthquest")]
#[command(about = "Health Quest - daily health challenges with points, streaks and achievements")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.healthquest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show points, level, streak and unlocked achievements
    Status,

    /// List today's challenges
    Challenges {
        /// Day to show the board for (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show progress toward every achievement
    Achievements,

    /// Mark a challenge as completed
    Complete {
        /// Challenge id (see `healthquest challenges`)
        id: String,

        /// Day to credit (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Initialize a new config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Reset all progress to zero
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let load_config = || Config::load(config_path);

    match cli.command {
        Some(Commands::Status) | None => cli::status::status_command(&load_config()?)?,
        Some(Commands::Challenges { date }) => {
            cli::catalog::challenges_command(&load_config()?, date)?
        }
        Some(Commands::Achievements) => cli::catalog::achievements_command(&load_config()?)?,
        Some(Commands::Complete { id, date }) => {
            cli::complete::complete_command(&load_config()?, &id, date)?
        }
        Some(Commands::Init { force }) => {
            let path = config_path
                .map(PathBuf::from)
                .unwrap_or_else(Config::global_config_path);
            cli::init::init_command(&path, force)?
        }
        Some(Commands::Reset { yes }) => cli::reset::reset_command(&load_config()?, yes)?,
    }

    Ok(())
}
