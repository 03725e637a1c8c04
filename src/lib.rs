//! Health Quest - daily health challenges
//!
//! Completing a daily health challenge earns points. Points raise the level
//! (one level per 500 points) and unlock achievements; completing at least
//! one challenge on consecutive days builds a streak, and from a 5-day
//! streak on every completion earns 50% bonus points.
//!
//! ## Layout
//!
//! - [`progress`]: the engine, catalogs and read-only views
//! - [`store`]: persistence behind the [`store::ProgressStore`] trait
//! - [`clock`]: the "today" supplier and its timezone policy
//! - [`config`]: `~/.healthquest/config.toml`
//! - [`atomic`]: locked temp-file-and-rename writes used by both

pub mod atomic;
pub mod clock;
pub mod config;
pub mod progress;
pub mod store;

pub use progress::{ProgressEngine, ProgressError, ProgressEvent, ProgressState};
