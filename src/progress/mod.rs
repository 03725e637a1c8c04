//! Gamification: points, levels, daily streaks, challenges and achievements
//!
//! [`ProgressEngine`] is the only place progress changes. Callers pass in
//! today's date; the engine never reads the clock.

mod achievements;
mod board;
mod challenges;
mod engine;
mod error;
mod events;
mod levels;
mod shared;
mod state;
mod streaks;

pub use achievements::{ACHIEVEMENTS, Achievement, AchievementId};
pub use board::{AchievementProgress, ChallengeStatus, achievement_progress, challenge_board};
pub use challenges::{CHALLENGES, Challenge, ChallengeId};
pub use engine::{Completion, ProgressEngine};
pub use error::ProgressError;
pub use events::{Award, LevelUp, ProgressEvent};
pub use levels::{LevelProgress, POINTS_PER_LEVEL, level_for_points};
pub use shared::SharedEngine;
pub use state::ProgressState;
pub use streaks::{DayGap, STREAK_BONUS_THRESHOLD, effective_streak, streak_bonus};
