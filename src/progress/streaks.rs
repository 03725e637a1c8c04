//! Daily streak rules
//!
//! A streak counts consecutive calendar days with at least one completed
//! challenge. Dates are plain calendar days; the caller decides which
//! timezone "today" is taken in.

use chrono::NaiveDate;

/// Streak length at which the completion bonus kicks in
pub const STREAK_BONUS_THRESHOLD: u32 = 5;

/// How `today` relates to the last day with activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayGap {
    /// No activity recorded yet
    FirstActivity,
    /// Activity already recorded today
    SameDay,
    /// Last activity was yesterday; the streak continues
    NextDay,
    /// At least one day without activity; the streak is broken
    Missed,
    /// `today` is earlier than the last activity (clock went backwards)
    Backwards,
}

impl DayGap {
    pub fn between(last_activity: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(last) = last_activity else {
            return Self::FirstActivity;
        };

        match (today - last).num_days() {
            0 => Self::SameDay,
            1 => Self::NextDay,
            d if d < 0 => Self::Backwards,
            _ => Self::Missed,
        }
    }

    /// Whether the set of challenges done today must be cleared
    pub fn resets_daily_challenges(&self) -> bool {
        matches!(self, Self::NextDay | Self::Missed)
    }

    /// Whether the running streak must drop to zero before crediting
    pub fn breaks_streak(&self) -> bool {
        matches!(self, Self::Missed)
    }

    /// Whether a completion now is the first one of the day
    pub fn is_new_day(&self) -> bool {
        !matches!(self, Self::SameDay)
    }
}

/// Bonus points for a completion at the given streak (50% from day 5 on)
pub fn streak_bonus(base_points: u32, streak: u32) -> u32 {
    if streak >= STREAK_BONUS_THRESHOLD {
        base_points / 2
    } else {
        0
    }
}

/// Streak as it stands on `today`, without crediting anything.
///
/// Used by read-only views: a streak whose last activity is older than
/// yesterday is already broken even though nothing has been written yet.
pub fn effective_streak(streak: u32, last_activity: Option<NaiveDate>, today: NaiveDate) -> u32 {
    if DayGap::between(last_activity, today).breaks_streak() {
        0
    } else {
        streak
    }
}
