//! Progress state: the single mutable entity of the engine

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::achievements::AchievementId;
use super::challenges::ChallengeId;
use super::levels::level_for_points;

/// Points, level, streak and the per-day / lifetime completion sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    pub points: u32,
    /// Always `floor(points / 500) + 1`
    pub level: u32,
    /// Consecutive days with at least one completed challenge
    pub streak: u32,
    /// Day of the most recent completion
    #[serde(default)]
    pub last_activity_date: Option<NaiveDate>,
    /// Challenges credited on `last_activity_date`
    #[serde(default)]
    pub completed_today: BTreeSet<ChallengeId>,
    #[serde(default)]
    pub unlocked_achievements: BTreeSet<AchievementId>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            points: 0,
            level: 1,
            streak: 0,
            last_activity_date: None,
            completed_today: BTreeSet::new(),
            unlocked_achievements: BTreeSet::new(),
        }
    }
}

impl ProgressState {
    /// Re-derive the level from points.
    ///
    /// Returns true if the stored level was out of sync.
    pub fn normalize(&mut self) -> bool {
        let derived = level_for_points(self.points);
        let changed = self.level != derived;
        self.level = derived;
        changed
    }

    /// Whether `id` has been credited on `today`
    pub fn is_completed_on(&self, id: ChallengeId, today: NaiveDate) -> bool {
        self.last_activity_date == Some(today) && self.completed_today.contains(&id)
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked_achievements.contains(&id)
    }
}
