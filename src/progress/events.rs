//! Events emitted by a challenge completion

use super::achievements::Achievement;
use super::challenges::ChallengeId;

/// A level up event
#[derive(Debug, Clone, PartialEq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

/// Events the presentation layer reacts to (notifications, animations)
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    LevelUp(LevelUp),
    AchievementUnlocked(&'static Achievement),
}

/// Points credited for one completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    pub challenge: ChallengeId,
    pub base: u32,
    pub bonus: u32,
}

impl Award {
    pub fn total(&self) -> u32 {
        self.base + self.bonus
    }
}
