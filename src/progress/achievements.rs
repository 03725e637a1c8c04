//! Achievement definitions
//!
//! Achievements unlock once cumulative points reach their threshold and are
//! never awarded twice. `ACHIEVEMENTS` is kept in ascending threshold order,
//! which is also the order unlock events are emitted in.

use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    HealthNovice,
    WellnessWarrior,
    HealthChampion,
}

impl AchievementId {
    /// Get the string ID for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HealthNovice => "health_novice",
            Self::WellnessWarrior => "wellness_warrior",
            Self::HealthChampion => "health_champion",
        }
    }

    /// Parse from storage string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "health_novice" => Some(Self::HealthNovice),
            "wellness_warrior" => Some(Self::WellnessWarrior),
            "health_champion" => Some(Self::HealthChampion),
            _ => None,
        }
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Achievement definition
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub icon: &'static str,
    /// Cumulative points required to unlock
    pub point_threshold: u32,
}

/// All achievement definitions (must be sorted by threshold)
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::HealthNovice,
        name: "Health Novice",
        icon: "🎖️",
        point_threshold: 100,
    },
    Achievement {
        id: AchievementId::WellnessWarrior,
        name: "Wellness Warrior",
        icon: "🏅",
        point_threshold: 500,
    },
    Achievement {
        id: AchievementId::HealthChampion,
        name: "Health Champion",
        icon: "🏆",
        point_threshold: 1000,
    },
];

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .expect("All achievements should be defined")
    }

    /// Achievements reachable with `points`, in ascending threshold order
    pub fn reached_by(points: u32) -> impl Iterator<Item = &'static Achievement> {
        ACHIEVEMENTS
            .iter()
            .take_while(move |a| a.point_threshold <= points)
    }

    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}
