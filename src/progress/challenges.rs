//! Daily challenge catalog
//!
//! Five daily health challenges. Each can be credited at most once per
//! calendar day; the set of challenges done today is cleared when the date
//! advances.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for each challenge
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeId {
    DailyHealthCheck,
    MedicineReminder,
    ExerciseGoal,
    SleepSchedule,
    HealthyDiet,
}

impl ChallengeId {
    /// Get the string ID for storage and the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyHealthCheck => "daily_health_check",
            Self::MedicineReminder => "medicine_reminder",
            Self::ExerciseGoal => "exercise_goal",
            Self::SleepSchedule => "sleep_schedule",
            Self::HealthyDiet => "healthy_diet",
        }
    }

    /// Parse from a stored or user-supplied string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "daily_health_check" => Some(Self::DailyHealthCheck),
            "medicine_reminder" => Some(Self::MedicineReminder),
            "exercise_goal" => Some(Self::ExerciseGoal),
            "sleep_schedule" => Some(Self::SleepSchedule),
            "healthy_diet" => Some(Self::HealthyDiet),
            _ => None,
        }
    }

    /// Get all challenge IDs in catalog order
    pub fn all() -> &'static [ChallengeId] {
        &[
            Self::DailyHealthCheck,
            Self::MedicineReminder,
            Self::ExerciseGoal,
            Self::SleepSchedule,
            Self::HealthyDiet,
        ]
    }

    /// Catalog entry for this id
    pub fn challenge(&self) -> &'static Challenge {
        // Every variant has exactly one CHALLENGES entry (checked in tests).
        CHALLENGE_INDEX[self]
    }
}

impl std::fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Challenge definition
#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Points awarded before any streak bonus
    pub base_points: u32,
}

/// All challenge definitions
pub static CHALLENGES: &[Challenge] = &[
    Challenge {
        id: ChallengeId::DailyHealthCheck,
        title: "Daily Health Check",
        description: "Complete your daily health assessment",
        icon: "🎯",
        base_points: 50,
    },
    Challenge {
        id: ChallengeId::MedicineReminder,
        title: "Medicine Reminder",
        description: "Take your medications on time",
        icon: "💊",
        base_points: 30,
    },
    Challenge {
        id: ChallengeId::ExerciseGoal,
        title: "Exercise Goal",
        description: "Complete 30 minutes of exercise",
        icon: "🏃",
        base_points: 100,
    },
    Challenge {
        id: ChallengeId::SleepSchedule,
        title: "Sleep Schedule",
        description: "Maintain a consistent sleep schedule",
        icon: "🌙",
        base_points: 80,
    },
    Challenge {
        id: ChallengeId::HealthyDiet,
        title: "Healthy Diet",
        description: "Log your meals and stay on track",
        icon: "🥗",
        base_points: 60,
    },
];

static CHALLENGE_INDEX: Lazy<HashMap<ChallengeId, &'static Challenge>> =
    Lazy::new(|| CHALLENGES.iter().map(|c| (c.id, c)).collect());

impl Challenge {
    /// Look up a challenge by its string id
    pub fn find(id: &str) -> Option<&'static Challenge> {
        ChallengeId::from_str(id).map(|id| id.challenge())
    }

    /// Closest catalog id to an unknown input, for "did you mean" hints
    pub fn suggest(input: &str) -> Option<&'static str> {
        ChallengeId::all()
            .iter()
            .map(|id| (id.as_str(), strsim::jaro_winkler(input, id.as_str())))
            .filter(|(_, score)| *score >= 0.8)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}
