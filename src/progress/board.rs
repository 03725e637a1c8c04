//! Read-only views for the presentation layer
//!
//! These never mutate state. A day change is reflected on read: challenges
//! done on an earlier day show as open, and a lapsed streak shows no bonus.

use chrono::NaiveDate;

use super::achievements::{ACHIEVEMENTS, Achievement};
use super::challenges::{CHALLENGES, Challenge};
use super::state::ProgressState;
use super::streaks::{STREAK_BONUS_THRESHOLD, effective_streak, streak_bonus};

/// One row of the daily challenge board
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeStatus {
    pub challenge: &'static Challenge,
    pub completed_today: bool,
    /// Streak bonus would apply to a completion now
    pub bonus_active: bool,
    /// Points a completion now would award (0 if already done today)
    pub available_points: u32,
}

/// Board rows for every challenge, in catalog order
pub fn challenge_board(state: &ProgressState, today: NaiveDate) -> Vec<ChallengeStatus> {
    let streak = effective_streak(state.streak, state.last_activity_date, today);
    let bonus_active = streak >= STREAK_BONUS_THRESHOLD;

    CHALLENGES
        .iter()
        .map(|challenge| {
            let completed_today = state.is_completed_on(challenge.id, today);
            let available_points = if completed_today {
                0
            } else {
                challenge.base_points + streak_bonus(challenge.base_points, streak)
            };
            ChallengeStatus {
                challenge,
                completed_today,
                bonus_active,
                available_points,
            }
        })
        .collect()
}

/// Progress toward one achievement
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementProgress {
    pub achievement: &'static Achievement,
    pub unlocked: bool,
    /// Points counted toward the threshold (capped at the threshold)
    pub current: u32,
}

impl AchievementProgress {
    pub fn remaining(&self) -> u32 {
        self.achievement.point_threshold - self.current
    }
}

/// Progress rows for every achievement, in threshold order
pub fn achievement_progress(state: &ProgressState) -> Vec<AchievementProgress> {
    ACHIEVEMENTS
        .iter()
        .map(|achievement| AchievementProgress {
            achievement,
            unlocked: state.is_unlocked(achievement.id),
            current: state.points.min(achievement.point_threshold),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{AchievementId, ChallengeId};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_board_marks_today_only() {
        let mut state = ProgressState {
            points: 100,
            streak: 1,
            last_activity_date: Some(day("2024-06-01")),
            ..Default::default()
        };
        state.completed_today.insert(ChallengeId::ExerciseGoal);

        let today = challenge_board(&state, day("2024-06-01"));
        let exercise = today
            .iter()
            .find(|s| s.challenge.id == ChallengeId::ExerciseGoal)
            .unwrap();
        assert!(exercise.completed_today);
        assert_eq!(exercise.available_points, 0);

        let tomorrow = challenge_board(&state, day("2024-06-02"));
        assert!(tomorrow.iter().all(|s| !s.completed_today));
    }

    #[test]
    fn test_board_bonus_follows_live_streak() {
        let state = ProgressState {
            streak: 5,
            last_activity_date: Some(day("2024-06-05")),
            ..Default::default()
        };

        let next_day = challenge_board(&state, day("2024-06-06"));
        assert!(next_day.iter().all(|s| s.bonus_active));
        let diet = next_day
            .iter()
            .find(|s| s.challenge.id == ChallengeId::HealthyDiet)
            .unwrap();
        assert_eq!(diet.available_points, 90);

        let lapsed = challenge_board(&state, day("2024-06-08"));
        assert!(lapsed.iter().all(|s| !s.bonus_active));
    }

    #[test]
    fn test_board_rows_compare_by_value() {
        let state = ProgressState::default();
        let board = challenge_board(&state, day("2024-06-01"));

        assert_eq!(
            board[0],
            ChallengeStatus {
                challenge: ChallengeId::DailyHealthCheck.challenge(),
                completed_today: false,
                bonus_active: false,
                available_points: 50,
            }
        );
        assert_eq!(board, challenge_board(&state, day("2024-06-02")));
    }

    #[test]
    fn test_achievement_progress() {
        let mut state = ProgressState {
            points: 620,
            ..Default::default()
        };
        state.unlocked_achievements.insert(AchievementId::HealthNovice);
        state.unlocked_achievements.insert(AchievementId::WellnessWarrior);

        let rows = achievement_progress(&state);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].unlocked && rows[1].unlocked);
        assert!(!rows[2].unlocked);
        assert_eq!(rows[2].current, 620);
        assert_eq!(rows[2].remaining(), 380);
        assert_eq!(rows[0].remaining(), 0);
    }
}
