//! Progress engine - core gamification logic
//!
//! Applies challenge completions: daily reset, streak continuity, bonus
//! points, level recompute and the achievement scan all happen in one
//! transition. The next state is computed on a copy, persisted, and only
//! then adopted in memory, so a failed save leaves the engine on its last
//! known-good state.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::achievements::Achievement;
use super::challenges::Challenge;
use super::error::ProgressError;
use super::events::{Award, LevelUp, ProgressEvent};
use super::levels::level_for_points;
use super::state::ProgressState;
use super::streaks::{DayGap, streak_bonus};
use crate::store::ProgressStore;

/// Result of a `complete_challenge` call
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// State after the call
    pub state: ProgressState,
    /// Level-up first (if any), then unlocks in threshold order
    pub events: Vec<ProgressEvent>,
    /// None when the challenge was already credited today
    pub award: Option<Award>,
}

impl Completion {
    pub fn is_noop(&self) -> bool {
        self.award.is_none()
    }
}

/// A computed but not yet persisted transition
#[derive(Debug)]
struct Transition {
    state: ProgressState,
    events: Vec<ProgressEvent>,
    award: Award,
}

/// Owns the progress state and mirrors every change to a [`ProgressStore`]
pub struct ProgressEngine<S> {
    store: S,
    state: ProgressState,
}

impl<S: ProgressStore> ProgressEngine<S> {
    /// Load state from `store` (defaults if empty)
    pub fn new(store: S) -> Result<Self, ProgressError> {
        let mut state = store.load()?;
        if state.normalize() {
            warn!(
                "Stored level did not match {} points, using level {}",
                state.points, state.level
            );
        }
        debug!(
            "Loaded progress: {} points, level {}, streak {}",
            state.points, state.level, state.streak
        );
        Ok(Self { store, state })
    }

    /// Current in-memory state (does not touch storage)
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Credit `challenge_id` for `today`.
    ///
    /// Crediting the same challenge twice on one day is a no-op. Fails with
    /// `InvalidChallenge` for ids outside the catalog and `InvalidDate` when
    /// `today` is before the last activity; neither mutates anything.
    pub fn complete_challenge(
        &mut self,
        challenge_id: &str,
        today: NaiveDate,
    ) -> Result<Completion, ProgressError> {
        let challenge = Challenge::find(challenge_id).ok_or_else(|| {
            ProgressError::InvalidChallenge {
                id: challenge_id.to_string(),
            }
        })?;

        let Some(transition) = plan_completion(&self.state, challenge, today)? else {
            debug!("{} already completed on {}", challenge.id, today);
            return Ok(Completion {
                state: self.state.clone(),
                events: Vec::new(),
                award: None,
            });
        };

        if let Err(e) = self.store.save(&transition.state) {
            warn!("Not applying {} completion, save failed: {}", challenge.id, e);
            return Err(e.into());
        }
        self.state = transition.state;

        debug!(
            "{} completed on {}: +{} ({} bonus), {} points, streak {}",
            challenge.id,
            today,
            transition.award.total(),
            transition.award.bonus,
            self.state.points,
            self.state.streak
        );
        for event in &transition.events {
            match event {
                ProgressEvent::LevelUp(up) => {
                    info!("Level up: {} -> {}", up.old_level, up.new_level)
                }
                ProgressEvent::AchievementUnlocked(a) => info!("Achievement unlocked: {}", a.name),
            }
        }

        Ok(Completion {
            state: self.state.clone(),
            events: transition.events,
            award: Some(transition.award),
        })
    }
}

/// Compute the transition for one completion without side effects.
///
/// Returns `Ok(None)` when the challenge was already credited today.
fn plan_completion(
    current: &ProgressState,
    challenge: &'static Challenge,
    today: NaiveDate,
) -> Result<Option<Transition>, ProgressError> {
    if let Some(last_activity) = current.last_activity_date {
        if today < last_activity {
            return Err(ProgressError::InvalidDate {
                today,
                last_activity,
            });
        }
    }
    let gap = DayGap::between(current.last_activity_date, today);

    let mut next = current.clone();

    if gap.resets_daily_challenges() {
        next.completed_today.clear();
    }
    if gap.breaks_streak() {
        next.streak = 0;
    }

    if next.completed_today.contains(&challenge.id) {
        return Ok(None);
    }

    let award = Award {
        challenge: challenge.id,
        base: challenge.base_points,
        bonus: streak_bonus(challenge.base_points, next.streak),
    };
    next.points = next.points.saturating_add(award.total());
    next.completed_today.insert(challenge.id);

    if gap.is_new_day() {
        next.streak += 1;
    }
    next.last_activity_date = Some(today);

    let mut events = Vec::new();

    let new_level = level_for_points(next.points);
    if new_level > next.level {
        events.push(ProgressEvent::LevelUp(LevelUp {
            old_level: next.level,
            new_level,
        }));
        next.level = new_level;
    }

    for achievement in Achievement::reached_by(next.points) {
        if next.unlocked_achievements.insert(achievement.id) {
            events.push(ProgressEvent::AchievementUnlocked(achievement));
        }
    }

    Ok(Some(Transition {
        state: next,
        events,
        award,
    }))
}
