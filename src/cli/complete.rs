//! Complete command implementation

use anyhow::{Result, bail};
use chrono::NaiveDate;

use healthquest::ProgressEngine;
use healthquest::config::Config;
use healthquest::progress::{Challenge, Completion, ProgressError, ProgressEvent};
use healthquest::store::ProgressStore;

use super::{open_engine, resolve_today};

const ALREADY_DONE: &str = "Already completed today. Come back tomorrow!";

/// Credit a challenge and print the award and any unlocks
pub fn complete_command(config: &Config, id: &str, date: Option<NaiveDate>) -> Result<()> {
    let mut engine = open_engine(config)?;
    let today = resolve_today(config, date);

    for line in complete_lines(&mut engine, id, today)? {
        println!("{}", line);
    }
    Ok(())
}

/// Run one completion and render what it did
fn complete_lines<S: ProgressStore>(
    engine: &mut ProgressEngine<S>,
    id: &str,
    today: NaiveDate,
) -> Result<Vec<String>> {
    match engine.complete_challenge(id, today) {
        Ok(completion) => Ok(render(&completion)),
        Err(ProgressError::InvalidChallenge { id }) => match Challenge::suggest(&id) {
            Some(suggestion) => bail!("Unknown challenge '{}'. Did you mean '{}'?", id, suggestion),
            None => bail!(
                "Unknown challenge '{}'. Run `healthquest challenges` to list them.",
                id
            ),
        },
        Err(e) => Err(e.into()),
    }
}

fn render(completion: &Completion) -> Vec<String> {
    let Some(award) = &completion.award else {
        return vec![ALREADY_DONE.to_string()];
    };

    let challenge = award.challenge.challenge();
    let mut lines = Vec::new();
    if award.bonus > 0 {
        lines.push(format!(
            "{} {} completed: +{} points ({} + {} streak bonus)",
            challenge.icon,
            challenge.title,
            award.total(),
            award.base,
            award.bonus
        ));
    } else {
        lines.push(format!(
            "{} {} completed: +{} points",
            challenge.icon,
            challenge.title,
            award.total()
        ));
    }

    for event in &completion.events {
        lines.push(match event {
            ProgressEvent::LevelUp(up) => format!("🌟 Level up! You reached level {}", up.new_level),
            ProgressEvent::AchievementUnlocked(a) => {
                format!("{} Achievement unlocked: {}", a.icon, a.name)
            }
        });
    }

    let state = &completion.state;
    lines.push(format!(
        "\n{} points, level {}, {} day streak",
        state.points, state.level, state.streak
    ));
    lines
}
