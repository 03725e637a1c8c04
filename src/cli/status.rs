//! Status command implementation

use anyhow::Result;

use healthquest::clock::{Clock, SystemClock};
use healthquest::config::Config;
use healthquest::progress::{Achievement, LevelProgress, effective_streak};

use super::open_engine;

/// Show points, level, streak and unlocked achievements
pub fn status_command(config: &Config) -> Result<()> {
    let engine = open_engine(config)?;
    let state = engine.state();
    let today = SystemClock::new(config.settings.clock.timezone).today();

    let level = LevelProgress::new(state.points);
    let streak = effective_streak(state.streak, state.last_activity_date, today);

    println!("Health Quest\n");
    println!("  Points:  {}", state.points);
    println!(
        "  Level:   {} ({}%, {} points to level {})",
        state.level,
        (level.fraction() * 100.0).round() as u32,
        level.points_to_next,
        state.level + 1
    );
    println!("  Streak:  {} day(s)", streak);

    match state.last_activity_date {
        Some(day) => println!("  Last activity: {}", day),
        None => println!("  Last activity: never"),
    }

    if state.unlocked_achievements.is_empty() {
        println!("\nNo achievements yet.");
    } else {
        println!(
            "\nAchievements ({}/{}):",
            state.unlocked_achievements.len(),
            Achievement::total_count()
        );
        for id in &state.unlocked_achievements {
            let achievement = Achievement::get(*id);
            println!("  {} {}", achievement.icon, achievement.name);
        }
    }

    Ok(())
}
