//! Challenge board and achievement list

use anyhow::Result;
use chrono::NaiveDate;

use healthquest::config::Config;
use healthquest::progress::{achievement_progress, challenge_board};

use super::{open_engine, resolve_today};

/// List the challenges for a day
pub fn challenges_command(config: &Config, date: Option<NaiveDate>) -> Result<()> {
    let engine = open_engine(config)?;
    let today = resolve_today(config, date);
    let board = challenge_board(engine.state(), today);

    println!("Challenges for {}:\n", today);

    for row in board {
        let c = row.challenge;
        let mark = if row.completed_today { "x" } else { " " };
        println!("  [{}] {} {} ({})", mark, c.icon, c.title, c.id);
        println!("      {}", c.description);

        if row.completed_today {
            println!("      Done today");
        } else if row.bonus_active {
            println!(
                "      {} points ({} + 50% streak bonus)",
                row.available_points, c.base_points
            );
        } else {
            println!("      {} points", row.available_points);
        }
        println!();
    }

    Ok(())
}

/// Show progress toward every achievement
pub fn achievements_command(config: &Config) -> Result<()> {
    let engine = open_engine(config)?;

    println!("Achievements:\n");
    for row in achievement_progress(engine.state()) {
        let a = row.achievement;
        if row.unlocked {
            println!("  {} {} - Unlocked!", a.icon, a.name);
        } else {
            println!(
                "  {} {} - {}/{} points",
                a.icon, a.name, row.current, a.point_threshold
            );
        }
    }

    Ok(())
}
