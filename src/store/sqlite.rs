//! SQLite backend
//!
//! Manages `~/.healthquest/progress.db`. The progress row is a singleton;
//! the two id sets live in their own tables. Every save rewrites all three
//! inside one transaction.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use super::{ProgressStore, StoreError};
use crate::progress::{AchievementId, ChallengeId, ProgressState};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open or create the database at `path`
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        debug!("Opened progress db at {}", path.display());

        Self::from_connection(conn)
    }

    /// In-memory database, for tests
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA_SQL)?;

        let version: i32 = conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |r| r.get(0),
        )?;
        if version < SCHEMA_VERSION {
            conn.execute(
                "INSERT OR REPLACE INTO schema_version VALUES (?1)",
                [SCHEMA_VERSION],
            )?;
            debug!("Progress db schema at version {}", SCHEMA_VERSION);
        }

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }

    /// Unlock timestamps (ms since epoch) of all unlocked achievements
    pub fn unlock_times(&self) -> Result<Vec<(AchievementId, i64)>, StoreError> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, unlocked_at FROM unlocked_achievements ORDER BY unlocked_at")?;
        let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?)))?;

        let mut times = Vec::new();
        for row in rows {
            let (id, at) = row?;
            times.push((parse_achievement(&id)?, at));
        }
        Ok(times)
    }
}

fn to_u32(value: i64, column: &str) -> Result<u32, StoreError> {
    u32::try_from(value).map_err(|_| StoreError::Corrupt(format!("{} out of range: {}", column, value)))
}

fn parse_achievement(id: &str) -> Result<AchievementId, StoreError> {
    AchievementId::from_str(id)
        .ok_or_else(|| StoreError::Corrupt(format!("unknown achievement id: {}", id)))
}

impl ProgressStore for SqliteStore {
    fn load(&self) -> Result<ProgressState, StoreError> {
        let conn = self.conn()?;

        let row = conn
            .query_row(
                "SELECT points, level, streak, last_activity_day FROM progress WHERE id = 1",
                [],
                |r| {
                    Ok((
                        r.get::<_, i64>(0)?,
                        r.get::<_, i64>(1)?,
                        r.get::<_, i64>(2)?,
                        r.get::<_, Option<String>>(3)?,
                    ))
                },
            )
            .optional()?;

        let Some((points, level, streak, last_day)) = row else {
            return Ok(ProgressState::default());
        };

        let last_activity_date = match last_day {
            Some(day) => Some(NaiveDate::parse_from_str(&day, DAY_FORMAT).map_err(|_| {
                StoreError::Corrupt(format!("invalid last_activity_day: {}", day))
            })?),
            None => None,
        };

        let mut completed_today = BTreeSet::new();
        let mut stmt = conn.prepare("SELECT challenge_id FROM completed_today")?;
        for id in stmt.query_map([], |r| r.get::<_, String>(0))? {
            let id = id?;
            let challenge = ChallengeId::from_str(&id)
                .ok_or_else(|| StoreError::Corrupt(format!("unknown challenge id: {}", id)))?;
            completed_today.insert(challenge);
        }

        let mut unlocked_achievements = BTreeSet::new();
        let mut stmt = conn.prepare("SELECT id FROM unlocked_achievements")?;
        for id in stmt.query_map([], |r| r.get::<_, String>(0))? {
            unlocked_achievements.insert(parse_achievement(&id?)?);
        }

        Ok(ProgressState {
            points: to_u32(points, "points")?,
            level: to_u32(level, "level")?,
            streak: to_u32(streak, "streak")?,
            last_activity_date,
            completed_today,
            unlocked_achievements,
        })
    }

    fn save(&self, state: &ProgressState) -> Result<(), StoreError> {
        let now = Utc::now().timestamp_millis();
        let last_day = state
            .last_activity_date
            .map(|d| d.format(DAY_FORMAT).to_string());

        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        tx.execute(
            r#"
            INSERT INTO progress (id, points, level, streak, last_activity_day, updated_at)
            VALUES (1, ?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                points = ?1, level = ?2, streak = ?3, last_activity_day = ?4, updated_at = ?5
            "#,
            rusqlite::params![state.points, state.level, state.streak, last_day, now],
        )?;

        tx.execute("DELETE FROM completed_today", [])?;
        for id in &state.completed_today {
            tx.execute(
                "INSERT INTO completed_today (challenge_id) VALUES (?1)",
                [id.as_str()],
            )?;
        }

        // Keep the original unlock time of achievements that stay unlocked
        let stored: Vec<String> = {
            let mut stmt = tx.prepare("SELECT id FROM unlocked_achievements")?;
            let ids = stmt
                .query_map([], |r| r.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;
            ids
        };
        for id in stored {
            let keep = AchievementId::from_str(&id)
                .is_some_and(|a| state.unlocked_achievements.contains(&a));
            if !keep {
                tx.execute("DELETE FROM unlocked_achievements WHERE id = ?1", [&id])?;
            }
        }
        for id in &state.unlocked_achievements {
            tx.execute(
                "INSERT OR IGNORE INTO unlocked_achievements (id, unlocked_at) VALUES (?1, ?2)",
                rusqlite::params![id.as_str(), now],
            )?;
        }

        tx.commit()?;
        Ok(())
    }
}

/// SQL schema for the progress database
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);

-- Points, level, streak (singleton row)
CREATE TABLE IF NOT EXISTS progress (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    points INTEGER NOT NULL DEFAULT 0,
    level INTEGER NOT NULL DEFAULT 1,
    streak INTEGER NOT NULL DEFAULT 0,
    last_activity_day TEXT,
    updated_at INTEGER
);

-- Challenges credited on last_activity_day
CREATE TABLE IF NOT EXISTS completed_today (
    challenge_id TEXT PRIMARY KEY
);

-- Achievements awarded so far
CREATE TABLE IF NOT EXISTS unlocked_achievements (
    id TEXT PRIMARY KEY,
    unlocked_at INTEGER NOT NULL
);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_and_init() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("progress.db");
        let store = SqliteStore::open(&db_path).unwrap();

        let conn = store.conn().unwrap();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap();
        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"progress".to_string()));
        assert!(tables.contains(&"completed_today".to_string()));
        assert!(tables.contains(&"unlocked_achievements".to_string()));
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("progress.db");
        let state = ProgressState {
            points: 40,
            streak: 1,
            ..Default::default()
        };
        SqliteStore::open(&db_path).unwrap().save(&state).unwrap();

        let reopened = SqliteStore::open(&db_path).unwrap();
        assert_eq!(reopened.load().unwrap(), state);
    }

    #[test]
    fn test_empty_db_loads_defaults() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.load().unwrap(), ProgressState::default());
    }

    #[test]
    fn test_unlock_time_survives_later_saves() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut state = ProgressState {
            points: 120,
            ..Default::default()
        };
        state.unlocked_achievements.insert(AchievementId::HealthNovice);
        store.save(&state).unwrap();
        let first = store.unlock_times().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(5));
        state.points = 180;
        store.save(&state).unwrap();

        assert_eq!(store.unlock_times().unwrap(), first);
    }

    #[test]
    fn test_negative_points_are_corrupt() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.save(&ProgressState::default()).unwrap();
        store
            .conn()
            .unwrap()
            .execute("UPDATE progress SET points = -5 WHERE id = 1", [])
            .unwrap();

        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }
}
