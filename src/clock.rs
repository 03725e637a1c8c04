//! Calendar date supplier
//!
//! The engine takes "today" as an argument. Front ends get it from a
//! [`Clock`], which fixes the timezone the day boundary is taken in.

use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Timezone whose midnight starts a new day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timezone {
    /// The machine's local timezone
    #[default]
    Local,
    Utc,
}

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in a configured timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    pub timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.timezone {
            Timezone::Local => Local::now().date_naive(),
            Timezone::Utc => Utc::now().date_naive(),
        }
    }
}

/// Always returns the same day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
