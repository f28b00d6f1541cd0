//! Weekly schedule rows as returned by the `schedules` table.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::StudyYear;

/// Teaching days, stored by the backend as French weekday names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Lundi,
    Mardi,
    Mercredi,
    Jeudi,
    Vendredi,
    Samedi,
}

impl Weekday {
    /// Calendar order, which is also the display order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Lundi,
        Weekday::Mardi,
        Weekday::Mercredi,
        Weekday::Jeudi,
        Weekday::Vendredi,
        Weekday::Samedi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Lundi => "Lundi",
            Weekday::Mardi => "Mardi",
            Weekday::Mercredi => "Mercredi",
            Weekday::Jeudi => "Jeudi",
            Weekday::Vendredi => "Vendredi",
            Weekday::Samedi => "Samedi",
        }
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.name() == s)
            .ok_or_else(|| format!("unknown weekday '{}'", s))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Truncate a store time (`HH:MM:SS`) to `HH:MM`.
///
/// Strings shorter than five characters are returned unchanged.
pub fn format_time(time: &str) -> &str {
    match time.char_indices().nth(5) {
        Some((idx, _)) => &time[..idx],
        None => time,
    }
}

/// One class slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub year: StudyYear,
    pub day_of_week: Weekday,
    /// Time of day as sent by the store, `HH:MM:SS`.
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    pub professor: String,
    pub room: String,
}

impl ScheduleEntry {
    /// `"08:00 - 10:00"`
    pub fn time_range(&self) -> String {
        format!("{} - {}", format_time(&self.start_time), format_time(&self.end_time))
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
