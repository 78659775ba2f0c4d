use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// One calendar day's recorded work session.
#[derive(Debug, Clone, Serialize)]
pub struct WorkEntry {
    pub id: i64,
    pub date: NaiveDate,       // ⇔ entries.date (TEXT "YYYY-MM-DD", UNIQUE)
    pub start_time: NaiveTime, // ⇔ entries.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,   // ⇔ entries.end_time (TEXT "HH:MM")
    pub hours: f64,            // ⇔ entries.hours (REAL, 2 decimals)
    pub location: String,      // ⇔ entries.location (TEXT, free label)
    pub kilometers: i64,       // ⇔ entries.kilometers (INT, frozen at write time)

    /// When the entry was first created. Period membership is decided on
    /// this instant, not on `date`, and an in-place update keeps it.
    pub added_at: DateTime<Local>, // ⇔ entries.added_at (TEXT, ISO8601)
}

impl WorkEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }

    /// True when the entry belongs to the current (unarchived) period.
    /// Strictly after the checkpoint; entries added at exactly the reset
    /// instant stay archived.
    pub fn is_current(&self, checkpoint: Option<&DateTime<Local>>) -> bool {
        match checkpoint {
            Some(t) => self.added_at > *t,
            None => true,
        }
    }
}
