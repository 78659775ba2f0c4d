use chrono::{DateTime, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Long-form date, e.g. "April 5, 2025". Used for period summary
/// boundaries.
pub fn long_date(d: NaiveDate) -> String {
    d.format("%B %-d, %Y").to_string()
}

/// Long-form date and time, e.g. "April 5, 2025 at 3:04 PM". Used for the
/// summary reset instant.
pub fn long_date_time(dt: DateTime<Local>) -> String {
    dt.format("%B %-d, %Y at %-I:%M %p").to_string()
}
