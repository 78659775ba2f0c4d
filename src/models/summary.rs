use serde::Serialize;

/// Boundary label used when a period closes with no datable entries.
pub const NO_ENTRIES: &str = "No entries";

/// Immutable archived record of one closed billing period.
///
/// Boundary dates and the reset instant are stored pre-formatted
/// ("April 5, 2025" / "April 5, 2025 at 3:04 PM"): a summary is frozen at
/// close time and never recomputed, only deleted on explicit request.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodSummary {
    pub id: i64,
    pub start_date: String,
    pub end_date: String,
    pub reset_date: String,
    pub total_hours: f64,
    pub total_kilometers: i64,
}
