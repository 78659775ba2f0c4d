use serde::Serialize;

/// Running totals for the current billing period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PeriodTotals {
    pub total_hours: f64,
    pub total_kilometers: i64,
}
