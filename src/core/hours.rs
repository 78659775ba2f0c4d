//! Duration calculation: wall-clock HH:MM pair → decimal hours.

use crate::utils::formatting::round2;
use crate::utils::time::minutes_between;
use chrono::NaiveTime;

/// Decimal hours between two wall-clock times on the same calendar day,
/// rounded to 2 fractional digits.
///
/// No clamping and no wrap past midnight: when `end` is earlier than
/// `start` the result is negative (or zero for equal times), and callers
/// must reject anything `<= 0` as invalid input before storing it.
pub fn compute_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let minutes = minutes_between(start, end);
    round2(minutes as f64 / 60.0)
}
