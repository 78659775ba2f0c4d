// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse --range / --period expressions into inclusive date bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid("start and end must have same format"));
        }

        match start.len() {
            // YYYY:YYYY
            4 => {
                let ys: i32 = start.parse().map_err(|_| invalid("invalid start year"))?;
                let ye: i32 = end.parse().map_err(|_| invalid("invalid end year"))?;

                let d1 = NaiveDate::from_ymd_opt(ys, 1, 1)
                    .ok_or_else(|| invalid("invalid start date"))?;
                let d2 = NaiveDate::from_ymd_opt(ye, 12, 31)
                    .ok_or_else(|| invalid("invalid end date"))?;
                Ok((d1, d2))
            }
            // YYYY-MM:YYYY-MM
            7 => {
                let (ys, ms) = parse_year_month(start)?;
                let (ye, me) = parse_year_month(end)?;

                let last =
                    month_last_day(ye, me).ok_or_else(|| invalid("invalid end month"))?;

                let d1 = NaiveDate::from_ymd_opt(ys, ms, 1)
                    .ok_or_else(|| invalid("invalid start date"))?;
                let d2 = NaiveDate::from_ymd_opt(ye, me, last)
                    .ok_or_else(|| invalid("invalid end date"))?;
                Ok((d1, d2))
            }
            // YYYY-MM-DD:YYYY-MM-DD
            10 => {
                let d1 = NaiveDate::parse_from_str(start, "%Y-%m-%d")
                    .map_err(|_| invalid("invalid start date"))?;
                let d2 = NaiveDate::parse_from_str(end, "%Y-%m-%d")
                    .map_err(|_| invalid("invalid end date"))?;
                Ok((d1, d2))
            }
            _ => Err(invalid("unsupported range format")),
        }
    } else {
        match r.len() {
            // YYYY
            4 => {
                let y: i32 = r.parse().map_err(|_| invalid("invalid year"))?;
                let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                    .ok_or_else(|| invalid("invalid start date"))?;
                let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                    .ok_or_else(|| invalid("invalid end date"))?;
                Ok((d1, d2))
            }
            // YYYY-MM
            7 => {
                let (y, m) = parse_year_month(r)?;
                let last = month_last_day(y, m).ok_or_else(|| invalid("invalid month"))?;

                let d1 = NaiveDate::from_ymd_opt(y, m, 1)
                    .ok_or_else(|| invalid("invalid start date"))?;
                let d2 = NaiveDate::from_ymd_opt(y, m, last)
                    .ok_or_else(|| invalid("invalid end date"))?;
                Ok((d1, d2))
            }
            // YYYY-MM-DD
            10 => {
                let d = NaiveDate::parse_from_str(r, "%Y-%m-%d")
                    .map_err(|_| invalid("invalid date"))?;
                Ok((d, d))
            }
            _ => Err(invalid("unsupported range format")),
        }
    }
}

fn invalid(msg: &str) -> AppError {
    AppError::InvalidDate(msg.to_string())
}

fn parse_year_month(s: &str) -> AppResult<(i32, u32)> {
    let y: i32 = s[0..4].parse().map_err(|_| invalid("invalid year"))?;
    let m: u32 = s[5..7].parse().map_err(|_| invalid("invalid month"))?;
    Ok((y, m))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
