//! Period accounting: running totals for the current billing period and
//! the pure close-period computation.
//!
//! Everything here is a pure function of (entries, checkpoint): totals are
//! recomputed on every call and no state is carried between calls. The
//! entry sets involved are tens to low hundreds of rows, so recomputing
//! beats caching.

use crate::models::entry::WorkEntry;
use crate::models::summary::{NO_ENTRIES, PeriodSummary};
use crate::models::totals::PeriodTotals;
use crate::utils::date::{long_date, long_date_time};
use crate::utils::formatting::round2;
use chrono::{DateTime, Local, NaiveDate};

/// Result of closing the current period. The caller persists the summary
/// and the checkpoint together; nothing is written here.
#[derive(Debug)]
pub struct ClosedPeriod {
    pub summary: Option<PeriodSummary>,
    pub new_checkpoint: DateTime<Local>,
}

fn current<'a>(
    entries: &'a [WorkEntry],
    checkpoint: Option<&'a DateTime<Local>>,
) -> impl Iterator<Item = &'a WorkEntry> {
    entries.iter().filter(move |e| e.is_current(checkpoint))
}

/// Sum hours and kilometers over exactly the current-period subset:
/// entries with `added_at > checkpoint`, or all entries when no reset has
/// ever happened.
pub fn aggregate(entries: &[WorkEntry], checkpoint: Option<&DateTime<Local>>) -> PeriodTotals {
    let mut totals = PeriodTotals::default();

    for e in current(entries, checkpoint) {
        totals.total_hours += e.hours;
        totals.total_kilometers += e.kilometers;
    }

    totals.total_hours = round2(totals.total_hours);
    totals
}

/// Min/max entry `date` over the current period, or None when it is empty.
/// Membership is decided on `added_at`; the boundaries themselves are the
/// calendar dates worked.
pub fn period_bounds(
    entries: &[WorkEntry],
    checkpoint: Option<&DateTime<Local>>,
) -> Option<(NaiveDate, NaiveDate)> {
    let mut bounds: Option<(NaiveDate, NaiveDate)> = None;

    for e in current(entries, checkpoint) {
        bounds = Some(match bounds {
            None => (e.date, e.date),
            Some((min, max)) => (min.min(e.date), max.max(e.date)),
        });
    }

    bounds
}

/// Boundary dates as display strings, with the sentinel label for an
/// empty period.
pub fn format_bounds(bounds: Option<(NaiveDate, NaiveDate)>) -> (String, String) {
    match bounds {
        Some((start, end)) => (long_date(start), long_date(end)),
        None => (NO_ENTRIES.to_string(), NO_ENTRIES.to_string()),
    }
}

/// Close the current period as of `now`.
///
/// A summary is produced only when there is something to report
/// (`total_hours > 0`); the checkpoint advances to `now` either way, so a
/// reset over an empty period is a no-op summary-wise but still starts a
/// fresh period.
pub fn close_period(
    entries: &[WorkEntry],
    checkpoint: Option<&DateTime<Local>>,
    now: DateTime<Local>,
) -> ClosedPeriod {
    let totals = aggregate(entries, checkpoint);

    let summary = if totals.total_hours > 0.0 {
        let (start_date, end_date) = format_bounds(period_bounds(entries, checkpoint));
        Some(PeriodSummary {
            id: 0, // assigned by the repository on insert
            start_date,
            end_date,
            reset_date: long_date_time(now),
            total_hours: totals.total_hours,
            total_kilometers: totals.total_kilometers,
        })
    } else {
        None
    };

    ClosedPeriod {
        summary,
        new_checkpoint: now,
    }
}
