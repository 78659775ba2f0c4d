use crate::core::distance::DistanceTable;
use crate::core::hours::compute_hours;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_entry_by_date, insert_entry, update_entry_fields};
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use crate::ui::messages::success;
use chrono::{Local, NaiveDate, NaiveTime};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Upsert the work session for one calendar day.
    ///
    /// A date that already has an entry is updated in place: same row id,
    /// same `added_at`, all session fields replaced. Validation happens
    /// before any write, so a rejected input leaves the database untouched.
    pub fn apply(
        pool: &mut DbPool,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        location: String,
        distances: &DistanceTable,
    ) -> AppResult<()> {
        //
        // 1️⃣ Derive and validate the duration
        //
        let hours = compute_hours(start, end);
        if hours <= 0.0 {
            return Err(AppError::InvalidDuration(format!(
                "End time {} must be later than start time {}.",
                end.format("%H:%M"),
                start.format("%H:%M"),
            )));
        }

        //
        // 2️⃣ Freeze the travel distance at write time
        //
        let kilometers = distances.resolve(&location);

        let date_str = date.to_string();

        //
        // 3️⃣ Upsert by date
        //
        match find_entry_by_date(&pool.conn, &date)? {
            Some(existing) => {
                let updated = WorkEntry {
                    start_time: start,
                    end_time: end,
                    hours,
                    location,
                    kilometers,
                    // identity and period membership are preserved
                    ..existing
                };
                update_entry_fields(&pool.conn, &updated)?;

                ttlog(
                    &pool.conn,
                    "add",
                    &date_str,
                    &format!("Updated entry: {:.2} h, {} km", hours, kilometers),
                )?;
                success(format!(
                    "Updated {}: {} → {} ({:.2} h, {} km).",
                    date_str,
                    start.format("%H:%M"),
                    end.format("%H:%M"),
                    hours,
                    kilometers
                ));
            }
            None => {
                let entry = WorkEntry {
                    id: 0,
                    date,
                    start_time: start,
                    end_time: end,
                    hours,
                    location,
                    kilometers,
                    added_at: Local::now(),
                };
                insert_entry(&pool.conn, &entry)?;

                ttlog(
                    &pool.conn,
                    "add",
                    &date_str,
                    &format!("Added entry: {:.2} h, {} km", hours, kilometers),
                )?;
                success(format!(
                    "Added {}: {} → {} ({:.2} h, {} km).",
                    date_str,
                    start.format("%H:%M"),
                    end.format("%H:%M"),
                    hours,
                    kilometers
                ));
            }
        }

        Ok(())
    }
}
