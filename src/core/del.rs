use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entry_by_date, delete_summary};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the work entry for a date.
    pub fn entry(pool: &mut DbPool, date: NaiveDate) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let deleted = delete_entry_by_date(&pool.conn, &date)?;
        if deleted == 0 {
            return Err(AppError::NoEntryForDate(date_str));
        }

        ttlog(&pool.conn, "del", &date_str, "Deleted work entry")?;
        info(format!("Deleted entry for {}", date));
        Ok(())
    }

    /// Delete an archived period summary by id. This is the only mutation
    /// a summary ever sees.
    pub fn summary(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let deleted = delete_summary(&pool.conn, id)?;
        if deleted == 0 {
            return Err(AppError::NoSummaryWithId(id));
        }

        ttlog(
            &pool.conn,
            "del",
            &format!("summary:{id}"),
            "Deleted period summary",
        )?;
        info(format!("Deleted period summary #{}", id));
        Ok(())
    }
}
