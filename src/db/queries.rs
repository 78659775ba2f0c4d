use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use crate::models::summary::PeriodSummary;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Key under which the reset checkpoint lives in the `meta` table.
const CHECKPOINT_KEY: &str = "last_reset_time";

pub fn map_entry_row(row: &Row) -> Result<WorkEntry> {
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;
    let added_str: String = row.get("added_at")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let start_time = NaiveTime::parse_from_str(&start_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(start_str.clone())),
        )
    })?;

    let end_time = NaiveTime::parse_from_str(&end_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(end_str.clone())),
        )
    })?;

    let added_at = DateTime::parse_from_rfc3339(&added_str)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(added_str.clone())),
            )
        })?;

    Ok(WorkEntry {
        id: row.get("id")?,
        date,
        start_time,
        end_time,
        hours: row.get("hours")?,
        location: row.get("location")?,
        kilometers: row.get("kilometers")?,
        added_at,
    })
}

/// Load every entry, oldest first.
pub fn load_entries(pool: &mut DbPool) -> AppResult<Vec<WorkEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM entries
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_entry_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Option<WorkEntry>> {
    let mut stmt = conn.prepare("SELECT * FROM entries WHERE date = ?1")?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let entry = stmt.query_row([date_str], map_entry_row).optional()?;

    Ok(entry)
}

pub fn insert_entry(conn: &Connection, entry: &WorkEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (date, start_time, end_time, hours, location, kilometers, added_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            entry.hours,
            entry.location,
            entry.kilometers,
            entry.added_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Replace the session fields of an existing entry.
///
/// `date`, `id` and `added_at` stay untouched: an edited day keeps its
/// identity and does not jump into a new billing period.
pub fn update_entry_fields(conn: &Connection, entry: &WorkEntry) -> AppResult<()> {
    conn.execute(
        "UPDATE entries
         SET start_time = ?1, end_time = ?2, hours = ?3,
             location = ?4, kilometers = ?5
         WHERE id = ?6",
        params![
            entry.start_str(),
            entry.end_str(),
            entry.hours,
            entry.location,
            entry.kilometers,
            entry.id,
        ],
    )?;
    Ok(())
}

pub fn delete_entry_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<usize> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let n = conn.execute("DELETE FROM entries WHERE date = ?1", [date_str])?;
    Ok(n)
}

fn map_summary_row(row: &Row) -> Result<PeriodSummary> {
    Ok(PeriodSummary {
        id: row.get("id")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        reset_date: row.get("reset_date")?,
        total_hours: row.get("total_hours")?,
        total_kilometers: row.get("total_kilometers")?,
    })
}

/// Load archived period summaries, most recent first.
pub fn load_summaries(pool: &mut DbPool) -> AppResult<Vec<PeriodSummary>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM summaries
         ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], map_summary_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_summary(conn: &Connection, summary: &PeriodSummary) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO summaries (start_date, end_date, reset_date, total_hours, total_kilometers, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            summary.start_date,
            summary.end_date,
            summary.reset_date,
            summary.total_hours,
            summary.total_kilometers,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_summary(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM summaries WHERE id = ?1", [id])?;
    Ok(n)
}

/// Read the reset checkpoint, if one has ever been set.
pub fn get_checkpoint(conn: &Connection) -> AppResult<Option<DateTime<Local>>> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM meta WHERE key = ?1",
            [CHECKPOINT_KEY],
            |row| row.get(0),
        )
        .optional()?;

    match value {
        None => Ok(None),
        Some(raw) => {
            let dt = DateTime::parse_from_rfc3339(&raw)
                .map_err(|_| AppError::InvalidDate(raw.clone()))?;
            Ok(Some(dt.with_timezone(&Local)))
        }
    }
}

pub fn set_checkpoint(conn: &Connection, at: &DateTime<Local>) -> AppResult<()> {
    conn.execute(
        "INSERT INTO meta (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![CHECKPOINT_KEY, at.to_rfc3339()],
    )?;
    Ok(())
}

/// Commit a period reset atomically: the summary insert (if any) and the
/// checkpoint advance succeed or fail together. A failed summary write
/// must never advance the checkpoint, otherwise those hours silently drop
/// out of every future summary.
pub fn commit_reset(
    conn: &mut Connection,
    summary: Option<&PeriodSummary>,
    new_checkpoint: &DateTime<Local>,
) -> AppResult<Option<i64>> {
    let tx = conn.transaction()?;

    let summary_id = match summary {
        Some(s) => Some(insert_summary(&tx, s)?),
        None => None,
    };

    set_checkpoint(&tx, new_checkpoint)?;

    tx.commit()?;
    Ok(summary_id)
}
