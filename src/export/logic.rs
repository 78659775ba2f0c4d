// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{
    EntryExport, SummaryExport, entry_headers, entry_to_row, summary_headers, summary_to_row,
};
use crate::export::range::parse_range;
use crate::ui::messages::warning;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::params;
use std::io;
use std::path::Path;

/// Parse a --period expression into inclusive date bounds. Shared with the
/// `list` command, which filters on the same grammar.
pub fn period_filter(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    parse_range(p)
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export work entries, or archived period summaries with `summaries`.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or an expression like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    ///
    /// The range filters on the entry `date` column and does not apply to
    /// summaries, whose boundaries are frozen display strings.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        summaries: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        if summaries {
            let rows = load_summaries(pool)?;
            if rows.is_empty() {
                warning("⚠️  No period summaries to export.");
                return Ok(());
            }

            return match format {
                ExportFormat::Csv => export_csv(&rows, path),
                ExportFormat::Json => export_json(&rows, path),
                ExportFormat::Xlsx => {
                    let table: Vec<Vec<String>> = rows.iter().map(summary_to_row).collect();
                    export_xlsx(&summary_headers(), &table, path)
                }
            };
        }

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let entries = load_entries(pool, date_bounds)?;

        if entries.is_empty() {
            warning("⚠️  No entries found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
            ExportFormat::Xlsx => {
                let table: Vec<Vec<String>> = entries.iter().map(entry_to_row).collect();
                export_xlsx(&entry_headers(), &table, path)?
            }
        }

        Ok(())
    }
}

/// Load flat entry rows, optionally bounded by date.
fn load_entries(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<EntryExport>> {
    let conn = &mut pool.conn;

    let mut entries = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, date, start_time, end_time, hours, location, kilometers, added_at
                 FROM entries
                 ORDER BY date ASC",
            )?;

            let rows = stmt.query_map([], map_entry)?;

            for r in rows {
                entries.push(r?);
            }
        }
        Some((start, end)) => {
            let start_str = start.format("%Y-%m-%d").to_string();
            let end_str = end.format("%Y-%m-%d").to_string();

            let mut stmt = conn.prepare(
                "SELECT id, date, start_time, end_time, hours, location, kilometers, added_at
                 FROM entries
                 WHERE date BETWEEN ?1 AND ?2
                 ORDER BY date ASC",
            )?;

            let rows = stmt.query_map(params![start_str, end_str], map_entry)?;

            for r in rows {
                entries.push(r?);
            }
        }
    }

    Ok(entries)
}

fn load_summaries(pool: &mut DbPool) -> AppResult<Vec<SummaryExport>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, start_date, end_date, reset_date, total_hours, total_kilometers
         FROM summaries
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_summary)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_entry(row: &Row<'_>) -> rusqlite::Result<EntryExport> {
    Ok(EntryExport {
        id: row.get(0)?,
        date: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        hours: row.get(4)?,
        location: row.get(5)?,
        kilometers: row.get(6)?,
        added_at: row.get(7)?,
    })
}

fn map_summary(row: &Row<'_>) -> rusqlite::Result<SummaryExport> {
    Ok(SummaryExport {
        id: row.get(0)?,
        start_date: row.get(1)?,
        end_date: row.get(2)?,
        reset_date: row.get(3)?,
        total_hours: row.get(4)?,
        total_kilometers: row.get(5)?,
    })
}
