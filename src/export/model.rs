// src/export/model.rs

use serde::Serialize;

/// Flat row for exporting work entries.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub hours: f64,
    pub location: String,
    pub kilometers: i64,
    pub added_at: String,
}

/// Flat row for exporting archived period summaries (invoicing).
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub id: i64,
    pub start_date: String,
    pub end_date: String,
    pub reset_date: String,
    pub total_hours: f64,
    pub total_kilometers: i64,
}

pub(crate) fn entry_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "start_time",
        "end_time",
        "hours",
        "location",
        "kilometers",
        "added_at",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.date.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        format!("{:.2}", e.hours),
        e.location.clone(),
        e.kilometers.to_string(),
        e.added_at.clone(),
    ]
}

pub(crate) fn summary_headers() -> Vec<&'static str> {
    vec![
        "id",
        "start_date",
        "end_date",
        "reset_date",
        "total_hours",
        "total_kilometers",
    ]
}

pub(crate) fn summary_to_row(s: &SummaryExport) -> Vec<String> {
    vec![
        s.id.to_string(),
        s.start_date.clone(),
        s.end_date.clone(),
        s.reset_date.clone(),
        format!("{:.2}", s.total_hours),
        s.total_kilometers.to_string(),
    ]
}
