use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `entries` table exists.
fn entries_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='entries'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `entries` table has a `kilometers` column.
fn entries_has_kilometers_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('entries')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "kilometers" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `entries` table with the modern schema.
///
/// The UNIQUE constraint on `date` is the one-entry-per-day rule: the
/// repository, not string comparison in calling code, rejects duplicates.
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            date         TEXT NOT NULL UNIQUE,
            start_time   TEXT NOT NULL,
            end_time     TEXT NOT NULL,
            hours        REAL NOT NULL,
            location     TEXT NOT NULL DEFAULT '',
            kilometers   INTEGER NOT NULL DEFAULT 0,
            added_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_added_at ON entries(added_at);
        "#,
    )?;
    Ok(())
}

/// Create the `summaries` table (archived billing periods).
fn create_summaries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS summaries (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            start_date       TEXT NOT NULL,
            end_date         TEXT NOT NULL,
            reset_date       TEXT NOT NULL,
            total_hours      REAL NOT NULL,
            total_kilometers INTEGER NOT NULL,
            created_at       TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `meta` key/value table holding the reset checkpoint.
fn create_meta_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS meta (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Pre-0.3 databases stored entries without the frozen kilometers value.
/// Add the column once and record the migration in the log table.
fn migrate_add_kilometers_column(conn: &Connection) -> Result<(), Error> {
    let version = "20250412_0001_add_kilometers";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // already applied
    }

    if entries_has_kilometers_column(conn)? {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE entries ADD COLUMN kilometers INTEGER NOT NULL DEFAULT 0;",
        [],
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added kilometers column to entries')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'kilometers' to entries table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table first: migrations record themselves there
    ensure_log_table(conn)?;

    // 2) Entries table
    if !entries_table_exists(conn)? {
        create_entries_table(conn)?;
    } else {
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_entries_added_at ON entries(added_at);",
        )?;
        migrate_add_kilometers_column(conn)?;
    }

    // 3) Summaries and checkpoint storage
    create_summaries_table(conn)?;
    create_meta_table(conn)?;

    Ok(())
}
