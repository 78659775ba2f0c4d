mod common;

use common::{init_db_with_data, open_pool, rwl, setup_test_db, temp_out};
use predicates::prelude::*;
use rworklog::db::queries::load_entries;
use std::fs;

#[test]
fn init_creates_the_database() {
    let db = setup_test_db("init");

    rwl()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(fs::metadata(&db).is_ok());

    // Schema is in place: an add straight after init works.
    rwl()
        .args([
            "--db", &db, "add", "2025-04-01", "--in", "09:00", "--out", "17:00",
        ])
        .assert()
        .success();
}

#[test]
fn add_rejects_malformed_date() {
    let db = setup_test_db("bad_date");
    rwl().args(["--db", &db, "--test", "init"]).assert().success();

    rwl()
        .args([
            "--db", &db, "add", "01/04/2025", "--in", "09:00", "--out", "17:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    let mut pool = open_pool(&db);
    assert!(load_entries(&mut pool).unwrap().is_empty());
}

#[test]
fn add_rejects_malformed_time() {
    let db = setup_test_db("bad_time");
    rwl().args(["--db", &db, "--test", "init"]).assert().success();

    rwl()
        .args([
            "--db", &db, "add", "2025-04-01", "--in", "9am", "--out", "17:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}

#[test]
fn add_without_location_uses_the_configured_default() {
    let db = setup_test_db("default_loc");
    rwl().args(["--db", &db, "--test", "init"]).assert().success();

    rwl()
        .args([
            "--db", &db, "add", "2025-04-01", "--in", "09:00", "--out", "17:00",
        ])
        .assert()
        .success();

    let mut pool = open_pool(&db);
    let entries = load_entries(&mut pool).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].location, "Gent 50km");
    assert_eq!(entries[0].kilometers, 50);
}

#[test]
fn list_shows_entries_and_totals() {
    let db = setup_test_db("list");
    init_db_with_data(&db);

    rwl()
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-04-01"))
        .stdout(predicate::str::contains("Brakel 18km"))
        .stdout(predicate::str::contains("Total: 11.00 h, 68 km over 2 entries."));
}

#[test]
fn list_period_filter_narrows_to_one_day() {
    let db = setup_test_db("list_period");
    init_db_with_data(&db);

    rwl()
        .args(["--db", &db, "list", "--period", "2025-04-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-04-02"))
        .stdout(predicate::str::contains("2025-04-01").not())
        .stdout(predicate::str::contains("Total: 3.00 h, 50 km over 1 entry."));
}

#[test]
fn list_all_includes_archived_entries() {
    let db = setup_test_db("list_all");
    init_db_with_data(&db);

    rwl().args(["--db", &db, "reset", "--yes"]).assert().success();

    // Default view is the (now empty) current period.
    rwl()
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries to show."));

    rwl()
        .args(["--db", &db, "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-04-01"))
        .stdout(predicate::str::contains("2025-04-02"));
}

#[test]
fn list_summaries_before_any_reset() {
    let db = setup_test_db("list_no_summaries");
    init_db_with_data(&db);

    rwl()
        .args(["--db", &db, "list", "--summaries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No archived periods yet."));
}

#[test]
fn del_removes_an_entry_and_errors_on_missing_date() {
    let db = setup_test_db("del");
    init_db_with_data(&db);

    rwl()
        .args(["--db", &db, "del", "2025-04-01", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry for 2025-04-01"));

    let mut pool = open_pool(&db);
    assert_eq!(load_entries(&mut pool).unwrap().len(), 1);
    drop(pool);

    rwl()
        .args(["--db", &db, "del", "2025-04-01", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry found for date 2025-04-01"));
}

#[test]
fn del_summary_by_id() {
    let db = setup_test_db("del_summary");
    init_db_with_data(&db);
    rwl().args(["--db", &db, "reset", "--yes"]).assert().success();

    rwl()
        .args(["--db", &db, "del", "--summary", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted period summary #1"));

    rwl()
        .args(["--db", &db, "del", "--summary", "1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No period summary found with id 1"));
}

#[test]
fn status_on_a_fresh_database() {
    let db = setup_test_db("status_fresh");
    rwl().args(["--db", &db, "--test", "init"]).assert().success();

    rwl()
        .args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries"))
        .stdout(predicate::str::contains("Last reset: never"));
}

#[test]
fn db_check_passes_on_a_healthy_database() {
    let db = setup_test_db("db_check");
    init_db_with_data(&db);

    rwl()
        .args(["--db", &db, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integrity check passed"));
}

#[test]
fn backup_copies_the_database() {
    let db = setup_test_db("backup_plain");
    init_db_with_data(&db);
    let out = temp_out("backup_plain", "sqlite");

    rwl()
        .args(["--db", &db, "backup", "--file", &out])
        .assert()
        .success();

    let original = fs::metadata(&db).unwrap().len();
    let copy = fs::metadata(&out).unwrap().len();
    assert_eq!(original, copy);
}

#[test]
fn compressed_backup_is_a_zip_archive() {
    let db = setup_test_db("backup_zip");
    init_db_with_data(&db);
    let out = temp_out("backup_zip", "zip");

    rwl()
        .args(["--db", &db, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    // ZIP local file header magic.
    let bytes = fs::read(&out).unwrap();
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}

#[test]
fn log_records_the_operations_performed() {
    let db = setup_test_db("audit_log");
    init_db_with_data(&db);
    rwl().args(["--db", &db, "reset", "--yes"]).assert().success();

    rwl()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("reset"));
}
