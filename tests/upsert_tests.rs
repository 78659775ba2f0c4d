mod common;

use common::{init_db_with_data, open_pool, rwl, setup_test_db};
use predicates::prelude::*;
use rworklog::db::queries::{find_entry_by_date, load_entries};

fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn adding_the_same_date_twice_updates_in_place() {
    let db = setup_test_db("upsert_same_date");
    init_db_with_data(&db);

    let mut pool = open_pool(&db);
    let before = find_entry_by_date(&pool.conn, &date("2025-04-01"))
        .unwrap()
        .expect("entry exists after seeding");
    drop(pool);

    // Re-enter the same day with corrected times and a different location.
    rwl()
        .args([
            "--db",
            &db,
            "add",
            "2025-04-01",
            "--in",
            "10:00",
            "--out",
            "18:30",
            "--loc",
            "Gent 50km",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 2025-04-01"));

    let mut pool = open_pool(&db);
    let after = find_entry_by_date(&pool.conn, &date("2025-04-01"))
        .unwrap()
        .expect("entry still exists");

    // Identity and period membership are preserved.
    assert_eq!(after.id, before.id);
    assert_eq!(after.added_at, before.added_at);

    // Session fields are replaced wholesale.
    assert_eq!(after.start_str(), "10:00");
    assert_eq!(after.end_str(), "18:30");
    assert_eq!(after.hours, 8.50);
    assert_eq!(after.location, "Gent 50km");
    assert_eq!(after.kilometers, 50);

    // Still exactly one row per date.
    let all = load_entries(&mut pool).unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn rejected_duration_leaves_the_row_untouched() {
    let db = setup_test_db("upsert_rejected");
    init_db_with_data(&db);

    rwl()
        .args([
            "--db",
            &db,
            "add",
            "2025-04-01",
            "--in",
            "17:00",
            "--out",
            "09:00",
            "--loc",
            "Brakel 18km",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be later than"));

    let pool = open_pool(&db);
    let entry = find_entry_by_date(&pool.conn, &date("2025-04-01"))
        .unwrap()
        .expect("entry survives the failed update");
    assert_eq!(entry.start_str(), "09:00");
    assert_eq!(entry.end_str(), "17:00");
    assert_eq!(entry.hours, 8.00);
}

#[test]
fn zero_length_session_is_rejected() {
    let db = setup_test_db("upsert_zero");
    rwl().args(["--db", &db, "--test", "init"]).assert().success();

    rwl()
        .args([
            "--db", &db, "add", "2025-04-01", "--in", "09:00", "--out", "09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be later than"));

    let mut pool = open_pool(&db);
    assert!(load_entries(&mut pool).unwrap().is_empty());
}

#[test]
fn distance_is_frozen_per_write_not_rewritten_later() {
    let db = setup_test_db("upsert_frozen_km");
    init_db_with_data(&db);

    // Updating one day does not touch the kilometers stored on another.
    rwl()
        .args([
            "--db",
            &db,
            "add",
            "2025-04-02",
            "--in",
            "08:00",
            "--out",
            "16:00",
            "--loc",
            "Brakel warehouse",
        ])
        .assert()
        .success();

    let pool = open_pool(&db);
    let brakel_day = find_entry_by_date(&pool.conn, &date("2025-04-02"))
        .unwrap()
        .unwrap();
    assert_eq!(brakel_day.kilometers, 18);

    let untouched = find_entry_by_date(&pool.conn, &date("2025-04-01"))
        .unwrap()
        .unwrap();
    assert_eq!(untouched.kilometers, 18);
    assert_eq!(untouched.location, "Brakel 18km");
}
