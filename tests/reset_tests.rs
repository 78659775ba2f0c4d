mod common;

use common::{init_db_with_data, open_pool, rwl, setup_test_db};
use predicates::prelude::*;
use rworklog::core::period::aggregate;
use rworklog::db::queries::{get_checkpoint, load_entries, load_summaries};

#[test]
fn reset_archives_totals_and_empties_the_period() {
    let db = setup_test_db("reset_basic");
    init_db_with_data(&db);

    rwl()
        .args(["--db", &db, "reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Period closed"))
        .stdout(predicate::str::contains("11.00 h, 68 km"));

    let mut pool = open_pool(&db);

    let summaries = load_summaries(&mut pool).unwrap();
    assert_eq!(summaries.len(), 1);
    let s = &summaries[0];
    assert_eq!(s.start_date, "April 1, 2025");
    assert_eq!(s.end_date, "April 2, 2025");
    assert_eq!(s.total_hours, 11.00);
    assert_eq!(s.total_kilometers, 68);

    // Entries survive the reset; only the checkpoint moved past them.
    let entries = load_entries(&mut pool).unwrap();
    assert_eq!(entries.len(), 2);

    let checkpoint = get_checkpoint(&pool.conn).unwrap().expect("checkpoint set");
    let totals = aggregate(&entries, Some(&checkpoint));
    assert_eq!(totals.total_hours, 0.0);
    assert_eq!(totals.total_kilometers, 0);
}

#[test]
fn status_reports_empty_period_after_reset() {
    let db = setup_test_db("reset_status");
    init_db_with_data(&db);

    rwl()
        .args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("April 1, 2025"))
        .stdout(predicate::str::contains("11.00"));

    rwl().args(["--db", &db, "reset", "--yes"]).assert().success();

    rwl()
        .args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries"))
        .stdout(predicate::str::contains("0.00"));
}

#[test]
fn empty_reset_advances_checkpoint_without_summary() {
    let db = setup_test_db("reset_empty");
    rwl().args(["--db", &db, "--test", "init"]).assert().success();

    rwl()
        .args(["--db", &db, "reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checkpoint advanced"));

    let mut pool = open_pool(&db);
    assert!(load_summaries(&mut pool).unwrap().is_empty());
    assert!(get_checkpoint(&pool.conn).unwrap().is_some());
}

#[test]
fn back_to_back_resets_do_not_double_report() {
    let db = setup_test_db("reset_twice");
    init_db_with_data(&db);

    rwl().args(["--db", &db, "reset", "--yes"]).assert().success();

    // Nothing new since the first reset: no second summary.
    rwl()
        .args(["--db", &db, "reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checkpoint advanced"));

    let mut pool = open_pool(&db);
    assert_eq!(load_summaries(&mut pool).unwrap().len(), 1);
}

#[test]
fn entries_added_after_a_reset_form_a_new_period() {
    let db = setup_test_db("reset_new_period");
    init_db_with_data(&db);

    rwl().args(["--db", &db, "reset", "--yes"]).assert().success();

    rwl()
        .args([
            "--db",
            &db,
            "add",
            "2025-05-05",
            "--in",
            "09:00",
            "--out",
            "13:00",
            "--loc",
            "Brakel 18km",
        ])
        .assert()
        .success();

    rwl()
        .args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("May 5, 2025"))
        .stdout(predicate::str::contains("4.00"));

    rwl()
        .args(["--db", &db, "reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.00 h, 18 km"));

    let mut pool = open_pool(&db);
    let summaries = load_summaries(&mut pool).unwrap();
    assert_eq!(summaries.len(), 2);

    // Most recent first.
    assert_eq!(summaries[0].start_date, "May 5, 2025");
    assert_eq!(summaries[0].total_kilometers, 18);
    assert_eq!(summaries[1].total_kilometers, 68);
}

#[test]
fn interactive_reset_aborts_without_confirmation() {
    let db = setup_test_db("reset_abort");
    init_db_with_data(&db);

    rwl()
        .args(["--db", &db, "reset"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled"));

    let mut pool = open_pool(&db);
    assert!(load_summaries(&mut pool).unwrap().is_empty());
    assert!(get_checkpoint(&pool.conn).unwrap().is_none());
}
