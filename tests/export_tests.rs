mod common;

use common::{init_db_with_data, rwl, setup_test_db, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn csv_export_writes_header_and_all_entries() {
    let db = setup_test_db("export_csv");
    init_db_with_data(&db);
    let out = temp_out("export_csv", "csv");

    rwl()
        .args(["--db", &db, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv file written");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "id,date,start_time,end_time,hours,location,kilometers,added_at"
    );
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("2025-04-01"));
    assert!(lines[1].contains("Brakel 18km"));
    assert!(lines[2].contains("2025-04-02"));
}

#[test]
fn json_export_preserves_field_values() {
    let db = setup_test_db("export_json");
    init_db_with_data(&db);
    let out = temp_out("export_json", "json");

    rwl()
        .args(["--db", &db, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json file written");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array of entries");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "2025-04-01");
    assert_eq!(rows[0]["hours"], 8.0);
    assert_eq!(rows[0]["kilometers"], 18);
    assert_eq!(rows[1]["location"], "Gent 50km");
    assert_eq!(rows[1]["kilometers"], 50);
}

#[test]
fn xlsx_export_produces_a_file() {
    let db = setup_test_db("export_xlsx");
    init_db_with_data(&db);
    let out = temp_out("export_xlsx", "xlsx");

    rwl()
        .args(["--db", &db, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx file written");
    assert!(meta.len() > 0);
}

#[test]
fn range_filter_limits_the_export() {
    let db = setup_test_db("export_range");
    init_db_with_data(&db);
    let out = temp_out("export_range", "csv");

    rwl()
        .args([
            "--db",
            &db,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2025-04-01",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv file written");
    assert!(content.contains("2025-04-01"));
    assert!(!content.contains("2025-04-02"));
}

#[test]
fn summaries_export_after_a_reset() {
    let db = setup_test_db("export_summaries");
    init_db_with_data(&db);

    rwl().args(["--db", &db, "reset", "--yes"]).assert().success();

    let out = temp_out("export_summaries", "csv");
    rwl()
        .args([
            "--db",
            &db,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--summaries",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv file written");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "id,start_date,end_date,reset_date,total_hours,total_kilometers"
    );
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("April 1, 2025"));
    assert!(lines[1].contains("April 2, 2025"));
    assert!(lines[1].contains("68"));
}

#[test]
fn existing_file_requires_force() {
    let db = setup_test_db("export_force");
    init_db_with_data(&db);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "already here").unwrap();

    rwl()
        .args(["--db", &db, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export cancelled"));

    // The original content is untouched after the refusal.
    assert_eq!(fs::read_to_string(&out).unwrap(), "already here");

    rwl()
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("id,date"));
}

#[test]
fn relative_output_path_is_rejected() {
    let db = setup_test_db("export_relative");
    init_db_with_data(&db);

    rwl()
        .args([
            "--db",
            &db,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}
