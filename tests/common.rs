#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add the two-entry dataset used by many tests:
/// one Brakel day (8 h / 18 km) and one Gent morning (3 h / 50 km).
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rwl()
        .args([
            "--db",
            db_path,
            "add",
            "2025-04-01",
            "--in",
            "09:00",
            "--out",
            "17:00",
            "--loc",
            "Brakel 18km",
        ])
        .assert()
        .success();

    rwl()
        .args([
            "--db",
            db_path,
            "add",
            "2025-04-02",
            "--in",
            "09:00",
            "--out",
            "12:00",
            "--loc",
            "Gent 50km",
        ])
        .assert()
        .success();
}

/// Direct library access for assertions on stored rows.
pub fn open_pool(db_path: &str) -> rworklog::db::pool::DbPool {
    rworklog::db::pool::DbPool::new(db_path).expect("open db")
}
