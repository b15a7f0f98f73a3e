#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsp() -> Command {
    cargo_bin_cmd!("rstudyplan")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstudyplan.sqlite", name));
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

/// Initialize the DB and sign in as `student@example.com`
pub fn init_and_login(db_path: &str) {
    rsp()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rsp()
        .args(["--db", db_path, "login", "student@example.com"])
        .assert()
        .success();
}

/// Add one timetable entry via the CLI
pub fn add_entry(db_path: &str, day: &str, slot: &str, focus: &str) {
    rsp()
        .args(["--db", db_path, "add", day, slot, focus])
        .assert()
        .success();
}
