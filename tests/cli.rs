//! End-to-end tests for the spendlog binary
//!
//! Each test runs against its own data directory via SPENDLOG_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_list_shows_expense() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["expense", "add", "Team lunch", "12.50", "--category", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense:"));

    spendlog(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team lunch"))
        .stdout(predicate::str::contains("1 expenses, total $12.50"));
}

#[test]
fn add_rejects_invalid_amount() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["expense", "add", "Team lunch", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn summary_on_empty_store() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Most Used Category:    N/A"));
}

#[test]
fn category_chart_renders() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["expense", "add", "Monthly rent", "900", "--category", "Housing"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["chart", "category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EXPENSES BY CATEGORY"))
        .stdout(predicate::str::contains("Housing"))
        .stdout(predicate::str::contains("$900.00"));
}

#[test]
fn budget_status_reports_over_budget() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["budget", "set", "Food", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for Food set to $10.00"));

    spendlog(&dir)
        .args(["expense", "add", "Big dinner", "25", "--category", "Food"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OVER BUDGET"));
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    spendlog(&dir)
        .args(["expense", "add", "Team lunch", "12.50", "--category", "Food"])
        .assert()
        .success();

    spendlog(&dir)
        .arg("export")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses"));

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    assert!(contents.starts_with("Date,Description,Amount,Category,Payment Method,Notes"));
    assert!(contents.contains("\"Team lunch\",12.50,Food,Cash"));
}

#[test]
fn delete_unknown_id_fails_cleanly() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["expense", "delete", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn data_survives_between_runs() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["expense", "add", "Team lunch", "12.50"])
        .assert()
        .success();
    spendlog(&dir)
        .args(["expense", "add", "Taxi ride", "30.00", "--category", "Transport"])
        .assert()
        .success();

    // A fresh process sees both records and the backup from the second save
    spendlog(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 expenses, total $42.50"));

    assert!(dir.path().join("expenses_backup.txt").exists());
}
