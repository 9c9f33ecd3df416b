//! End-to-end tests driving the spendz binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendz(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendz").unwrap();
    cmd.env("SPENDZ_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_list_shows_the_record() {
    let temp = TempDir::new().unwrap();

    spendz(&temp)
        .args(["add", "Lunch at cafeteria", "12.5", "Food", "2025-10-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));

    spendz(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch at cafeteria"))
        .stdout(predicate::str::contains("12.50"))
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn invalid_amount_is_rejected_with_the_field_name() {
    let temp = TempDir::new().unwrap();

    spendz(&temp)
        .args(["add", "Lunch", "12.555", "Food", "2025-10-14"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount"));

    spendz(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded"));
}

#[test]
fn impossible_date_is_rejected() {
    let temp = TempDir::new().unwrap();

    spendz(&temp)
        .args(["add", "Lunch", "5", "Food", "2025-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date"));
}

#[test]
fn delete_removes_the_listed_record() {
    let temp = TempDir::new().unwrap();

    spendz(&temp)
        .args(["add", "Lunch", "5", "Food", "2025-10-14"])
        .assert()
        .success();
    spendz(&temp)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    spendz(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded"));
}

#[test]
fn edit_updates_a_field() {
    let temp = TempDir::new().unwrap();

    spendz(&temp)
        .args(["add", "Lunch", "5", "Food", "2025-10-14"])
        .assert()
        .success();
    spendz(&temp)
        .args(["edit", "1", "--amount", "7.25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));
    spendz(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("7.25"));
}

#[test]
fn list_search_filters() {
    let temp = TempDir::new().unwrap();

    spendz(&temp)
        .args(["add", "Lunch at cafeteria", "5", "Food", "2025-10-14"])
        .assert()
        .success();
    spendz(&temp)
        .args(["add", "Cinema night", "12", "Fun", "2025-10-14"])
        .assert()
        .success();

    spendz(&temp)
        .args(["list", "--search", "cinema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cinema night"))
        .stdout(predicate::str::contains("Lunch").not());
}

#[test]
fn summary_reports_totals_and_top_category() {
    let temp = TempDir::new().unwrap();

    spendz(&temp)
        .args(["add", "Lunch", "10", "Food", "2025-10-14"])
        .assert()
        .success();
    spendz(&temp)
        .args(["add", "Cinema", "12", "Fun", "2025-10-14"])
        .assert()
        .success();
    spendz(&temp)
        .args(["add", "Snack", "5", "Food", "2025-10-15"])
        .assert()
        .success();

    spendz(&temp)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("27.00"))
        .stdout(predicate::str::contains("Top category: Food"));
}

#[test]
fn budget_set_show_and_warning() {
    let temp = TempDir::new().unwrap();

    spendz(&temp)
        .args(["budget", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget set to 20.00"));

    spendz(&temp)
        .arg("budget")
        .assert()
        .success()
        .stdout(predicate::str::contains("20.00"));

    spendz(&temp)
        .args(["add", "Splurge", "30", "Fun", "2025-10-14"])
        .assert()
        .success();
    spendz(&temp)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("over your budget"));
}

#[test]
fn config_shows_defaults_and_sets_values() {
    let temp = TempDir::new().unwrap();

    spendz(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("base-currency = USD"));

    spendz(&temp)
        .args(["config", "base-currency", "eur"])
        .assert()
        .success();
    spendz(&temp)
        .args(["config", "base-currency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base-currency = EUR"))
        .stdout(predicate::str::contains("rate-eur").not());

    spendz(&temp)
        .args(["config", "shoe-size", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn records_survive_across_invocations() {
    let temp = TempDir::new().unwrap();

    spendz(&temp)
        .args(["add", "Lunch", "5", "Food", "2025-10-14"])
        .assert()
        .success();
    spendz(&temp)
        .args(["add", "Dinner", "15", "Food", "2025-10-14"])
        .assert()
        .success();

    // Every invocation is a fresh process; the data file carries the state
    spendz(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Dinner"));
}
