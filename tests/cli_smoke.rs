use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const TRIP_START: &str = "2025-07-01";

fn tripbudget_cmd(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tripbudget"));
    cmd.env("TRIPBUDGET_DATA_DIR", home.path());
    cmd.env_remove("TRIPBUDGET_TRIP");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_ok_out(home: &tempfile::TempDir, args: &[&str]) -> String {
    let out = tripbudget_cmd(home)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(out).expect("utf8 stdout")
}

/// Starter trip: 2025-07-01..07, 200 per day, hotel 420 over the first
/// three days, dinner 45 on day 1, train 60 on day 2
fn init_trip() -> tempfile::TempDir {
    let home = tempfile::tempdir().expect("tempdir");
    run_ok_out(&home, &["init", "--today", TRIP_START]);
    home
}

fn stats_json(home: &tempfile::TempDir, date: &str) -> serde_json::Value {
    let out = run_ok_out(
        home,
        &["stats", "--json", "--today", TRIP_START, "--date", date],
    );
    serde_json::from_str(&out).expect("stats json")
}

#[test]
fn init_writes_trip_file() {
    let home = init_trip();
    assert!(home.path().join("trips").join("trip.json").exists());
    assert!(home.path().join("config.json").exists());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let home = init_trip();
    tripbudget_cmd(&home)
        .args(["init", "--today", TRIP_START])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tripbudget_cmd(&home)
        .args(["init", "--force", "--today", TRIP_START])
        .assert()
        .success();
}

#[test]
fn stats_first_day() {
    let home = init_trip();
    let stats = stats_json(&home, "2025-07-01");

    assert_eq!(stats["date"], "2025-07-01");
    assert_eq!(stats["daily_budget"], 200.0);
    assert_eq!(stats["total_spent_today"], 185.0);
    assert_eq!(stats["expense_count_today"], 2);
    assert_eq!(stats["days_into_trip"], 1);
    assert_eq!(stats["total_days"], 7);
    assert!(stats["cumulative_savings_past"].is_null());
    assert_eq!(stats["status"], "warning");
}

#[test]
fn stats_rollover_on_second_day() {
    let home = init_trip();
    let stats = stats_json(&home, "2025-07-02");

    assert_eq!(stats["total_spent_today"], 200.0);
    assert_eq!(stats["is_over_budget"], false);
    assert_eq!(stats["cumulative_budget_past"], 200.0);
    assert_eq!(stats["cumulative_spent_past"], 185.0);
    assert_eq!(stats["cumulative_savings_past"], 15.0);
    assert_eq!(stats["adjusted_daily_budget"], 202.5);
}

#[test]
fn stats_future_day_without_expenses_is_not_started() {
    let home = init_trip();
    let stats = stats_json(&home, "2025-07-05");

    assert_eq!(stats["total_spent_today"], 0.0);
    assert_eq!(stats["status"], "not_started");
}

#[test]
fn stats_clamps_dates_outside_the_trip() {
    let home = init_trip();
    let stats = stats_json(&home, "2025-08-15");
    assert_eq!(stats["date"], "2025-07-07");

    tripbudget_cmd(&home)
        .args(["stats", "--today", TRIP_START, "--date", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day 1 of 7"))
        .stderr(predicate::str::contains("outside the trip"));
}

#[test]
fn stats_terminal_output() {
    let home = init_trip();
    tripbudget_cmd(&home)
        .args(["stats", "--today", TRIP_START])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample Trip"))
        .stdout(predicate::str::contains("185.00 EUR"))
        .stdout(predicate::str::contains("Accommodation"))
        .stdout(predicate::str::contains("first day of the trip"));
}

#[test]
fn step_moves_within_the_trip() {
    let home = init_trip();
    let out = run_ok_out(
        &home,
        &["step", "-1", "--from", "2025-07-03", "--today", TRIP_START],
    );
    assert!(out.contains("2025-07-03 -> 2025-07-02"));
}

#[test]
fn step_refuses_to_leave_the_trip() {
    let home = init_trip();
    let out = run_ok_out(
        &home,
        &["step", "1", "--from", "2025-07-07", "--today", TRIP_START],
    );
    assert!(out.contains("cannot move"));
    assert!(out.contains("last day of the trip"));
}

#[test]
fn report_timeline_and_summary() {
    let home = init_trip();
    let timeline = run_ok_out(&home, &["report", "timeline", "--today", TRIP_START]);
    assert!(timeline.contains("Timeline: Sample Trip"));
    assert!(timeline.contains("Days over budget: 0"));

    let summary = run_ok_out(&home, &["report", "summary", "--today", TRIP_START]);
    assert!(summary.contains("525.00 EUR"));
    assert!(summary.contains("card"));
}

#[test]
fn export_csv_has_a_row_per_day() {
    let home = init_trip();
    let out = run_ok_out(&home, &["export", "csv", "--today", TRIP_START]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with("date,day,status"));
}

#[test]
fn export_json_to_file() {
    let home = init_trip();
    let path = home.path().join("export.json");
    tripbudget_cmd(&home)
        .args(["export", "json", "--today", TRIP_START, "--output"])
        .arg(&path)
        .assert()
        .success();

    let text = std::fs::read_to_string(&path).expect("export file");
    let value: serde_json::Value = serde_json::from_str(&text).expect("export json");
    assert_eq!(value["days"].as_array().map(|d| d.len()), Some(7));
    assert_eq!(value["summary"]["total_spent"], 525.0);
}

#[test]
fn missing_trip_file_is_reported() {
    let home = tempfile::tempdir().expect("tempdir");
    tripbudget_cmd(&home)
        .args(["stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
