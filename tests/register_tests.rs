use chrono::Local;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};
use qrattend::models::AttendanceRecord;

mod common;
use common::{Sandbox, at, sample_register};

fn stdout_of(sb: &Sandbox, args: &[&str]) -> String {
    let out = sb.cmd().args(args).output().expect("run qrattend");
    assert!(out.status.success(), "qrattend {:?} failed", args);
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn test_list_search_is_case_insensitive() {
    let sb = Sandbox::new();
    sb.seed(sample_register());

    sb.cmd()
        .args(["list", "--search", "a1"])
        .assert()
        .success()
        .stdout(contains("A1").and(contains("a1x")).and(contains("B2").not()));
}

#[test]
fn test_list_period_and_explicit_bounds() {
    let sb = Sandbox::new();
    sb.seed(sample_register());

    sb.cmd()
        .args(["list", "--period", "2024-05"])
        .assert()
        .success()
        .stdout(contains("A1").and(contains("B2")).and(contains("a1x").not()));

    sb.cmd()
        .args(["list", "--from", "2024-05-02", "--to", "2024-05-31"])
        .assert()
        .success()
        .stdout(contains("B2").and(contains("A1").not()));

    sb.cmd()
        .args(["list", "--from", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("a1x").and(contains("B2").not()));
}

#[test]
fn test_list_is_newest_first() {
    let sb = Sandbox::new();
    sb.seed(sample_register());

    let out = stdout_of(&sb, &["list"]);
    let a1x = out.find("a1x").unwrap();
    let b2 = out.find("B2").unwrap();
    let a1 = out.find("A1 ").unwrap();
    assert!(a1x < b2 && b2 < a1, "unexpected order:\n{out}");
    assert!(out.contains("3 of 3 record(s)"));
}

#[test]
fn test_list_rejects_bad_period() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["list", "--period", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));

    sb.cmd()
        .args(["list", "--from", "01/05/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_list_empty_register() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No attendance records found"));
}

#[test]
fn test_stats_counts_items_and_today() {
    let sb = Sandbox::new();
    let now = Local::now();
    let mut register = sample_register();
    register.push(AttendanceRecord::new(4, "TODAY", now, false, true));
    register.push(AttendanceRecord::new(5, "BOTH", at(2024, 6, 2, 9, 0), true, true));
    sb.seed(register);

    sb.cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(is_match(r"Total Eggs\S*\s+3").unwrap())
        .stdout(is_match(r"Total Bananas\S*\s+3").unwrap())
        .stdout(is_match(r"Total Attendance\S*\s+5").unwrap())
        .stdout(is_match(r"Today's Attendance\S*\s+1").unwrap());
}

#[test]
fn test_edit_flags() {
    let sb = Sandbox::new();
    sb.seed(sample_register());

    sb.cmd()
        .args(["edit", "1", "--banana", "true"])
        .assert()
        .success()
        .stdout(contains("Record updated successfully! (id 1)"));

    let rec = sb.records().into_iter().find(|r| r.id == 1).unwrap();
    assert!(rec.egg && rec.banana);
    assert_eq!(rec.code, "A1");
    assert_eq!(rec.created_at, at(2024, 5, 1, 9, 0));

    sb.cmd()
        .args(["edit", "1", "--egg", "true"])
        .assert()
        .success()
        .stdout(contains("unchanged"));

    sb.cmd()
        .args(["edit", "999", "--egg", "false"])
        .assert()
        .failure()
        .stderr(contains("No record found with id 999"));
}

#[test]
fn test_del_asks_for_confirmation() {
    let sb = Sandbox::new();
    sb.seed(sample_register());

    sb.cmd()
        .args(["del", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));
    assert_eq!(sb.records().len(), 3);

    sb.cmd()
        .args(["del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Record deleted. (id 2, B2)"));

    let ids: Vec<i64> = sb.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);

    sb.cmd()
        .args(["del", "2", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No record found with id 2"));
}

#[test]
fn test_clear_register() {
    let sb = Sandbox::new();
    sb.seed(sample_register());

    sb.cmd()
        .args(["clear"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("All data has been cleared. 3 record(s) removed."));

    assert!(sb.records().is_empty());

    sb.cmd()
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("already empty"));
}

#[test]
fn test_log_records_operations() {
    let sb = Sandbox::new();

    sb.cmd().args(["--test", "init"]).assert().success();
    sb.cmd()
        .args(["scan", "EMP-001", "--item", "egg"])
        .assert()
        .success();

    sb.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("EMP-001"));
}

#[test]
fn test_config_print_shows_defaults() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("saved_reset_secs: 2"))
        .stdout(contains("preferred_camera: back"));
}

#[test]
fn test_broken_config_is_reported() {
    let sb = Sandbox::new();
    sb.write_config("database: [unterminated\n");

    sb.cmd()
        .arg("stats")
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
