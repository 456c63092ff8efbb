use predicates::str::contains;
use qrattend::models::AttendanceRecord;
use std::fs;

mod common;
use common::{Sandbox, at, sample_register};

#[test]
fn test_export_all_formats() {
    let sb = Sandbox::new();
    sb.seed(sample_register());

    for fmt in ["xlsx", "pdf", "csv", "json"] {
        let out = sb.path(&format!("report.{fmt}"));
        sb.cmd()
            .args(["export", "--format", fmt, "--file", out.to_str().unwrap(), "--force"])
            .assert()
            .success()
            .stdout(contains("export completed"));

        assert!(fs::metadata(&out).unwrap().len() > 0, "{fmt} export is empty");
    }

    let csv = fs::read_to_string(sb.path("report.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("id,code,date,time,egg,banana"));
    assert_eq!(lines.next(), Some("1,A1,2024-05-01,09:00:00,true,false"));
    assert_eq!(csv.lines().count(), 4);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(sb.path("report.json")).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[1]["code"], "B2");
    assert_eq!(json[1]["banana"], true);

    let pdf = fs::read(sb.path("report.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));

    let xlsx = fs::read(sb.path("report.xlsx")).unwrap();
    assert!(xlsx.starts_with(b"PK"));
}

#[test]
fn test_export_default_file_name() {
    let sb = Sandbox::new();
    sb.seed(sample_register());

    sb.cmd().args(["export"]).assert().success();

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    assert!(sb.path(&format!("Attendance_Report_{today}.xlsx")).exists());
}

#[test]
fn test_export_empty_register() {
    let sb = Sandbox::new();
    let out = sb.path("empty.csv");

    sb.cmd()
        .args(["export", "--format", "csv", "--file", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("No data to export."));

    assert!(!out.exists());
}

#[test]
fn test_export_keeps_existing_file_unless_confirmed() {
    let sb = Sandbox::new();
    sb.seed(sample_register());
    let out = sb.path("keep.csv");
    fs::write(&out, "precious").unwrap();

    sb.cmd()
        .args(["export", "--format", "csv", "--file", out.to_str().unwrap()])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "precious");

    sb.cmd()
        .args(["export", "--format", "csv", "--file", out.to_str().unwrap()])
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("id,code"));
}

#[test]
fn test_backup_and_restore() {
    let sb = Sandbox::new();
    sb.seed(sample_register());
    let backup = sb.path("backup.json");

    sb.cmd()
        .args(["backup", "--file", backup.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Backup of 3 record(s)"));

    sb.cmd().args(["clear", "--yes"]).assert().success();
    assert!(sb.records().is_empty());

    sb.cmd()
        .args(["restore", "--file", backup.to_str().unwrap(), "--yes"])
        .assert()
        .success()
        .stdout(contains("3 record(s) restored"));

    assert_eq!(sb.records(), sample_register());
}

#[test]
fn test_compressed_backup_restores() {
    let sb = Sandbox::new();
    sb.seed(sample_register());
    let backup = sb.path("backup.json");

    sb.cmd()
        .args(["backup", "--file", backup.to_str().unwrap(), "--compress"])
        .assert()
        .success();

    let gz = sb.path("backup.json.gz");
    assert!(gz.exists());
    assert_eq!(&fs::read(&gz).unwrap()[..2], &[0x1f, 0x8b]);

    sb.seed(Vec::new());
    sb.cmd()
        .args(["restore", "--file", gz.to_str().unwrap(), "--yes"])
        .assert()
        .success();

    assert_eq!(sb.records().len(), 3);
}

#[test]
fn test_restore_rejects_invalid_backup() {
    let sb = Sandbox::new();
    sb.seed(sample_register());
    let bad = sb.path("bad.json");
    fs::write(&bad, "not a backup").unwrap();

    sb.cmd()
        .args(["restore", "--file", bad.to_str().unwrap(), "--yes"])
        .assert()
        .failure();

    assert_eq!(sb.records().len(), 3);
}

#[test]
fn test_pdf_export_declares_win_ansi_font() {
    let sb = Sandbox::new();
    sb.seed(vec![AttendanceRecord::new(1, "José", at(2024, 5, 1, 9, 0), true, false)]);
    let out = sb.path("accents.pdf");

    sb.cmd()
        .args(["export", "--format", "pdf", "--file", out.to_str().unwrap()])
        .assert()
        .success();

    let pdf = String::from_utf8_lossy(&fs::read(&out).unwrap()).into_owned();
    assert!(pdf.contains("/Encoding"));
    assert!(pdf.contains("WinAnsiEncoding"));
}
