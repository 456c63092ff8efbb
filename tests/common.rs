#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use qrattend::core::RecordStore;
use qrattend::db::{DbPool, SqliteSlot};
use qrattend::models::AttendanceRecord;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn qra() -> Command {
    cargo_bin_cmd!("qrattend")
}

/// Isolated environment: its own HOME (config dir) and database file.
pub struct Sandbox {
    dir: TempDir,
    pub db: String,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("qrattend.sqlite").to_string_lossy().to_string();
        Self { dir, db }
    }

    /// Command bound to this sandbox's HOME and database.
    pub fn cmd(&self) -> Command {
        let mut cmd = qra();
        cmd.env("HOME", self.dir.path())
            .env("APPDATA", self.dir.path())
            .env_remove("RUST_LOG")
            .current_dir(self.dir.path())
            .args(["--db", &self.db]);
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_config(&self, yaml: &str) {
        let conf_dir = self.dir.path().join(".qrattend");
        fs::create_dir_all(&conf_dir).expect("config dir");
        fs::write(conf_dir.join("qrattend.conf"), yaml).expect("write config");
    }

    /// Replace the register with `records` through the library API.
    pub fn seed(&self, records: Vec<AttendanceRecord>) {
        let pool = DbPool::new(&self.db).expect("open db");
        let mut store = RecordStore::load(SqliteSlot::new(pool));
        store.replace_all(records);
    }

    pub fn records(&self) -> Vec<AttendanceRecord> {
        let pool = DbPool::new(&self.db).expect("open db");
        RecordStore::load(SqliteSlot::new(pool)).records().to_vec()
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// A1 and B2 in May 2024, a1x in June; ids follow insertion order.
pub fn sample_register() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord::new(1, "A1", at(2024, 5, 1, 9, 0), true, false),
        AttendanceRecord::new(2, "B2", at(2024, 5, 2, 9, 0), false, true),
        AttendanceRecord::new(3, "a1x", at(2024, 6, 1, 9, 0), true, false),
    ]
}
