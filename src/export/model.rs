// src/export/model.rs

use crate::models::AttendanceRecord;
use serde::Serialize;

/// Flat row handed to the file writers: one per record, primitive fields only.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordRow {
    pub id: i64,
    pub code: String,
    pub date: String,
    pub time: String,
    pub egg: bool,
    pub banana: bool,
}

impl From<&AttendanceRecord> for RecordRow {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            id: r.id,
            code: r.code.clone(),
            date: r.date_str(),
            time: r.time_str(),
            egg: r.egg,
            banana: r.banana,
        }
    }
}

/// Every record in register order; exports never apply the list filters.
pub fn project_rows(records: &[AttendanceRecord]) -> Vec<RecordRow> {
    records.iter().map(RecordRow::from).collect()
}

fn yes_no(v: bool) -> String {
    if v { "Yes" } else { "No" }.to_string()
}

/// XLSX sheet header
pub(crate) fn sheet_headers() -> Vec<&'static str> {
    vec!["ID", "QR Code", "Date", "Time", "Egg", "Banana"]
}

pub(crate) fn sheet_row(r: &RecordRow) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.code.clone(),
        r.date.clone(),
        r.time.clone(),
        yes_no(r.egg),
        yes_no(r.banana),
    ]
}

/// PDF table header
pub(crate) fn report_headers() -> Vec<&'static str> {
    vec!["QR ID", "Date", "Time", "Egg", "Banana"]
}

/// Rows for the PDF table: only the item actually picked is marked.
pub(crate) fn report_table(rows: &[RecordRow]) -> Vec<Vec<String>> {
    let mark = |v: bool| if v { "Yes".to_string() } else { String::new() };
    rows.iter()
        .map(|r| vec![r.code.clone(), r.date.clone(), r.time.clone(), mark(r.egg), mark(r.banana)])
        .collect()
}
