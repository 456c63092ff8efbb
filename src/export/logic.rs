// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::project_rows;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::AttendanceRecord;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::path::PathBuf;

pub const REPORT_TITLE: &str = "QR Attendance Report";

/// Entry point for register exports.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole register (no list filters) and return the written path.
    ///
    /// - `file`: output path; defaults to `Attendance_Report_<today>.<ext>` in
    ///   the current directory
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        records: &[AttendanceRecord],
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
        today: NaiveDate,
    ) -> AppResult<PathBuf> {
        if records.is_empty() {
            return Err(AppError::NothingToExport);
        }

        let path = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(default_file_name(format, today)),
        };

        ensure_writable(&path, force)?;

        let rows = project_rows(records);

        match format {
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
            ExportFormat::Pdf => export_pdf(&rows, &path, REPORT_TITLE)?,
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(path)
    }
}

pub fn default_file_name(format: ExportFormat, today: NaiveDate) -> String {
    format!("Attendance_Report_{}.{}", today.format("%Y-%m-%d"), format.as_str())
}
