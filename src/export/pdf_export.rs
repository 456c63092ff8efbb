// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{report_headers, report_table};
use crate::export::pdf::PdfManager;
use crate::export::{RecordRow, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Write the register as a paginated PDF table.
pub(crate) fn export_pdf(rows: &[RecordRow], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = report_headers();
    let data_vec = report_table(rows);

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
