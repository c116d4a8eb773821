//! Export of the student table to CSV or Excel.
//!
//! The destination file's extension selects the serialization format:
//! `.csv` produces a comma-delimited file, anything else an Excel workbook
//! with a single sheet. Both carry a header row with the column names in
//! declared order followed by one row per record, in view order. An empty
//! table is reported as an explicit outcome and writes no file at all.

use crate::db::students::Students;
use crate::libs::config::Config;
use crate::libs::error::AppError;
use crate::libs::student::{Student, COLUMNS};
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values, RFC-4180 quoting where needed.
    Csv,
    /// Excel workbook, single sheet with a bold header row.
    Xlsx,
}

impl ExportFormat {
    /// Selects the format from a destination path. Only a `.csv` extension
    /// yields CSV; everything else (including no extension) is Excel.
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Xlsx,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Result of an export run.
#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// File written with this many data rows.
    Written(usize),
    /// Zero records in the table; nothing was written.
    Empty,
}

/// Export handler: destination path plus the format derived from it.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter for the given destination, or a timestamped
    /// default (`roster_export_<YYYYMMDD_HHMMSS>`) in the configured export
    /// directory when none is given.
    pub fn new(output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(default_output_path);
        let format = ExportFormat::from_path(&output_path);

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Reads the full table and serializes it to the destination.
    ///
    /// A write failure surfaces as `AppError::Export` and leaves the store
    /// untouched.
    pub fn export(&self, store: &mut Students) -> Result<ExportOutcome, AppError> {
        let students = store.fetch_all()?;
        if students.is_empty() {
            return Ok(ExportOutcome::Empty);
        }

        match self.format {
            ExportFormat::Csv => self.write_csv(&students)?,
            ExportFormat::Xlsx => self.write_xlsx(&students)?,
        }

        Ok(ExportOutcome::Written(students.len()))
    }

    fn write_csv(&self, students: &[Student]) -> Result<(), AppError> {
        let mut writer = csv::Writer::from_path(&self.output_path).map_err(export_err)?;

        writer.write_record(COLUMNS).map_err(export_err)?;
        for student in students {
            writer.write_record(student.columns()).map_err(export_err)?;
        }
        writer.flush().map_err(export_err)?;

        Ok(())
    }

    fn write_xlsx(&self, students: &[Student]) -> Result<(), AppError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let bold = Format::new().set_bold();
        for (col, header) in COLUMNS.iter().enumerate() {
            worksheet.write_with_format(0, col as u16, *header, &bold).map_err(export_err)?;
        }

        for (row, student) in students.iter().enumerate() {
            for (col, value) in student.columns().iter().enumerate() {
                worksheet.write(row as u32 + 1, col as u16, value.as_str()).map_err(export_err)?;
            }
        }

        workbook.save(&self.output_path).map_err(export_err)?;

        Ok(())
    }
}

fn export_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

/// Default destination: configured export directory (or the current
/// directory) with a timestamped name in the configured default format.
fn default_output_path() -> PathBuf {
    let export = Config::read().unwrap_or_default().export.unwrap_or_default();
    let file_name = format!(
        "roster_export_{}.{}",
        Local::now().format("%Y%m%d_%H%M%S"),
        export.default_format.extension()
    );

    export.output_dir.join(file_name)
}
