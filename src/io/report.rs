//! Read/write run report JSON files.
//!
//! The run report is the "portable" summary of a pipeline run:
//! - dataset metadata (source, load time, period bounds)
//! - validation report
//! - inflation metrics and the forecast table
//!
//! The schema is defined by `domain::RunReport`.

use std::fs::File;
use std::path::Path;

use crate::domain::RunReport;
use crate::error::AppError;

/// Write a run report JSON file.
pub fn write_report_json(path: &Path, report: &RunReport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create report JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::io(format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Read a run report JSON file.
pub fn read_report_json(path: &Path) -> Result<RunReport, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open report JSON '{}': {e}", path.display())))?;
    let report: RunReport =
        serde_json::from_reader(file).map_err(|e| AppError::io(format!("Invalid report JSON: {e}")))?;
    Ok(report)
}
