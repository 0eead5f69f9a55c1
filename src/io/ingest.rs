//! CSV ingest of an externally supplied dataset.
//!
//! The expected header is the export header (`date` plus the five numeric
//! columns). Design goals:
//! - **Strict schema** for the header (clear errors + exit code 2)
//! - **Row-level validation** (skip rows with a bad date, but report what happened)
//! - **Lenient cells**: empty or non-numeric numeric cells are missing values,
//!   which is exactly what the validator and cleaner are there to handle

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::{DATE_COLUMN, NumericColumn, Observation};
use crate::error::AppError;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: parsed rows + row errors.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub rows: Vec<Observation>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Read a dataset CSV from disk.
pub fn read_dataset_csv(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_dataset(file)
}

/// Read a dataset CSV from any reader.
pub fn read_dataset<R: Read>(reader: R) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::invalid_argument(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: records start after the header line, and lines are 1-based.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok(obs) => rows.push(obs),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    Ok(IngestedData {
        rows,
        row_errors,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (normalize_header_name(h), i))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    let missing: Vec<&str> = std::iter::once(DATE_COLUMN)
        .chain(NumericColumn::ALL.iter().map(|c| c.name()))
        .filter(|name| !header_map.contains_key(*name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::invalid_argument(format!(
            "CSV is missing required column(s): {}",
            missing.join(", ")
        )))
    }
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<Observation, String> {
    let date_raw = get_optional(record, header_map, DATE_COLUMN)
        .ok_or_else(|| format!("Missing required value: `{DATE_COLUMN}`"))?;
    let date = parse_date(date_raw)?;

    let mut obs = Observation {
        date,
        inflation_monthly_pct: None,
        inflation_12m_cum_pct: None,
        unemployment_rate_pct: None,
        consumer_confidence_index: None,
        industrial_production_change_pct: None,
    };
    for column in NumericColumn::ALL {
        obs.set_value(column, parse_opt_f64(get_optional(record, header_map, column.name())));
    }
    Ok(obs)
}

fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    // Exports write ISO dates; hand-edited spreadsheets often use day-first.
    const FMTS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];
    // Timestamps such as `2018-01-31 00:00:00` keep only their date part.
    let s = s.split_whitespace().next().unwrap_or(s);
    for fmt in FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    Err(format!(
        "Invalid date '{s}'. Expected one of: YYYY-MM-DD, DD/MM/YYYY, YYYY/MM/DD."
    ))
}

fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    let s = s?;
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}
