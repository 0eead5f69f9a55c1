//! Dataset exports: CSV and XLSX workbook.
//!
//! Both write the dataset column layout (date first, no index column) so the files
//! are easy to consume in spreadsheets or to reload with `read_dataset_csv`.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::domain::{NumericColumn, Observation, column_names};
use crate::error::AppError;

pub const RAW_SHEET: &str = "Raw Data";
pub const PROCESSED_SHEET: &str = "Processed Data";

/// Write a dataset to a UTF-8, comma-delimited CSV with a header row.
///
/// Missing values are written as empty cells.
pub fn write_dataset_csv(path: &Path, rows: &[Observation]) -> Result<(), AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| AppError::io(format!("Failed to create export CSV '{}': {e}", path.display())))?;

    if rows.is_empty() {
        // `serialize` only emits the header alongside the first record.
        writer
            .write_record(column_names())
            .map_err(|e| AppError::io(format!("Failed to write export CSV header: {e}")))?;
    }

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::io(format!("Failed to write export CSV row ({}): {e}", row.date)))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::io(format!("Failed to flush export CSV '{}': {e}", path.display())))?;

    Ok(())
}

/// Write the raw dataset (sheet "Raw Data") and, when present, the cleaned
/// dataset (sheet "Processed Data") to an XLSX workbook.
pub fn write_workbook(path: &Path, raw: &[Observation], processed: Option<&[Observation]>) -> Result<(), AppError> {
    let mut workbook = Workbook::new();

    write_sheet(workbook.add_worksheet(), RAW_SHEET, raw).map_err(sheet_error(RAW_SHEET))?;
    if let Some(rows) = processed {
        write_sheet(workbook.add_worksheet(), PROCESSED_SHEET, rows).map_err(sheet_error(PROCESSED_SHEET))?;
    }

    workbook
        .save(path)
        .map_err(|e| AppError::io(format!("Failed to save workbook '{}': {e}", path.display())))?;

    Ok(())
}

fn write_sheet(sheet: &mut Worksheet, name: &str, rows: &[Observation]) -> Result<(), XlsxError> {
    sheet.set_name(name)?;

    for (col, header) in column_names().into_iter().enumerate() {
        sheet.write_string(0, col as u16, header)?;
    }

    for (i, obs) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, obs.date.to_string())?;
        for (j, column) in NumericColumn::ALL.iter().enumerate() {
            // Missing cells are left empty.
            if let Some(v) = obs.value(*column) {
                sheet.write_number(row, j as u16 + 1, v)?;
            }
        }
    }

    Ok(())
}

fn sheet_error(sheet: &'static str) -> impl Fn(XlsxError) -> AppError {
    move |e| AppError::io(format!("Failed to write sheet '{sheet}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Reader, Xlsx, open_workbook};
    use chrono::NaiveDate;

    fn rows() -> Vec<Observation> {
        let mut out = vec![
            Observation::new(NaiveDate::from_ymd_opt(2018, 1, 31).unwrap(), [0.5, 0.0, 11.0, 85.0, 0.3]),
            Observation::new(NaiveDate::from_ymd_opt(2018, 2, 28).unwrap(), [0.25, 0.5, 12.5, 70.0, -1.75]),
        ];
        out[1].consumer_confidence_index = None;
        out
    }

    #[test]
    fn csv_has_header_and_empty_missing_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_dataset_csv(&path, &rows()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], column_names().join(","));
        assert_eq!(lines[1], "2018-01-31,0.5,0.0,11.0,85.0,0.3");
        assert_eq!(lines[2], "2018-02-28,0.25,0.5,12.5,,-1.75");
    }

    #[test]
    fn empty_dataset_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_dataset_csv(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), column_names().join(","));
    }

    fn open(path: &Path) -> Xlsx<std::io::BufReader<std::fs::File>> {
        open_workbook(path).unwrap()
    }

    #[test]
    fn workbook_has_both_sheets_when_processed_data_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let data = rows();
        write_workbook(&path, &data, Some(&data[..1])).unwrap();

        let mut book = open(&path);
        assert_eq!(book.sheet_names(), vec![RAW_SHEET.to_string(), PROCESSED_SHEET.to_string()]);

        let raw = book.worksheet_range(RAW_SHEET).unwrap();
        assert_eq!(raw.get_size(), (3, 6));
        let header: Vec<String> = raw.rows().next().unwrap().iter().map(|c| c.to_string()).collect();
        assert_eq!(header, column_names());
        assert_eq!(raw.get_value((1, 0)), Some(&Data::String("2018-01-31".to_string())));
        assert_eq!(raw.get_value((2, 1)), Some(&Data::Float(0.25)));
        // Missing confidence value on the second row stays empty.
        assert_eq!(raw.get_value((2, 4)), Some(&Data::Empty));

        let processed = book.worksheet_range(PROCESSED_SHEET).unwrap();
        assert_eq!(processed.get_size(), (2, 6));
    }

    #[test]
    fn workbook_without_processed_data_has_raw_sheet_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw-only.xlsx");
        write_workbook(&path, &rows(), None).unwrap();

        let book = open(&path);
        assert_eq!(book.sheet_names(), vec![RAW_SHEET.to_string()]);
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.csv");
        let err = write_dataset_csv(&path, &rows()).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
