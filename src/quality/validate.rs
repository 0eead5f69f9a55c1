//! Data-quality validation.
//!
//! The report is a pure function of the rows: running it twice on the same
//! dataset yields identical reports.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::{ColumnOutliers, NumericColumn, Observation, ValidationReport, ValidationStatus};
use crate::math::{quantile, round_to};

/// Tukey fence multiplier.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Outlier fences and count for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierStats {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    /// `count / total * 100`, rounded to 2 decimals.
    pub percentage: f64,
}

pub fn validate_dataset(rows: &[Observation]) -> ValidationReport {
    let total_rows = rows.len();
    let duplicates = count_duplicate_rows(rows);
    let missing_values = count_missing(rows);

    let outliers = NumericColumn::ALL
        .iter()
        .map(|&column| {
            let values: Vec<Option<f64>> = rows.iter().map(|o| o.value(column)).collect();
            let stats = iqr_outliers(&values, total_rows);
            ColumnOutliers {
                column,
                count: stats.count,
                percentage: stats.percentage,
            }
        })
        .collect();

    let status = if duplicates == 0 && missing_values == 0 {
        ValidationStatus::Valid
    } else {
        ValidationStatus::NeedsReview
    };

    ValidationReport {
        total_rows,
        duplicates,
        missing_values,
        status,
        outliers,
    }
}

/// Rows identical in every column (date included) to an earlier row.
///
/// Missing cells compare equal to each other.
pub fn count_duplicate_rows(rows: &[Observation]) -> usize {
    let mut seen: HashSet<(NaiveDate, [Option<u64>; 5])> = HashSet::with_capacity(rows.len());
    rows.iter().filter(|o| !seen.insert(row_key(o))).count()
}

fn row_key(obs: &Observation) -> (NaiveDate, [Option<u64>; 5]) {
    let mut cells = [None; 5];
    for (slot, column) in cells.iter_mut().zip(NumericColumn::ALL) {
        // Fold -0.0 into 0.0 so the two compare equal, like the values do.
        *slot = obs.value(column).map(|v| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() });
    }
    (obs.date, cells)
}

/// Missing cells summed across all columns.
pub fn count_missing(rows: &[Observation]) -> usize {
    rows.iter().map(Observation::missing_count).sum()
}

/// IQR outlier detection over the observed values of one column.
///
/// Quartiles use linear interpolation over non-missing values; a value is an
/// outlier when strictly outside `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`. The
/// percentage is relative to `total` rows (missing cells included). A column
/// with no observed values has NaN fences and zero outliers.
pub fn iqr_outliers(values: &[Option<f64>], total: usize) -> OutlierStats {
    let observed: Vec<f64> = values.iter().flatten().copied().collect();
    let q1 = quantile(&observed, 0.25);
    let q3 = quantile(&observed, 0.75);
    let iqr = q3 - q1;
    let lower = q1 - IQR_MULTIPLIER * iqr;
    let upper = q3 + IQR_MULTIPLIER * iqr;

    let count = observed.iter().filter(|&&v| v < lower || v > upper).count();
    let percentage = if total == 0 {
        0.0
    } else {
        round_to(count as f64 / total as f64 * 100.0, 2)
    };

    OutlierStats {
        lower,
        upper,
        count,
        percentage,
    }
}
