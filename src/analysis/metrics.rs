//! Descriptive metrics of monthly inflation.

use crate::domain::{InflationMetrics, NumericColumn, Observation};
use crate::error::AppError;
use crate::math::{mean, round_to, sample_std};

/// Compute metrics over the full history.
///
/// Needs at least two rows, and the monthly value of the last two rows plus
/// the cumulative value of the last row must be present. History statistics
/// skip missing cells.
pub fn inflation_metrics(rows: &[Observation]) -> Result<InflationMetrics, AppError> {
    let [.., previous_row, last_row] = rows else {
        return Err(AppError::data_shape(format!(
            "Inflation metrics need at least 2 observations (have {}).",
            rows.len()
        )));
    };

    let current = required(last_row, NumericColumn::InflationMonthlyPct)?;
    let previous = required(previous_row, NumericColumn::InflationMonthlyPct)?;
    let cumulative = required(last_row, NumericColumn::Inflation12mCumPct)?;

    let history: Vec<f64> = rows.iter().filter_map(|o| o.inflation_monthly_pct).collect();
    let min = history.iter().copied().fold(f64::INFINITY, f64::min);
    let max = history.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(InflationMetrics {
        current_monthly: round_to(current, 3),
        previous_monthly: round_to(previous, 3),
        cumulative_12m: round_to(cumulative, 2),
        monthly_change_pct: round_to(percent_change(previous, current), 2),
        historical_mean: round_to(mean(&history), 3),
        std_dev: round_to(sample_std(&history), 3),
        min: round_to(min, 3),
        max: round_to(max, 3),
    })
}

/// `(current - previous) / previous * 100`, defined as 0 when `previous <= 0`.
pub fn percent_change(previous: f64, current: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        0.0
    }
}

fn required(obs: &Observation, column: NumericColumn) -> Result<f64, AppError> {
    obs.value(column).ok_or_else(|| {
        AppError::data_shape(format!(
            "Missing `{}` on {}; clean the dataset before computing metrics.",
            column.name(),
            obs.date
        ))
    })
}
