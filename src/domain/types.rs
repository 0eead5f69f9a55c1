//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory by the processor
//! - exported to CSV/XLSX/JSON
//! - reloaded later for comparisons

use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Data source credited in the metadata of every loaded dataset.
pub const SOURCE: &str = "IBGE, Banco Central, FGV";

/// Sampling frequency of every dataset this crate handles.
pub const FREQUENCY: &str = "Monthly";

/// Column name of the observation date (first column in every export).
pub const DATE_COLUMN: &str = "date";

/// One monthly observation.
///
/// Numeric fields are optional: `None` is a missing value (an empty CSV cell).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub inflation_monthly_pct: Option<f64>,
    pub inflation_12m_cum_pct: Option<f64>,
    pub unemployment_rate_pct: Option<f64>,
    pub consumer_confidence_index: Option<f64>,
    pub industrial_production_change_pct: Option<f64>,
}

impl Observation {
    /// Build a fully populated observation.
    pub fn new(date: NaiveDate, values: [f64; 5]) -> Self {
        let [inflation, cumulative, unemployment, confidence, production] = values;
        Self {
            date,
            inflation_monthly_pct: Some(inflation),
            inflation_12m_cum_pct: Some(cumulative),
            unemployment_rate_pct: Some(unemployment),
            consumer_confidence_index: Some(confidence),
            industrial_production_change_pct: Some(production),
        }
    }

    pub fn value(&self, column: NumericColumn) -> Option<f64> {
        match column {
            NumericColumn::InflationMonthlyPct => self.inflation_monthly_pct,
            NumericColumn::Inflation12mCumPct => self.inflation_12m_cum_pct,
            NumericColumn::UnemploymentRatePct => self.unemployment_rate_pct,
            NumericColumn::ConsumerConfidenceIndex => self.consumer_confidence_index,
            NumericColumn::IndustrialProductionChangePct => self.industrial_production_change_pct,
        }
    }

    pub fn set_value(&mut self, column: NumericColumn, value: Option<f64>) {
        let slot = match column {
            NumericColumn::InflationMonthlyPct => &mut self.inflation_monthly_pct,
            NumericColumn::Inflation12mCumPct => &mut self.inflation_12m_cum_pct,
            NumericColumn::UnemploymentRatePct => &mut self.unemployment_rate_pct,
            NumericColumn::ConsumerConfidenceIndex => &mut self.consumer_confidence_index,
            NumericColumn::IndustrialProductionChangePct => &mut self.industrial_production_change_pct,
        };
        *slot = value;
    }

    /// Number of missing cells in this row (the date is never missing).
    pub fn missing_count(&self) -> usize {
        NumericColumn::ALL
            .iter()
            .filter(|&&c| self.value(c).is_none())
            .count()
    }
}

/// The numeric columns of an observation, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericColumn {
    InflationMonthlyPct,
    #[serde(rename = "inflation_12m_cum_pct")]
    Inflation12mCumPct,
    UnemploymentRatePct,
    ConsumerConfidenceIndex,
    IndustrialProductionChangePct,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 5] = [
        NumericColumn::InflationMonthlyPct,
        NumericColumn::Inflation12mCumPct,
        NumericColumn::UnemploymentRatePct,
        NumericColumn::ConsumerConfidenceIndex,
        NumericColumn::IndustrialProductionChangePct,
    ];

    /// Column header used in CSV/XLSX files.
    pub fn name(self) -> &'static str {
        match self {
            NumericColumn::InflationMonthlyPct => "inflation_monthly_pct",
            NumericColumn::Inflation12mCumPct => "inflation_12m_cum_pct",
            NumericColumn::UnemploymentRatePct => "unemployment_rate_pct",
            NumericColumn::ConsumerConfidenceIndex => "consumer_confidence_index",
            NumericColumn::IndustrialProductionChangePct => "industrial_production_change_pct",
        }
    }
}

/// Full header row (date first, then every numeric column).
pub fn column_names() -> Vec<&'static str> {
    std::iter::once(DATE_COLUMN)
        .chain(NumericColumn::ALL.iter().map(|c| c.name()))
        .collect()
}

/// Derived facts about the loaded raw dataset. Recomputed on every load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub source: String,
    pub loaded_at: Option<DateTime<Local>>,
    pub observation_count: usize,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    pub frequency: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            source: SOURCE.to_string(),
            loaded_at: None,
            observation_count: 0,
            period_start: None,
            period_end: None,
            frequency: FREQUENCY.to_string(),
        }
    }
}

impl Metadata {
    pub fn describe(rows: &[Observation], loaded_at: DateTime<Local>) -> Self {
        Self {
            loaded_at: Some(loaded_at),
            observation_count: rows.len(),
            period_start: rows.first().map(|o| o.date.to_string()),
            period_end: rows.last().map(|o| o.date.to_string()),
            ..Self::default()
        }
    }
}

/// Overall data-quality verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationStatus {
    /// No duplicate rows and no missing values.
    Valid,
    NeedsReview,
}

impl ValidationStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            ValidationStatus::Valid => "Valid",
            ValidationStatus::NeedsReview => "Needs review",
        }
    }
}

/// IQR outlier summary for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnOutliers {
    pub column: NumericColumn,
    pub count: usize,
    /// Share of all rows, in percent, rounded to 2 decimals.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_rows: usize,
    /// Exact full-row duplicates (every column equal to an earlier row).
    pub duplicates: usize,
    /// Missing cells summed across all columns.
    pub missing_values: usize,
    pub status: ValidationStatus,
    pub outliers: Vec<ColumnOutliers>,
}

/// Descriptive metrics of the monthly inflation column.
///
/// Monthly figures are rounded to 3 decimals, cumulative/variation to 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationMetrics {
    pub current_monthly: f64,
    pub previous_monthly: f64,
    pub cumulative_12m: f64,
    /// `(current - previous) / previous * 100`, or 0 when `previous <= 0`.
    pub monthly_change_pct: f64,
    pub historical_mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// One forecast period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// 1-based months ahead of the last observation.
    pub horizon: usize,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

/// A saved run report (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub tool: String,
    pub metadata: Metadata,
    pub validation: ValidationReport,
    pub metrics: InflationMetrics,
    pub forecast: Vec<ForecastPoint>,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults and `.env`).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub seed: u64,
    pub periods: usize,
    pub horizon: usize,

    /// Load this CSV instead of generating a synthetic sample.
    pub input: Option<PathBuf>,

    pub export_xlsx: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
    pub export_report: Option<PathBuf>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: crate::data::DEFAULT_SEED,
            periods: crate::data::DEFAULT_PERIODS,
            horizon: crate::analysis::DEFAULT_HORIZON,
            input: None,
            export_xlsx: Some(PathBuf::from("indicators.xlsx")),
            export_csv: None,
            export_report: None,
            plot: true,
            plot_width: 84,
            plot_height: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_match_export_header() {
        assert_eq!(
            column_names(),
            vec![
                "date",
                "inflation_monthly_pct",
                "inflation_12m_cum_pct",
                "unemployment_rate_pct",
                "consumer_confidence_index",
                "industrial_production_change_pct",
            ]
        );
    }

    #[test]
    fn serde_column_names_match_headers() {
        for column in NumericColumn::ALL {
            let json = serde_json::to_string(&column).unwrap();
            assert_eq!(json, format!("\"{}\"", column.name()));
        }
    }

    #[test]
    fn set_value_round_trips_every_column() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
        let mut obs = Observation::new(date, [0.1, 0.2, 10.0, 80.0, 1.5]);
        assert_eq!(obs.missing_count(), 0);
        for column in NumericColumn::ALL {
            obs.set_value(column, None);
            assert_eq!(obs.value(column), None);
        }
        assert_eq!(obs.missing_count(), 5);
    }

    #[test]
    fn metadata_describes_period_bounds() {
        let first = NaiveDate::from_ymd_opt(2018, 1, 31).unwrap();
        let last = NaiveDate::from_ymd_opt(2018, 2, 28).unwrap();
        let rows = vec![
            Observation::new(first, [0.5; 5]),
            Observation::new(last, [0.5; 5]),
        ];
        let meta = Metadata::describe(&rows, Local::now());
        assert_eq!(meta.observation_count, 2);
        assert_eq!(meta.period_start.as_deref(), Some("2018-01-31"));
        assert_eq!(meta.period_end.as_deref(), Some("2018-02-28"));
        assert_eq!(meta.frequency, "Monthly");
        assert_eq!(meta.source, SOURCE);
    }
}
