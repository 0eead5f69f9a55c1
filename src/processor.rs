//! The stateful time-series processor.
//!
//! One instance owns one session: the raw dataset, the cleaned dataset derived
//! from it, the metadata of the last load and the last validation report.
//! Instances are independent, so callers that need isolation simply create
//! their own.
//!
//! Control flow is sequential: generate/load -> validate -> clean -> metrics
//! -> forecast -> export. Every operation other than generate/load fails with
//! `AppError::Precondition` until a raw dataset exists. An operation that
//! fails leaves the stored state as it was.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, warn};

use crate::analysis::{forecast_inflation, inflation_metrics};
use crate::data::{NormalSource, SeededNormal, generate_sample};
use crate::domain::{
    ForecastPoint, InflationMetrics, Metadata, NumericColumn, Observation, ValidationReport, ValidationStatus,
};
use crate::error::AppError;
use crate::io::{write_dataset_csv, write_workbook};
use crate::quality::{clean_dataset, validate_dataset};

#[derive(Debug, Clone)]
pub struct TimeSeriesProcessor<S = SeededNormal> {
    sampler: S,
    raw: Option<Vec<Observation>>,
    cleaned: Option<Vec<Observation>>,
    metadata: Metadata,
    validation: Option<ValidationReport>,
}

impl TimeSeriesProcessor<SeededNormal> {
    /// Processor drawing from a `StdRng` seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_sampler(SeededNormal::new(seed))
    }
}

impl Default for TimeSeriesProcessor<SeededNormal> {
    fn default() -> Self {
        Self::with_sampler(SeededNormal::default())
    }
}

impl<S: NormalSource> TimeSeriesProcessor<S> {
    pub fn with_sampler(sampler: S) -> Self {
        Self {
            sampler,
            raw: None,
            cleaned: None,
            metadata: Metadata::default(),
            validation: None,
        }
    }

    /// Replace the raw dataset with a freshly generated synthetic sample.
    pub fn generate_sample(&mut self, periods: usize) -> Result<&[Observation], AppError> {
        let rows = generate_sample(&mut self.sampler, periods)?;
        debug!(periods, "generated synthetic sample");
        Ok(self.replace_raw(rows))
    }

    /// Replace the raw dataset with externally supplied rows.
    ///
    /// Non-finite values are stored as missing.
    pub fn load_dataset(&mut self, mut rows: Vec<Observation>) -> Result<&[Observation], AppError> {
        for obs in &mut rows {
            for column in NumericColumn::ALL {
                if obs.value(column).is_some_and(|v| !v.is_finite()) {
                    obs.set_value(column, None);
                }
            }
        }
        debug!(rows = rows.len(), "loaded external dataset");
        Ok(self.replace_raw(rows))
    }

    fn replace_raw(&mut self, rows: Vec<Observation>) -> &[Observation] {
        self.metadata = Metadata::describe(&rows, Local::now());
        // Derived state belongs to the previous dataset.
        self.cleaned = None;
        self.validation = None;
        self.raw.insert(rows).as_slice()
    }

    /// Validate the raw dataset and store the report.
    pub fn validate(&mut self) -> Result<&ValidationReport, AppError> {
        let raw = self.require_raw()?;
        if raw.is_empty() {
            return Err(AppError::precondition("Raw dataset is empty; nothing to validate."));
        }

        let report = validate_dataset(raw);
        debug!(
            rows = report.total_rows,
            duplicates = report.duplicates,
            missing = report.missing_values,
            "validated raw dataset"
        );
        if report.status == ValidationStatus::NeedsReview {
            warn!(
                duplicates = report.duplicates,
                missing = report.missing_values,
                "raw dataset needs review"
            );
        }

        Ok(&*self.validation.insert(report))
    }

    /// Derive the cleaned dataset from the raw one and store it.
    pub fn clean(&mut self) -> Result<&[Observation], AppError> {
        let raw = self.require_raw()?;
        let cleaned = clean_dataset(raw);
        debug!(raw = raw.len(), cleaned = cleaned.len(), "cleaned raw dataset");

        for column in NumericColumn::ALL {
            if !cleaned.is_empty() && cleaned.iter().all(|o| o.value(column).is_none()) {
                warn!(column = column.name(), "column has no observed values after cleaning");
            }
        }

        Ok(self.cleaned.insert(cleaned).as_slice())
    }

    /// Inflation metrics over the raw dataset.
    pub fn inflation_metrics(&self) -> Result<InflationMetrics, AppError> {
        inflation_metrics(self.require_raw()?)
    }

    /// Forecast monthly inflation `horizon` months ahead from the raw dataset.
    ///
    /// Draws continue the processor's random stream.
    pub fn forecast(&mut self, horizon: usize) -> Result<Vec<ForecastPoint>, AppError> {
        let raw = self
            .raw
            .as_deref()
            .ok_or_else(|| AppError::precondition(NO_DATA))?;
        forecast_inflation(raw, horizon, &mut self.sampler)
    }

    /// Write the raw dataset to CSV. Returns the path written.
    pub fn export_csv(&self, path: &Path) -> Result<PathBuf, AppError> {
        let raw = self.require_export_data()?;
        write_dataset_csv(path, raw)?;
        Ok(path.to_path_buf())
    }

    /// Write the raw (and, if present, cleaned) dataset to an XLSX workbook.
    /// Returns the path written.
    pub fn export_xlsx(&self, path: &Path) -> Result<PathBuf, AppError> {
        let raw = self.require_export_data()?;
        write_workbook(path, raw, self.cleaned.as_deref())?;
        Ok(path.to_path_buf())
    }

    pub fn raw(&self) -> Option<&[Observation]> {
        self.raw.as_deref()
    }

    pub fn cleaned(&self) -> Option<&[Observation]> {
        self.cleaned.as_deref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn validation(&self) -> Option<&ValidationReport> {
        self.validation.as_ref()
    }

    fn require_raw(&self) -> Result<&[Observation], AppError> {
        self.raw.as_deref().ok_or_else(|| AppError::precondition(NO_DATA))
    }

    fn require_export_data(&self) -> Result<&[Observation], AppError> {
        self.raw
            .as_deref()
            .ok_or_else(|| AppError::precondition("No data to export; load or generate a dataset first."))
    }
}

const NO_DATA: &str = "No raw dataset loaded; load or generate a dataset first.";
