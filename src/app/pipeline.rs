//! Shared pipeline logic used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! generate/load -> validate -> clean -> metrics -> forecast -> export
//!
//! The subcommands can then focus on presentation.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::domain::{ForecastPoint, InflationMetrics, RunConfig, RunReport, ValidationReport};
use crate::error::AppError;
use crate::io::{read_dataset_csv, write_report_json};
use crate::processor::TimeSeriesProcessor;

/// All computed outputs of a single `indicators run`.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub processor: TimeSeriesProcessor,
    pub validation: ValidationReport,
    pub metrics: InflationMetrics,
    pub forecast: Vec<ForecastPoint>,
    /// Export files written, in order.
    pub written: Vec<PathBuf>,
}

/// Build a processor holding the configured raw dataset (CSV input or
/// synthetic sample).
pub fn load_processor(config: &RunConfig) -> Result<TimeSeriesProcessor, AppError> {
    let mut processor = TimeSeriesProcessor::new(config.seed);

    match &config.input {
        Some(path) => {
            let ingest = read_dataset_csv(path)?;
            for e in &ingest.row_errors {
                warn!(line = e.line, "skipped CSV row: {}", e.message);
            }
            info!(
                path = %path.display(),
                rows_read = ingest.rows_read,
                rows_used = ingest.rows.len(),
                "loaded dataset"
            );
            processor.load_dataset(ingest.rows)?;
        }
        None => {
            let n = processor.generate_sample(config.periods)?.len();
            info!(periods = n, seed = config.seed, "generated synthetic sample");
        }
    }

    Ok(processor)
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_pipeline(config: &RunConfig) -> Result<RunOutput, AppError> {
    // 1) Generate or load the raw dataset.
    let mut processor = load_processor(config)?;

    // 2) Validate.
    let validation = processor.validate()?.clone();
    info!(status = ?validation.status, "validation complete");

    // 3) Clean.
    let cleaned_rows = processor.clean()?.len();
    info!(rows = cleaned_rows, "cleaning complete");

    // 4) Metrics + forecast.
    let metrics = processor.inflation_metrics()?;
    let forecast = processor.forecast(config.horizon)?;
    info!(horizon = forecast.len(), "forecast complete");

    // 5) Exports.
    let mut written = Vec::new();
    if let Some(path) = &config.export_xlsx {
        written.push(processor.export_xlsx(path)?);
    }
    if let Some(path) = &config.export_csv {
        written.push(processor.export_csv(path)?);
    }
    if let Some(path) = &config.export_report {
        let report = RunReport {
            tool: "indicators".to_string(),
            metadata: processor.metadata().clone(),
            validation: validation.clone(),
            metrics: metrics.clone(),
            forecast: forecast.clone(),
        };
        write_report_json(path, &report)?;
        written.push(path.clone());
    }
    for path in &written {
        info!(path = %path.display(), "export written");
    }

    Ok(RunOutput {
        processor,
        validation,
        metrics,
        forecast,
        written,
    })
}
