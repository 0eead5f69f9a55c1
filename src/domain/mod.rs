//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - monthly observations and their numeric columns (`Observation`, `NumericColumn`)
//! - dataset facts and quality results (`Metadata`, `ValidationReport`)
//! - analysis outputs (`InflationMetrics`, `ForecastPoint`)
//! - the resolved run configuration (`RunConfig`)

pub mod types;

pub use types::*;
