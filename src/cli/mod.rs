//! Command-line parsing for the macro indicator pipeline.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the statistics code.
//!
//! Every run flag can also come from the environment (a `.env` file is loaded
//! before parsing), e.g. `MACRO_SEED=7`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "indicators", version, about = "Monthly macro indicators: validate, clean, describe, forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full pipeline: generate/load -> validate -> clean -> metrics -> forecast -> export.
    Run(RunArgs),
    /// Print the data-quality report only.
    Validate(RunArgs),
    /// Print inflation metrics and the forecast table only.
    Forecast(RunArgs),
}

/// Common options for every subcommand.
#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    /// Random seed for sample generation and forecast draws.
    #[arg(long, env = "MACRO_SEED", default_value_t = crate::data::DEFAULT_SEED)]
    pub seed: u64,

    /// Number of monthly periods to generate.
    #[arg(short = 'n', long, default_value_t = crate::data::DEFAULT_PERIODS)]
    pub periods: usize,

    /// Forecast horizon (months).
    #[arg(long, default_value_t = crate::analysis::DEFAULT_HORIZON)]
    pub horizon: usize,

    /// Load this CSV instead of generating a synthetic sample.
    #[arg(short = 'i', long, env = "MACRO_INPUT", value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// Workbook export path (raw + processed sheets).
    #[arg(long, env = "MACRO_XLSX", default_value = "indicators.xlsx", value_name = "XLSX")]
    pub xlsx: PathBuf,

    /// Skip the workbook export.
    #[arg(long)]
    pub no_xlsx: bool,

    /// Export the raw dataset to CSV.
    #[arg(long, value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// Export the run report (metadata, validation, metrics, forecast) to JSON.
    #[arg(long, value_name = "JSON")]
    pub report: Option<PathBuf>,

    /// Render an ASCII plot in the terminal (enabled by default; re-enables
    /// the plot after an earlier `--no-plot`).
    #[arg(long, overrides_with = "no_plot")]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long, overrides_with = "plot")]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 84)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
