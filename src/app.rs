//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and installs logging
//! - parses CLI arguments
//! - runs the processing pipeline
//! - prints reports/plots
//! - writes exports

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::{Command, RunArgs};
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `indicators` binary.
pub fn run() -> Result<(), AppError> {
    // Optional: a missing `.env` is not an error.
    dotenvy::dotenv().ok();
    init_logging();

    // `indicators` and `indicators --seed 7` behave like `indicators run ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Run(args) => handle_run(&args),
        Command::Validate(args) => handle_validate(&args),
        Command::Forecast(args) => handle_forecast(&args),
    }
}

fn init_logging() {
    // Logs go to stderr so stdout stays clean for reports.
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "macro_indicators=info,indicators=info".into()),
        )
        .try_init();
}

fn handle_run(args: &RunArgs) -> Result<(), AppError> {
    let config = run_config_from_args(args);
    let run = pipeline::run_pipeline(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(run.processor.metadata(), &run.validation, &run.metrics)
    );
    println!("{}", crate::report::format_forecast(&run.forecast));

    if config.plot {
        if let Some(raw) = run.processor.raw() {
            let plot = crate::plot::render_inflation_plot(raw, &run.forecast, config.plot_width, config.plot_height);
            println!("{plot}");
        }
    }

    for path in &run.written {
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn handle_validate(args: &RunArgs) -> Result<(), AppError> {
    let config = run_config_from_args(args);
    let mut processor = pipeline::load_processor(&config)?;
    let report = processor.validate()?.clone();

    println!("{}", crate::report::format_metadata(processor.metadata()));
    println!("{}", crate::report::format_validation(&report));
    Ok(())
}

fn handle_forecast(args: &RunArgs) -> Result<(), AppError> {
    let config = run_config_from_args(args);
    let mut processor = pipeline::load_processor(&config)?;
    let metrics = processor.inflation_metrics()?;
    let forecast = processor.forecast(config.horizon)?;
    info!(horizon = config.horizon, "forecast computed");

    println!("{}", crate::report::format_metrics(&metrics));
    println!("{}", crate::report::format_forecast(&forecast));

    if config.plot {
        if let Some(raw) = processor.raw() {
            let plot = crate::plot::render_inflation_plot(raw, &forecast, config.plot_width, config.plot_height);
            println!("{plot}");
        }
    }
    Ok(())
}

pub fn run_config_from_args(args: &RunArgs) -> RunConfig {
    RunConfig {
        seed: args.seed,
        periods: args.periods,
        horizon: args.horizon,
        input: args.input.clone(),
        export_xlsx: (!args.no_xlsx).then(|| args.xlsx.clone()),
        export_csv: args.csv.clone(),
        export_report: args.report.clone(),
        // Plotting is on unless `--no-plot` was the last plot flag given.
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
    }
}

/// Rewrite argv so `indicators` defaults to `indicators run`.
///
/// Rules:
/// - `indicators`                      -> `indicators run`
/// - `indicators --seed 7 ...`         -> `indicators run --seed 7 ...`
/// - `indicators --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("run".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "run" | "validate" | "forecast");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "run flags".
    if arg1.starts_with('-') {
        argv.insert(1, "run".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs_pipeline() {
        assert_eq!(rewrite_args(args(&["indicators"])), args(&["indicators", "run"]));
        assert_eq!(
            rewrite_args(args(&["indicators", "--seed", "7"])),
            args(&["indicators", "run", "--seed", "7"])
        );
        assert_eq!(rewrite_args(args(&["indicators", "--help"])), args(&["indicators", "--help"]));
        assert_eq!(
            rewrite_args(args(&["indicators", "validate"])),
            args(&["indicators", "validate"])
        );
    }

    #[test]
    fn no_flags_disable_exports_and_plot() {
        let cli = crate::cli::Cli::parse_from(["indicators", "run", "--no-xlsx", "--no-plot"]);
        let Command::Run(run_args) = cli.command else {
            panic!("expected run");
        };
        let config = run_config_from_args(&run_args);
        assert!(config.export_xlsx.is_none());
        assert!(!config.plot);
    }

    #[test]
    fn plot_is_on_by_default_and_can_be_re_enabled() {
        for (argv, expected) in [
            (&["indicators", "run"][..], true),
            (&["indicators", "run", "--no-plot", "--plot"][..], true),
            (&["indicators", "run", "--plot", "--no-plot"][..], false),
        ] {
            let cli = crate::cli::Cli::parse_from(argv);
            let Command::Run(run_args) = cli.command else {
                panic!("expected run");
            };
            assert_eq!(run_config_from_args(&run_args).plot, expected, "{argv:?}");
        }
    }
}
