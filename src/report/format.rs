//! Formatted terminal output for a pipeline run.
//!
//! We keep formatting code in one place so:
//! - the statistics code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::domain::{ForecastPoint, InflationMetrics, Metadata, ValidationReport};

/// Format the dataset header (source, period, load time).
pub fn format_metadata(metadata: &Metadata) -> String {
    let mut out = String::new();
    out.push_str("=== Macro indicators ===\n");
    out.push_str(&format!("Source: {}\n", metadata.source));
    out.push_str(&format!(
        "Period: {} .. {} ({}, n={})\n",
        metadata.period_start.as_deref().unwrap_or("-"),
        metadata.period_end.as_deref().unwrap_or("-"),
        metadata.frequency,
        metadata.observation_count,
    ));
    if let Some(ts) = metadata.loaded_at {
        out.push_str(&format!("Loaded: {}\n", ts.format("%Y-%m-%d %H:%M:%S")));
    }
    out
}

/// Format the validation report with per-column outliers.
pub fn format_validation(report: &ValidationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Validation: {} | rows={} duplicates={} missing={}\n",
        report.status.display_name(),
        report.total_rows,
        report.duplicates,
        report.missing_values,
    ));

    out.push_str(format!("{:<34} {:>8} {:>8}", "column", "outliers", "pct").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<34} {:-<8} {:-<8}", "", "", "").trim_end());
    out.push('\n');
    for c in &report.outliers {
        out.push_str(format!("{:<34} {:>8} {:>7.2}%", c.column.name(), c.count, c.percentage).trim_end());
        out.push('\n');
    }
    out
}

/// Format inflation metrics.
pub fn format_metrics(metrics: &InflationMetrics) -> String {
    let mut out = String::new();
    out.push_str("Inflation (monthly, %):\n");
    out.push_str(&format!(
        "- current: {:.3} | previous: {:.3} | change: {:+.2}%\n",
        metrics.current_monthly, metrics.previous_monthly, metrics.monthly_change_pct
    ));
    out.push_str(&format!("- trailing 12m: {:.2}\n", metrics.cumulative_12m));
    out.push_str(&format!(
        "- history: mean={:.3} std={:.3} min={:.3} max={:.3}\n",
        metrics.historical_mean, metrics.std_dev, metrics.min, metrics.max
    ));
    out
}

/// Format the forecast table.
pub fn format_forecast(forecast: &[ForecastPoint]) -> String {
    let mut out = String::new();
    out.push_str("Forecast (monthly inflation, %, 95% band):\n");
    out.push_str(format!("{:>7} {:>10} {:>10} {:>10}", "horizon", "predicted", "lower", "upper").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<7} {:-<10} {:-<10} {:-<10}", "", "", "", "").trim_end());
    out.push('\n');
    for p in forecast {
        out.push_str(
            format!(
                "{:>7} {:>10.3} {:>10.3} {:>10.3}",
                format!("+{}m", p.horizon),
                p.predicted,
                p.lower,
                p.upper
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

/// Format the full run summary.
pub fn format_run_summary(metadata: &Metadata, validation: &ValidationReport, metrics: &InflationMetrics) -> String {
    let mut out = format_metadata(metadata);
    out.push('\n');
    out.push_str(&format_validation(validation));
    out.push('\n');
    out.push_str(&format_metrics(metrics));
    out
}
