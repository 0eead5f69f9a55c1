//! Read-only analysis of the monthly inflation column.
//!
//! - `metrics`: current/previous values, history mean/std/min/max
//! - `forecast`: recent-mean random-walk forecast with a fixed-width band

pub mod forecast;
pub mod metrics;

pub use forecast::{DEFAULT_HORIZON, forecast_inflation};
pub use metrics::inflation_metrics;
