//! Simplified inflation forecast.
//!
//! This is not an ARIMA fit. Each future month is an independent draw from
//! `Normal(recent_mean, recent_std)` floored at 0, where the recent window is
//! the last 12 observations. The band is `value ± 1.96 * recent_std` for every
//! period: it does not widen with the horizon.

use crate::data::NormalSource;
use crate::domain::{ForecastPoint, Observation};
use crate::error::AppError;
use crate::math::{mean, sample_std};

pub const DEFAULT_HORIZON: usize = 6;

/// Observations used for the recent mean/std.
pub const RECENT_WINDOW: usize = 12;

/// Two-sided 95% normal quantile.
pub const Z_95: f64 = 1.96;

/// Recent-window statistics the forecast draws from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentStats {
    pub mean: f64,
    pub std_dev: f64,
    /// Observed (non-missing) values in the window.
    pub n: usize,
}

/// Mean and sample std of monthly inflation over the last `RECENT_WINDOW` rows
/// (all rows when fewer). Missing cells in the window are skipped.
pub fn recent_stats(rows: &[Observation]) -> Result<RecentStats, AppError> {
    let start = rows.len().saturating_sub(RECENT_WINDOW);
    let window: Vec<f64> = rows[start..]
        .iter()
        .filter_map(|o| o.inflation_monthly_pct)
        .collect();

    if window.len() < 2 {
        return Err(AppError::data_shape(format!(
            "Forecast needs at least 2 observed inflation values in the last {RECENT_WINDOW} months (have {}).",
            window.len()
        )));
    }

    Ok(RecentStats {
        mean: mean(&window),
        std_dev: sample_std(&window),
        n: window.len(),
    })
}

/// Forecast `horizon` months ahead, drawing from `sampler`.
pub fn forecast_inflation<S: NormalSource>(
    rows: &[Observation],
    horizon: usize,
    sampler: &mut S,
) -> Result<Vec<ForecastPoint>, AppError> {
    if horizon == 0 {
        return Err(AppError::invalid_argument("Forecast horizon must be > 0."));
    }
    if rows.len() < 2 {
        return Err(AppError::data_shape(format!(
            "Forecast needs at least 2 observations (have {}).",
            rows.len()
        )));
    }

    let recent = recent_stats(rows)?;
    let half_width = Z_95 * recent.std_dev;

    (1..=horizon)
        .map(|h| {
            let predicted = sampler.sample(recent.mean, recent.std_dev)?.max(0.0);
            Ok(ForecastPoint {
                horizon: h,
                predicted,
                lower: (predicted - half_width).max(0.0),
                upper: predicted + half_width,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ScriptedNormal, SeededNormal};
    use chrono::NaiveDate;

    fn rows(values: &[f64]) -> Vec<Observation> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let date = NaiveDate::from_ymd_opt(2015 + (i / 12) as i32, 1 + (i % 12) as u32, 1).unwrap();
                Observation::new(date, [v, 0.0, 10.0, 80.0, 0.0])
            })
            .collect()
    }

    #[test]
    fn six_periods_ordered_and_bracketed() {
        let data = rows(&[0.4, 0.7, 0.1, 0.9, 0.5, 0.3, 0.8, 0.2, 0.6, 0.55, 0.45, 0.35, 0.65]);
        let out = forecast_inflation(&data, 6, &mut SeededNormal::new(3)).unwrap();
        assert_eq!(out.len(), 6);
        for (i, p) in out.iter().enumerate() {
            assert_eq!(p.horizon, i + 1);
            assert!(p.lower >= 0.0);
            assert!(p.lower <= p.predicted && p.predicted <= p.upper);
        }
    }

    #[test]
    fn recent_window_is_last_twelve() {
        // A large first value outside the window must not move the mean.
        let mut values = vec![50.0];
        values.extend(std::iter::repeat(1.0).take(6));
        values.extend(std::iter::repeat(3.0).take(6));
        let stats = recent_stats(&rows(&values)).unwrap();
        assert_eq!(stats.n, 12);
        assert!((stats.mean - 2.0).abs() < 1e-12);
    }

    #[test]
    fn scripted_draws_give_exact_values() {
        // Window [1.0, 1.2]: mean 1.1, sample std sqrt(0.02).
        let data = rows(&[1.0, 1.2]);
        let std = 0.02_f64.sqrt();
        let mut sampler = ScriptedNormal::new(vec![0.0, 1.0, -10.0]);
        let out = forecast_inflation(&data, 3, &mut sampler).unwrap();

        assert!((out[0].predicted - 1.1).abs() < 1e-12);
        assert!((out[0].upper - (1.1 + 1.96 * std)).abs() < 1e-12);
        assert!((out[0].lower - (1.1 - 1.96 * std)).abs() < 1e-12);

        assert!((out[1].predicted - (1.1 + std)).abs() < 1e-12);

        // Negative draw floors at 0 and so does its lower bound.
        assert_eq!(out[2].predicted, 0.0);
        assert_eq!(out[2].lower, 0.0);
        assert!((out[2].upper - 1.96 * std).abs() < 1e-12);
    }

    #[test]
    fn band_width_is_constant_across_horizon() {
        let data = rows(&[0.5, 0.6, 0.7, 0.4]);
        let out = forecast_inflation(&data, 4, &mut ScriptedNormal::new(vec![1.0])).unwrap();
        let widths: Vec<f64> = out.iter().map(|p| p.upper - p.lower).collect();
        assert!(widths.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-12));
    }

    #[test]
    fn invalid_inputs() {
        let data = rows(&[0.5, 0.6]);
        assert!(matches!(
            forecast_inflation(&data, 0, &mut SeededNormal::default()),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            forecast_inflation(&data[..1], 6, &mut SeededNormal::default()),
            Err(AppError::DataShape(_))
        ));
    }
}
