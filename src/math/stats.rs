//! Descriptive statistics on plain `f64` slices.
//!
//! Callers drop missing values before calling in, so every function here sees
//! only observed numbers. Empty (or too short) inputs yield `NaN` rather than
//! an error; the analysis layer checks shapes up front.

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (`n - 1` denominator).
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (values.len() as f64 - 1.0)).sqrt()
}

/// Quantile with linear interpolation between closest ranks.
///
/// Position is `q * (n - 1)` on the sorted values, so `q = 0.25` on ten values
/// lands a quarter of the way between the 3rd and 4th smallest.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let q = q.clamp(0.0, 1.0);
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let pos = q * (n - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (sorted[upper] - sorted[lower]) * frac
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_sample_std() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&v) - 5.0).abs() < 1e-12);
        // Population std is 2.0; sample std is sqrt(32 / 7).
        assert!((sample_std(&v) - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn short_inputs_are_nan() {
        assert!(mean(&[]).is_nan());
        assert!(sample_std(&[1.0]).is_nan());
        assert!(quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn quantile_linear_interpolation() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        assert!((quantile(&v, 0.25) - 3.25).abs() < 1e-12);
        assert!((quantile(&v, 0.75) - 7.75).abs() < 1e-12);
        assert!((quantile(&v, 0.5) - 5.5).abs() < 1e-12);
    }

    #[test]
    fn quantile_ignores_input_order() {
        let v = [9.0, 1.0, 5.0, 3.0, 7.0];
        assert!((quantile(&v, 0.25) - 3.0).abs() < 1e-12);
        assert!((quantile(&v, 1.0) - 9.0).abs() < 1e-12);
        assert!((quantile(&[4.2], 0.75) - 4.2).abs() < 1e-12);
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(10.0, 2), 10.0);
        assert_eq!(round_to(0.123_456, 3), 0.123);
        assert_eq!(round_to(-1.005_1, 2), -1.01);
        assert_eq!(round_to(2.675_01, 2), 2.68);
    }
}
