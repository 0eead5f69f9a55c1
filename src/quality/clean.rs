//! Cleaning: drop repeated dates, then fill gaps.
//!
//! De-duplication keys on `date` only (first occurrence wins). This is looser
//! than the validator's full-row duplicate check, so a row sharing a date but
//! differing in values is reported as unique yet still dropped here.

use std::collections::HashSet;

use crate::domain::{NumericColumn, Observation};

/// Produce the cleaned dataset. The input is left untouched.
///
/// A column with no observed values at all stays missing after both fills.
pub fn clean_dataset(rows: &[Observation]) -> Vec<Observation> {
    let mut cleaned = drop_duplicate_dates(rows);

    for column in NumericColumn::ALL {
        let mut values: Vec<Option<f64>> = cleaned.iter().map(|o| o.value(column)).collect();
        forward_fill(&mut values);
        backward_fill(&mut values);
        for (obs, v) in cleaned.iter_mut().zip(values) {
            obs.set_value(column, v);
        }
    }

    cleaned
}

/// Keep the first row for every date, preserving order.
pub fn drop_duplicate_dates(rows: &[Observation]) -> Vec<Observation> {
    let mut seen = HashSet::with_capacity(rows.len());
    rows.iter().filter(|o| seen.insert(o.date)).cloned().collect()
}

/// Propagate the last observed value forward over gaps.
pub fn forward_fill(values: &mut [Option<f64>]) {
    let mut last = None;
    for v in values.iter_mut() {
        match *v {
            Some(x) => last = Some(x),
            None => *v = last,
        }
    }
}

/// Propagate the next observed value backward over gaps.
pub fn backward_fill(values: &mut [Option<f64>]) {
    let mut next = None;
    for v in values.iter_mut().rev() {
        match *v {
            Some(x) => next = Some(x),
            None => *v = next,
        }
    }
}
