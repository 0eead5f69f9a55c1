//! Math utilities used by the quality checks and the analysis layer.

pub mod stats;

pub use stats::{mean, quantile, round_to, sample_std};
