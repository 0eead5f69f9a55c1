//! Data-quality checks and cleaning.
//!
//! - `validate`: duplicate / missing / IQR outlier report (read-only)
//! - `clean`: date de-duplication plus forward/backward fill

pub mod clean;
pub mod validate;

pub use clean::clean_dataset;
pub use validate::validate_dataset;
