//! Input/output helpers.
//!
//! - CSV ingest of external datasets (`ingest`)
//! - dataset exports (CSV/XLSX) (`export`)
//! - run report JSON read/write (`report`)

pub mod export;
pub mod ingest;
pub mod report;

pub use export::*;
pub use ingest::*;
pub use report::*;
