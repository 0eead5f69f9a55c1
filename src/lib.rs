//! `macro-indicators` library crate.
//!
//! The binary (`indicators`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - processors are independent values (one per session, no global state)
//! - code stays easy to navigate as the project grows

pub mod analysis;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod processor;
pub mod quality;
pub mod report;

pub use processor::TimeSeriesProcessor;
