//! Terminal plots.

pub mod ascii;

pub use ascii::render_inflation_plot;
