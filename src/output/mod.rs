//! Report output formatting
//!
//! Renders an analysis report as plain text lines.

pub mod display;
pub mod formatters;

pub use display::{print_report, write_report};
