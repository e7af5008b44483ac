//! Command implementations

pub mod analyze;

pub use analyze::{analyze_file, analyze_reader, analyze_words};
