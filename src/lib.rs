//! Letter Frequency
//!
//! Counts how often each uppercase Latin letter occurs in a word list, ranks
//! the letters by descending frequency and pairs up the five most frequent.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_frequency::commands::analyze_reader;
//! use letter_frequency::wordlists::ParseOptions;
//!
//! let report = analyze_reader(&b"CAT\nCAT\nDOG\n"[..], ParseOptions::default()).unwrap();
//! let (letter, count) = report.most_frequent().unwrap();
//! assert_eq!((letter.as_char(), count), ('A', 2));
//! assert_eq!(report.combinations[0].to_string(), "AC");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word list parsing
pub mod wordlists;

// Aggregation, ranking and report assembly
pub mod analysis;

// Command implementations
pub mod commands;

// Text output formatting
pub mod output;

// Tracing setup
pub mod logging;

pub use error::{AnalysisError, Malformation};
