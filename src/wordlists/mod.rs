//! Word list parsing
//!
//! Turns a newline-delimited list of uppercase words into validated [`Word`]s.
//!
//! [`Word`]: crate::core::Word

pub mod loader;
mod options;

pub use loader::{load_from_file, parse_words, words_from_bytes};
pub use options::{EmptyLines, ParseOptions, TrailingFragment};
