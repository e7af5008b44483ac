//! Core domain types for letter frequency analysis
//!
//! This module contains the fundamental domain types: letters, words, the
//! frequency table and the ranking. All types here are pure and testable.

mod frequency;
mod letter;
mod ranking;
mod word;

pub use frequency::FrequencyTable;
pub use letter::{ALPHABET_SIZE, Letter};
pub use ranking::LetterRanking;
pub use word::{Word, WordError};
