//! Formatting utilities for report lines

use crate::analysis::Combination;
use crate::core::Letter;

/// Width of the zero-padded frequency column
pub const FREQUENCY_WIDTH: usize = 7;

/// Format a ranked letter and its count, e.g. `E 0000042`
#[must_use]
pub fn frequency_line(letter: Letter, count: u64) -> String {
    format!("{letter} {count:0width$}", width = FREQUENCY_WIDTH)
}

/// Format a pair of letters, e.g. `ET`
#[must_use]
pub fn combination_line(combination: Combination) -> String {
    combination.to_string()
}

/// Format a line number the way error messages show it, e.g. `0000012`
#[must_use]
pub fn line_number(line: usize) -> String {
    format!("{line:0width$}", width = FREQUENCY_WIDTH)
}
