//! Parser configuration
//!
//! The defaults reproduce how the classic dictionary tool treats its input:
//! empty lines become zero-length words and a last line without a newline
//! is dropped.

use clap::ValueEnum;
use std::fmt;

/// What to do with a line that has no letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EmptyLines {
    /// Keep it as a zero-length word
    #[default]
    Accept,
    /// Fail with a malformed-input error
    Reject,
}

/// What to do with content after the last newline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TrailingFragment {
    /// Validate it, then drop it
    #[default]
    Discard,
    /// Keep it as a final word
    Accept,
    /// Fail with a malformed-input error
    Reject,
}

/// Parser policies for the two edge cases of the input format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub empty_lines: EmptyLines,
    pub trailing_fragment: TrailingFragment,
}

impl ParseOptions {
    /// Strictest configuration: every line must be non-empty and newline-terminated
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            empty_lines: EmptyLines::Reject,
            trailing_fragment: TrailingFragment::Reject,
        }
    }

    #[must_use]
    pub const fn with_empty_lines(mut self, policy: EmptyLines) -> Self {
        self.empty_lines = policy;
        self
    }

    #[must_use]
    pub const fn with_trailing_fragment(mut self, policy: TrailingFragment) -> Self {
        self.trailing_fragment = policy;
        self
    }
}

impl fmt::Display for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "empty lines: {:?}, trailing fragment: {:?}",
            self.empty_lines, self.trailing_fragment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_lenient_behavior() {
        let options = ParseOptions::default();
        assert_eq!(options.empty_lines, EmptyLines::Accept);
        assert_eq!(options.trailing_fragment, TrailingFragment::Discard);
    }

    #[test]
    fn builders() {
        let options = ParseOptions::default()
            .with_empty_lines(EmptyLines::Reject)
            .with_trailing_fragment(TrailingFragment::Accept);
        assert_eq!(options.empty_lines, EmptyLines::Reject);
        assert_eq!(options.trailing_fragment, TrailingFragment::Accept);
    }

    #[test]
    fn display_names_both_policies() {
        assert_eq!(
            ParseOptions::strict().to_string(),
            "empty lines: Reject, trailing fragment: Reject"
        );
    }

    #[test]
    fn strict_rejects_both() {
        let options = ParseOptions::strict();
        assert_eq!(options.empty_lines, EmptyLines::Reject);
        assert_eq!(options.trailing_fragment, TrailingFragment::Reject);
    }
}
