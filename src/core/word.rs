//! Word list entry representation
//!
//! A Word stores one validated line of the input: uppercase Latin letters only.

use super::Letter;
use std::fmt;
use thiserror::Error;

/// A word made solely of the letters `A`..`Z`
///
/// May be zero-length when the input contained an empty line and the
/// parser was configured to keep it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word contains invalid byte {byte:#04x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },
    #[error("Word must not contain a newline")]
    ContainsNewline,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text contains anything other than `A`..`Z`.
    ///
    /// # Examples
    /// ```
    /// use letter_frequency::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("crane").is_err());
    /// assert!(Word::new("CR4NE").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if let Some((position, &byte)) = text
            .as_bytes()
            .iter()
            .enumerate()
            .find(|&(_, b)| !b.is_ascii_uppercase())
        {
            if byte == b'\n' {
                return Err(WordError::ContainsNewline);
            }
            return Err(WordError::InvalidCharacter { position, byte });
        }

        Ok(Self { text })
    }

    /// Build a word from text the parser has already validated
    pub(crate) fn from_validated(text: String) -> Self {
        debug_assert!(text.bytes().all(|b| b.is_ascii_uppercase()));
        Self { text }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as raw bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Iterate over the letters of the word
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.bytes().iter().filter_map(|&b| Letter::from_byte(b))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.bytes(), b"CRANE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_empty_allowed() {
        let word = Word::new("").unwrap();
        assert!(word.is_empty());
        assert_eq!(word.letters().count(), 0);
    }

    #[test]
    fn word_creation_lowercase_rejected() {
        assert_eq!(
            Word::new("CRaNE"),
            Err(WordError::InvalidCharacter {
                position: 2,
                byte: b'a'
            })
        );
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("CRAN3").is_err()); // Number
        assert!(Word::new("CRAN ").is_err()); // Space
        assert!(Word::new("CRAN!").is_err()); // Punctuation
        assert!(Word::new("ÉCRAN").is_err()); // Non-ASCII
    }

    #[test]
    fn word_creation_newline_rejected() {
        assert_eq!(Word::new("AB\nCD"), Err(WordError::ContainsNewline));
    }

    #[test]
    fn word_letters() {
        let word = Word::new("ABZ").unwrap();
        let indices: Vec<usize> = word.letters().map(Letter::index).collect();
        assert_eq!(indices, vec![0, 1, 25]);
    }

    #[test]
    fn word_from_validated() {
        let word = Word::from_validated(String::from("DOG"));
        assert_eq!(word, Word::new("DOG").unwrap());
    }

    #[test]
    fn word_display() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
