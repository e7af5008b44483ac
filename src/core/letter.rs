//! Uppercase Latin letter representation

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// One of the 26 uppercase Latin letters `A`..`Z`
///
/// Stored as its alphabet index, so it doubles as an index into a
/// [`FrequencyTable`](super::FrequencyTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// All letters in alphabetical order
    pub const ALPHABET: [Self; ALPHABET_SIZE] = {
        let mut letters = [Self(0); ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            letters[i] = Self(i as u8);
            i += 1;
        }
        letters
    };

    /// Convert an ASCII byte to a letter
    ///
    /// Returns `None` for anything outside `A`..`Z`.
    ///
    /// # Examples
    /// ```
    /// use letter_frequency::core::Letter;
    ///
    /// assert_eq!(Letter::from_byte(b'C').map(Letter::index), Some(2));
    /// assert!(Letter::from_byte(b'c').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_uppercase() {
            Some(Self(byte - b'A'))
        } else {
            None
        }
    }

    /// Position in the alphabet, 0..26
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// ASCII byte of the letter
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        b'A' + self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
