//! Letter frequency table
//!
//! Fixed-size mapping from each of the 26 letters to its occurrence count.

use super::letter::{ALPHABET_SIZE, Letter};

/// Occurrence count of every letter `A`..`Z`
///
/// Read-only once built: the aggregator constructs it and everything
/// downstream only looks values up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Create a table from counts in alphabetical order
    ///
    /// # Examples
    /// ```
    /// use letter_frequency::core::{FrequencyTable, Letter};
    ///
    /// let mut counts = [0; 26];
    /// counts[0] = 3;
    /// let table = FrequencyTable::from_counts(counts);
    /// assert_eq!(table.get(Letter::ALPHABET[0]), 3);
    /// assert_eq!(table.total(), 3);
    /// ```
    #[must_use]
    pub const fn from_counts(counts: [u64; ALPHABET_SIZE]) -> Self {
        Self { counts }
    }

    /// Count for a single letter
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: Letter) -> u64 {
        self.counts[letter.index()]
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate over `(letter, count)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u64)> + '_ {
        Letter::ALPHABET
            .iter()
            .map(move |&letter| (letter, self.get(letter)))
    }
}
