//! Letter ranking representation

use super::letter::{ALPHABET_SIZE, Letter};
use std::fmt;

/// The 26 letters ordered by descending frequency
///
/// Always a permutation of `A`..`Z`. Produced by
/// [`rank_letters`](crate::analysis::rank_letters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterRanking {
    letters: [Letter; ALPHABET_SIZE],
}

impl LetterRanking {
    pub(crate) const fn from_sorted(letters: [Letter; ALPHABET_SIZE]) -> Self {
        Self { letters }
    }

    /// Letters in ranked order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; ALPHABET_SIZE] {
        &self.letters
    }

    /// The `n` highest ranked letters (all 26 if `n` is larger)
    #[must_use]
    pub fn top(&self, n: usize) -> &[Letter] {
        &self.letters[..n.min(ALPHABET_SIZE)]
    }

    /// 0-based rank of a letter
    #[must_use]
    pub fn position_of(&self, letter: Letter) -> Option<usize> {
        self.letters.iter().position(|&l| l == letter)
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().copied()
    }
}

impl fmt::Display for LetterRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
