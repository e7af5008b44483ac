//! Letter ranking by declining frequency
//!
//! The letters are sorted in place with a partition-exchange sort while the
//! frequency table is only read for comparisons. Because the ordering is
//! keyed on `(frequency descending, letter ascending)`, no two letters ever
//! compare equal and equal-frequency letters always come out alphabetically.

use crate::core::{FrequencyTable, Letter, LetterRanking};
use std::cmp::Reverse;
use tracing::debug;

/// Rank all 26 letters by descending frequency
///
/// Ties break by ascending alphabetical order.
///
/// # Examples
/// ```
/// use letter_frequency::analysis::rank_letters;
/// use letter_frequency::core::FrequencyTable;
///
/// let mut counts = [0; 26];
/// counts[25] = 4; // Z
/// counts[1] = 4; // B
/// counts[3] = 1; // D
/// let ranking = rank_letters(&FrequencyTable::from_counts(counts));
/// assert_eq!(&ranking.to_string()[..4], "BZDA");
/// ```
#[must_use]
pub fn rank_letters(table: &FrequencyTable) -> LetterRanking {
    let mut letters = Letter::ALPHABET;
    sort_by_declining_frequency(&mut letters, table);

    let ranking = LetterRanking::from_sorted(letters);
    debug!(%ranking, "ranked letters");
    ranking
}

/// Sort key: higher counts first, then alphabetical
fn rank_key(table: &FrequencyTable, letter: Letter) -> (Reverse<u64>, Letter) {
    (Reverse(table.get(letter)), letter)
}

/// Whether `a` belongs at or before `b` in the ranking
fn ranks_no_later(table: &FrequencyTable, a: Letter, b: Letter) -> bool {
    rank_key(table, a) <= rank_key(table, b)
}

/// In-place partition-exchange sort
///
/// The rightmost letter is the pivot. A left scan stops at the first letter
/// ranking after the pivot, a right scan at the first letter ranking before
/// it; the two are swapped until the scans meet, and the pivot is swapped
/// into the meeting point. Recursion depth is bounded by the alphabet size.
fn sort_by_declining_frequency(letters: &mut [Letter], table: &FrequencyTable) {
    if letters.len() < 2 {
        return;
    }

    let right = letters.len() - 1;
    let pivot = letters[right];
    let (mut i, mut j) = (0, right);

    while i < j {
        while i < right && ranks_no_later(table, letters[i], pivot) {
            i += 1;
        }
        while j > 0 && ranks_no_later(table, pivot, letters[j]) {
            j -= 1;
        }
        if i < j {
            letters.swap(i, j);
        }
    }
    letters.swap(i, right);

    let (before, after) = letters.split_at_mut(i);
    sort_by_declining_frequency(before, table);
    sort_by_declining_frequency(&mut after[1..], table);
}
