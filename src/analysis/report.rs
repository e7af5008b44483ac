//! Final report assembly

use crate::core::{FrequencyTable, Letter, LetterRanking};
use crate::error::{AnalysisError, Result};
use rustc_hash::FxHashSet;

/// Number of top-ranked letters that are paired up
pub const TOP_LETTERS: usize = 5;

/// Number of pairs drawn from the top letters: C(5, 2)
pub const COMBINATION_COUNT: usize = TOP_LETTERS * (TOP_LETTERS - 1) / 2;

/// Two distinct top-ranked letters, higher ranked first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination(pub Letter, pub Letter);

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// Ranked letter frequencies plus the pairs of the most frequent letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub frequencies: Vec<(Letter, u64)>,
    pub combinations: Vec<Combination>,
}

impl Report {
    /// The highest ranked letter and its count
    #[must_use]
    pub fn most_frequent(&self) -> Option<(Letter, u64)> {
        self.frequencies.first().copied()
    }

    /// Sum of all counts in the report
    #[must_use]
    pub fn total_letters(&self) -> u64 {
        self.frequencies.iter().map(|&(_, count)| count).sum()
    }
}

/// Build the report from a ranking and the table it was ranked by
///
/// Pairs are emitted as (1,2), (1,3), (1,4), (1,5), (2,3), … (4,5), where
/// the numbers are rank positions.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientAlphabet`] if the ranking has fewer
/// than five distinct letters. A ranking from
/// [`rank_letters`](super::rank_letters) always has 26.
pub fn build_report(ranking: &LetterRanking, table: &FrequencyTable) -> Result<Report> {
    let top = ranking.top(TOP_LETTERS);
    let distinct: FxHashSet<Letter> = top.iter().copied().collect();
    if distinct.len() < TOP_LETTERS {
        return Err(AnalysisError::InsufficientAlphabet {
            found: distinct.len(),
        });
    }

    let frequencies = ranking
        .iter()
        .map(|letter| (letter, table.get(letter)))
        .collect();

    let mut combinations = Vec::with_capacity(COMBINATION_COUNT);
    for (i, &first) in top.iter().enumerate() {
        for &second in &top[i + 1..] {
            combinations.push(Combination(first, second));
        }
    }

    Ok(Report {
        frequencies,
        combinations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rank_letters;
    use crate::core::ALPHABET_SIZE;
    use proptest::prelude::*;

    fn combination_strings(report: &Report) -> Vec<String> {
        report.combinations.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn combination_order() {
        let ranking = LetterRanking::from_sorted(Letter::ALPHABET);
        let report = build_report(&ranking, &FrequencyTable::default()).unwrap();
        assert_eq!(
            combination_strings(&report),
            vec!["AB", "AC", "AD", "AE", "BC", "BD", "BE", "CD", "CE", "DE"]
        );
    }

    #[test]
    fn frequencies_follow_ranking() {
        let mut counts = [0; ALPHABET_SIZE];
        counts[4] = 10; // E
        counts[19] = 7; // T
        let table = FrequencyTable::from_counts(counts);
        let report = build_report(&rank_letters(&table), &table).unwrap();

        assert_eq!(report.frequencies.len(), ALPHABET_SIZE);
        assert_eq!(report.frequencies[0], (Letter::from_byte(b'E').unwrap(), 10));
        assert_eq!(report.frequencies[1], (Letter::from_byte(b'T').unwrap(), 7));
        assert_eq!(report.frequencies[2], (Letter::from_byte(b'A').unwrap(), 0));
        assert_eq!(report.most_frequent(), Some((Letter::from_byte(b'E').unwrap(), 10)));
        assert_eq!(report.total_letters(), 17);
    }

    #[test]
    fn duplicate_top_letters_rejected() {
        let mut letters = Letter::ALPHABET;
        letters[1] = letters[0];
        let ranking = LetterRanking::from_sorted(letters);
        let result = build_report(&ranking, &FrequencyTable::default());
        assert!(matches!(
            result,
            Err(AnalysisError::InsufficientAlphabet { found: 4 })
        ));
    }

    proptest! {
        #[test]
        fn ten_distinct_pairs_from_top_five(counts in prop::array::uniform26(0_u64..4)) {
            let table = FrequencyTable::from_counts(counts);
            let ranking = rank_letters(&table);
            let report = build_report(&ranking, &table).unwrap();

            prop_assert_eq!(report.combinations.len(), COMBINATION_COUNT);

            let top = ranking.top(TOP_LETTERS);
            let mut seen = FxHashSet::default();
            for &Combination(a, b) in &report.combinations {
                prop_assert_ne!(a, b);
                prop_assert!(top.contains(&a) && top.contains(&b));
                prop_assert!(ranking.position_of(a) < ranking.position_of(b));
                prop_assert!(seen.insert((a, b)));
            }
        }
    }
}
