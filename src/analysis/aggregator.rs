//! Letter frequency aggregation

use crate::core::{ALPHABET_SIZE, FrequencyTable, Letter, Word};
use crate::error::{AnalysisError, Result};
use tracing::debug;

/// Count every letter of every word
///
/// Single linear pass over all letters. Zero-length words contribute nothing.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidWordEncountered`] if a word holds a byte
/// outside `A`..`Z`. Words built through [`Word::new`] or the parser never
/// do, so this indicates an internal fault.
///
/// # Examples
/// ```
/// use letter_frequency::analysis::aggregate;
/// use letter_frequency::core::{Letter, Word};
///
/// let words = vec![Word::new("CAT").unwrap(), Word::new("COT").unwrap()];
/// let table = aggregate(&words).unwrap();
/// assert_eq!(table.get(Letter::from_byte(b'C').unwrap()), 2);
/// assert_eq!(table.total(), 6);
/// ```
pub fn aggregate(words: &[Word]) -> Result<FrequencyTable> {
    let mut counts = [0_u64; ALPHABET_SIZE];

    for (index, word) in words.iter().enumerate() {
        for &byte in word.bytes() {
            let letter =
                Letter::from_byte(byte).ok_or(AnalysisError::InvalidWordEncountered { index })?;
            counts[letter.index()] += 1;
        }
    }

    let table = FrequencyTable::from_counts(counts);
    debug!(words = words.len(), letters = table.total(), "aggregated letter frequencies");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{ParseOptions, words_from_bytes};
    use proptest::prelude::*;

    fn letter(byte: u8) -> Letter {
        Letter::from_byte(byte).unwrap()
    }

    #[test]
    fn counts_example_words() {
        let words = words_from_bytes(b"CAT\nCAT\nDOG\n", ParseOptions::default()).unwrap();
        let table = aggregate(&words).unwrap();

        assert_eq!(table.get(letter(b'A')), 2);
        assert_eq!(table.get(letter(b'C')), 2);
        assert_eq!(table.get(letter(b'T')), 2);
        assert_eq!(table.get(letter(b'D')), 1);
        assert_eq!(table.get(letter(b'O')), 1);
        assert_eq!(table.get(letter(b'G')), 1);
        assert_eq!(table.total(), 9);
    }

    #[test]
    fn no_words_all_zero() {
        let table = aggregate(&[]).unwrap();
        assert_eq!(table, FrequencyTable::default());
    }

    #[test]
    fn empty_words_are_no_ops() {
        let words = vec![Word::new("").unwrap(), Word::new("ZZ").unwrap(), Word::new("").unwrap()];
        let table = aggregate(&words).unwrap();
        assert_eq!(table.get(letter(b'Z')), 2);
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn repeated_letters_in_one_word() {
        let words = vec![Word::new("MISSISSIPPI").unwrap()];
        let table = aggregate(&words).unwrap();
        assert_eq!(table.get(letter(b'S')), 4);
        assert_eq!(table.get(letter(b'I')), 4);
        assert_eq!(table.get(letter(b'P')), 2);
        assert_eq!(table.get(letter(b'M')), 1);
    }

    #[test]
    fn counts_match_word_letters() {
        let words = vec![Word::new("QUIZ").unwrap(), Word::new("JAZZ").unwrap()];
        let table = aggregate(&words).unwrap();

        let letters: usize = words.iter().map(|w| w.letters().count()).sum();
        assert_eq!(table.total(), letters as u64);
        assert_eq!(table.get(letter(b'Z')), 3);
    }

    proptest! {
        #[test]
        fn total_equals_letter_count(lines in prop::collection::vec("[A-Z]{0,12}", 0..40)) {
            let words: Vec<Word> = lines.iter().map(|l| Word::new(l.as_str()).unwrap()).collect();
            let table = aggregate(&words).unwrap();

            let expected: usize = lines.iter().map(String::len).sum();
            prop_assert_eq!(table.total(), expected as u64);
        }
    }
}
