//! Word list analysis command
//!
//! Runs the full pipeline: parse, aggregate, rank, build the report.

use crate::analysis::{Report, aggregate, build_report, rank_letters};
use crate::core::Word;
use crate::error::Result;
use crate::wordlists::{ParseOptions, load_from_file, parse_words};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info_span};

/// Analyze a word list file
///
/// # Errors
///
/// Returns the first error of any stage: I/O or malformed input from the
/// parser, allocation failure, or an internal fault from a later stage.
///
/// # Examples
/// ```no_run
/// use letter_frequency::commands::analyze_file;
/// use letter_frequency::wordlists::ParseOptions;
///
/// let report = analyze_file("words.txt", ParseOptions::default()).unwrap();
/// println!("{} letters", report.total_letters());
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Report> {
    let path = path.as_ref();
    let _span = info_span!("analyze", path = %path.display()).entered();

    let words = load_from_file(path, options)?;
    analyze_words(&words)
}

/// Analyze a word list read from any reader
///
/// # Errors
///
/// Same as [`analyze_file`].
pub fn analyze_reader<R: Read>(reader: R, options: ParseOptions) -> Result<Report> {
    let _span = info_span!("analyze").entered();

    let words = parse_words(reader, options)?;
    analyze_words(&words)
}

/// Analyze an already parsed word collection
///
/// # Errors
///
/// Returns an internal fault if a word or the ranking is inconsistent.
pub fn analyze_words(words: &[Word]) -> Result<Report> {
    let table = aggregate(words)?;
    let ranking = rank_letters(&table);
    let report = build_report(&ranking, &table)?;

    if let Some((letter, count)) = report.most_frequent() {
        debug!(%letter, count, "most frequent letter");
    }
    Ok(report)
}
