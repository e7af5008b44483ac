//! Word list loading utilities
//!
//! Provides functions to parse word lists from files, readers or byte slices.

use super::options::{EmptyLines, ParseOptions, TrailingFragment};
use crate::core::Word;
use crate::error::{AnalysisError, Malformation, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::mem;
use std::path::Path;
use tracing::{debug, warn};

const READ_CHUNK: usize = 8 * 1024;

/// Load words from a file
///
/// The whole file is read with a single bulk read and then parsed with
/// [`words_from_bytes`].
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if the file cannot be opened or read,
/// [`AnalysisError::AllocationFailure`] if the file does not fit in memory,
/// and any error [`words_from_bytes`] reports.
///
/// # Examples
/// ```no_run
/// use letter_frequency::wordlists::{ParseOptions, load_from_file};
///
/// let words = load_from_file("data/words.txt", ParseOptions::default()).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let size_hint = file
        .metadata()
        .map_or(0, |metadata| usize::try_from(metadata.len()).unwrap_or(usize::MAX));
    let bytes = read_all(file, size_hint)?;

    debug!(path = %path.display(), bytes = bytes.len(), %options, "read word list");
    words_from_bytes(&bytes, options)
}

/// Parse words from any reader
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if reading fails,
/// [`AnalysisError::AllocationFailure`] if the read buffer cannot grow, and
/// any error [`words_from_bytes`] reports.
pub fn parse_words<R: Read>(reader: R, options: ParseOptions) -> Result<Vec<Word>> {
    let bytes = read_all(reader, 0)?;

    debug!(bytes = bytes.len(), %options, "read word list");
    words_from_bytes(&bytes, options)
}

/// Read a stream to its end into a buffer that grows fallibly
///
/// `size_hint` bytes are reserved up front.
fn read_all<R: Read>(mut reader: R, size_hint: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    bytes.try_reserve_exact(size_hint)?;

    let mut chunk = [0_u8; READ_CHUNK];
    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        bytes.try_reserve(n)?;
        bytes.extend_from_slice(&chunk[..n]);
    }

    Ok(bytes)
}

/// Parse a newline-delimited list of uppercase words
///
/// Every line must hold only `A`..`Z` and end with `\n`. Words are returned
/// in line order. Empty lines and a last line without a newline are handled
/// as `options` says.
///
/// # Errors
///
/// - [`AnalysisError::MalformedInput`] with the 1-based line number for a
///   byte outside `A`..`Z`/`\n`, or a line a policy rejects
/// - [`AnalysisError::AllocationFailure`] if the word list cannot grow
///
/// # Examples
/// ```
/// use letter_frequency::wordlists::{ParseOptions, words_from_bytes};
///
/// let words = words_from_bytes(b"CAT\nDOG\n", ParseOptions::default()).unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "DOG");
///
/// assert!(words_from_bytes(b"CAT\ndog\n", ParseOptions::default()).is_err());
/// ```
pub fn words_from_bytes(bytes: &[u8], options: ParseOptions) -> Result<Vec<Word>> {
    let mut words: Vec<Word> = Vec::new();
    let mut current = String::new();
    let mut line = 1;

    for &byte in bytes {
        match byte {
            b'A'..=b'Z' => {
                current.try_reserve(1)?;
                current.push(char::from(byte));
            }
            b'\n' => {
                if current.is_empty() && options.empty_lines == EmptyLines::Reject {
                    return Err(malformed(line, Malformation::EmptyLine));
                }
                words.try_reserve(1)?;
                words.push(Word::from_validated(mem::take(&mut current)));
                line += 1;
            }
            _ => return Err(malformed(line, Malformation::InvalidByte(byte))),
        }
    }

    if !current.is_empty() {
        match options.trailing_fragment {
            TrailingFragment::Discard => {
                warn!(line, len = current.len(), "discarding last line without newline");
            }
            TrailingFragment::Accept => {
                words.try_reserve(1)?;
                words.push(Word::from_validated(current));
            }
            TrailingFragment::Reject => {
                return Err(malformed(line, Malformation::MissingNewline));
            }
        }
    }

    debug!(words = words.len(), "parsed word list");
    Ok(words)
}

fn malformed(line: usize, reason: Malformation) -> AnalysisError {
    debug!(line, %reason, "rejecting word list");
    AnalysisError::MalformedInput { line, reason }
}
