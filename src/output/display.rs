//! Display functions for analysis reports

use super::formatters::{combination_line, frequency_line};
use crate::analysis::Report;
use std::io::{self, Write};

/// Write a report: one `<LETTER> <FREQUENCY>` line per ranked letter, then
/// one line per top-five combination
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    for &(letter, count) in &report.frequencies {
        writeln!(out, "{}", frequency_line(letter, count))?;
    }
    for &combination in &report.combinations {
        writeln!(out, "{}", combination_line(combination))?;
    }
    out.flush()
}

/// Print a report to standard output
///
/// # Errors
///
/// Returns an error if standard output cannot be written.
pub fn print_report(report: &Report) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_report(report, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::analyze_reader;
    use crate::wordlists::ParseOptions;

    fn render(input: &[u8]) -> String {
        let report = analyze_reader(input, ParseOptions::default()).unwrap();
        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_example_report() {
        let text = render(b"CAT\nCAT\nDOG\n");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 36);
        assert_eq!(
            &lines[..7],
            &[
                "A 0000002",
                "C 0000002",
                "T 0000002",
                "D 0000001",
                "G 0000001",
                "O 0000001",
                "B 0000000"
            ]
        );
        assert_eq!(lines[25], "Z 0000000");
        assert_eq!(
            &lines[26..],
            &["AC", "AT", "AD", "AG", "CT", "CD", "CG", "TD", "TG", "DG"]
        );
        assert!(text.ends_with("DG\n"));
    }

    #[test]
    fn renders_empty_input() {
        let text = render(b"");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "A 0000000");
        assert_eq!(lines[25], "Z 0000000");
        assert_eq!(lines[26], "AB");
        assert_eq!(lines[35], "DE");
    }
}
