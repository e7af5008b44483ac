//! Letter Frequency - CLI
//!
//! Reads a dictionary file of uppercase words and prints each letter's
//! frequency in descending order, followed by the two-letter combinations of
//! the five most frequent letters.

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use letter_frequency::{
    AnalysisError,
    commands::analyze_file,
    logging::init_tracing,
    output::{formatters::line_number, print_report},
    wordlists::{EmptyLines, ParseOptions, TrailingFragment},
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status for a bad command line
const USAGE_STATUS: u8 = 255;

#[derive(Parser)]
#[command(
    name = "letter_frequency",
    about = "Prints the number of occurrences of each letter in a dictionary file in \
             descending order and the 2 letter combinations of the 5 most frequent letters",
    after_help = "Valid input text files contain only uppercase words in the Latin script \
                  separated by newlines.",
    version,
    author
)]
struct Cli {
    /// Path to input text file
    dictionary_file: PathBuf,

    /// Empty lines: accept (as zero-length words, default) or reject
    #[arg(long, value_enum, default_value_t = EmptyLines::Accept)]
    empty_lines: EmptyLines,

    /// Last line without a newline: discard (default), accept or reject
    #[arg(long, value_enum, default_value_t = TrailingFragment::Discard)]
    trailing: TrailingFragment,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_empty_lines(self.empty_lines)
            .with_trailing_fragment(self.trailing)
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_error(&e),
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    match analyze_file(&cli.dictionary_file, cli.parse_options()) {
        Ok(report) => {
            print_report(&report).context("failed to write report to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(report_failure(&e)),
    }
}

/// Print the user-facing message for a pipeline failure and pick the exit status
fn report_failure(error: &AnalysisError) -> ExitCode {
    if error.is_internal() {
        tracing::error!(%error, "internal fault in analysis");
    } else {
        tracing::debug!(%error, "analysis failed");
    }

    match error {
        AnalysisError::Io(_) => eprintln!("{}", "Cannot read input file".red()),
        AnalysisError::MalformedInput { line, reason } => {
            eprintln!("{}", format!("Invalid Data in Line {}", line_number(*line)).red());
            tracing::info!(%reason, "malformed input");
        }
        AnalysisError::AllocationFailure(_) => eprintln!("{}", "Memory Problem".red()),
        _ => eprintln!("{} {error}", "error:".red().bold()),
    }

    ExitCode::from(error.exit_status())
}

/// Handle a command line clap refused
fn usage_error(error: &clap::Error) -> ExitCode {
    if !error.use_stderr() {
        // --help and --version
        let _ = error.print();
        return ExitCode::SUCCESS;
    }

    if matches!(
        error.kind(),
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
    ) {
        eprintln!("{}", "Invalid number of parameters".red());
    }
    let _ = error.print();
    ExitCode::from(USAGE_STATUS)
}
