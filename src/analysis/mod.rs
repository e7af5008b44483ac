//! Letter frequency analysis
//!
//! The three pure stages after parsing: aggregation, ranking and report
//! assembly.

pub mod aggregator;
pub mod ranker;
pub mod report;

pub use aggregator::aggregate;
pub use ranker::rank_letters;
pub use report::{COMBINATION_COUNT, Combination, Report, TOP_LETTERS, build_report};
