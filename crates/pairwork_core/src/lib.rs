//! Core domain logic for employee pair overlap analysis.
//! This crate is the single source of truth for pairing and overlap rules.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::assignment::{AssignmentRecord, RecordDate};
pub use model::pair::{PairKey, PairResult};
pub use model::row::{FieldNames, RawRow};
pub use service::longest_pair::{find_longest_pair, LongestPairOutcome};
pub use service::pair_aggregator::{
    accumulate_pairs, longest_working_pair, AggregatorOptions, PairAccumulator, PairTotal,
};
pub use service::record_normalizer::{
    normalize_row, normalize_rows, parse_record_date, NormalizeError, NormalizeReport,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
