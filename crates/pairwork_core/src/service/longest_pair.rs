//! End-to-end pipeline from raw rows to the longest-working pair.

use crate::model::pair::PairResult;
use crate::model::row::{FieldNames, RawRow};
use crate::service::pair_aggregator::{longest_working_pair, AggregatorOptions};
use crate::service::record_normalizer::{normalize_rows, NormalizeError};
use chrono::NaiveDate;

/// Result of [`find_longest_pair`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestPairOutcome {
    /// Best pair, or `None` when no pair worked together for a positive total.
    pub pair: Option<PairResult>,
    /// Rows skipped by the normalizer.
    pub rejected: Vec<NormalizeError>,
}

/// Normalizes `rows` against `today` and selects the longest-working pair.
///
/// Rejected rows do not abort the computation; they are returned alongside
/// the result so the caller can report them.
pub fn find_longest_pair<I>(
    rows: I,
    names: &FieldNames,
    today: NaiveDate,
    options: AggregatorOptions,
) -> LongestPairOutcome
where
    I: IntoIterator,
    I::Item: RawRow,
{
    let report = normalize_rows(rows, names, today);
    LongestPairOutcome {
        pair: longest_working_pair(&report.records, options),
        rejected: report.rejected,
    }
}
