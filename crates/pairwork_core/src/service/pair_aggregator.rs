//! Pair overlap aggregator.
//!
//! # Responsibility
//! - Sum per-interval overlap days for every (employee pair, project) key.
//! - Select the key with the greatest total under a deterministic tie-break.
//!
//! # Invariants
//! - Only records of distinct employees on the same project are compared.
//! - Comparisons touching an invalid date are skipped, never summed.
//! - Negative overlap is summed as-is unless `clamp_negative_overlap` is set.
//! - Ties go to the key whose first contributing comparison `(i, j)` is
//!   smallest, i.e. the key created first by a row-order scan.
//! - A total must be strictly greater than zero to be reported.

use crate::model::assignment::AssignmentRecord;
use crate::model::pair::{PairKey, PairResult};
use log::{debug, info};
use std::collections::btree_map::{self, BTreeMap};

/// Tunables for overlap accumulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregatorOptions {
    /// Clamp every per-comparison contribution to `max(0, overlap)`.
    pub clamp_negative_overlap: bool,
}

/// Accumulated overlap for one pair key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairTotal {
    /// Sum of contributions, possibly negative.
    pub days: i64,
    /// Record indices of the earliest comparison that touched this key.
    pub first_seen: (usize, usize),
}

/// Per-key overlap totals built by one aggregation pass.
///
/// Partial accumulators built over disjoint comparison sets can be combined
/// with [`PairAccumulator::merge`] in any order with the same outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairAccumulator {
    totals: BTreeMap<PairKey, PairTotal>,
    skipped_pairs: usize,
}

impl PairAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `days` to `key`, remembering the earliest comparison seen.
    pub fn add(&mut self, key: PairKey, days: i64, seen: (usize, usize)) {
        let total = self.totals.entry(key).or_insert(PairTotal {
            days: 0,
            first_seen: seen,
        });
        total.days += days;
        total.first_seen = total.first_seen.min(seen);
    }

    /// Records one comparison that was skipped because of an invalid date.
    pub fn record_skipped(&mut self) {
        self.skipped_pairs += 1;
    }

    /// Folds `other` into `self`, summing matching keys.
    pub fn merge(&mut self, other: PairAccumulator) {
        for (key, total) in other.totals {
            self.add(key, total.days, total.first_seen);
        }
        self.skipped_pairs += other.skipped_pairs;
    }

    pub fn get(&self, key: &PairKey) -> Option<&PairTotal> {
        self.totals.get(key)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Comparisons skipped because of invalid dates.
    pub fn skipped_pairs(&self) -> usize {
        self.skipped_pairs
    }

    /// Iterates keys in canonical key order.
    pub fn iter(&self) -> btree_map::Iter<'_, PairKey, PairTotal> {
        self.totals.iter()
    }

    /// Returns the key with the greatest strictly positive total.
    ///
    /// Returns `None` when no key beats the zero baseline.
    pub fn best(&self) -> Option<PairResult> {
        self.totals
            .iter()
            .filter(|(_, total)| total.days > 0)
            .max_by(|(_, left), (_, right)| {
                left.days
                    .cmp(&right.days)
                    .then_with(|| right.first_seen.cmp(&left.first_seen))
            })
            .map(|(key, total)| PairResult::from_key(key, total.days))
    }
}

impl<'a> IntoIterator for &'a PairAccumulator {
    type Item = (&'a PairKey, &'a PairTotal);
    type IntoIter = btree_map::Iter<'a, PairKey, PairTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds per-key overlap totals for `records`.
///
/// Records are bucketed by project before pairing; this yields the same
/// totals and tie-break data as comparing every record against every other.
pub fn accumulate_pairs(
    records: &[AssignmentRecord],
    options: AggregatorOptions,
) -> PairAccumulator {
    let mut buckets: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        buckets
            .entry(record.project_id.as_str())
            .or_default()
            .push(index);
    }

    let mut accumulator = PairAccumulator::new();
    for (project_id, indices) in &buckets {
        let partial = accumulate_bucket(records, indices, options);
        debug!(
            "event=bucket_done module=aggregator status=ok project={:?} records={} pair_keys={}",
            project_id,
            indices.len(),
            partial.len()
        );
        accumulator.merge(partial);
    }
    accumulator
}

/// Returns the longest-working pair, or `None` when no pair beats zero days.
pub fn longest_working_pair(
    records: &[AssignmentRecord],
    options: AggregatorOptions,
) -> Option<PairResult> {
    if records.len() < 2 {
        debug!(
            "event=pair_selected module=aggregator status=ok records={} outcome=none",
            records.len()
        );
        return None;
    }

    let accumulator = accumulate_pairs(records, options);
    let best = accumulator.best();
    let unusable = records.iter().filter(|record| !record.is_usable()).count();
    info!(
        "event=pair_selected module=aggregator status=ok records={} unusable_records={} \
         pair_keys={} skipped_pairs={} outcome={}",
        records.len(),
        unusable,
        accumulator.len(),
        accumulator.skipped_pairs(),
        if best.is_some() { "pair" } else { "none" }
    );
    best
}

// `indices` must be ascending so every comparison is keyed as (earlier, later).
fn accumulate_bucket(
    records: &[AssignmentRecord],
    indices: &[usize],
    options: AggregatorOptions,
) -> PairAccumulator {
    let mut partial = PairAccumulator::new();
    for (offset, &i) in indices.iter().enumerate() {
        let left = &records[i];
        for &j in &indices[offset + 1..] {
            let right = &records[j];
            if left.employee_id == right.employee_id {
                continue;
            }
            let Some(days) = left.overlap_days(right) else {
                partial.record_skipped();
                continue;
            };
            let days = if options.clamp_negative_overlap {
                days.max(0)
            } else {
                days
            };
            let key = PairKey::canonical(&left.employee_id, &right.employee_id, &left.project_id);
            partial.add(key, days, (i, j));
        }
    }
    partial
}
