//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw rows into canonical records (`record_normalizer`).
//! - Reduce canonical records to the longest-working pair (`pair_aggregator`).
//! - Chain both stages for callers that hold raw rows (`longest_pair`).
//!
//! # Invariants
//! - Services are pure: no I/O, no shared mutable state across calls.

pub mod longest_pair;
pub mod pair_aggregator;
pub mod record_normalizer;
