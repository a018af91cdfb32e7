//! Domain model for assignment records and employee pairs.
//!
//! # Responsibility
//! - Define the canonical typed record produced from raw input rows.
//! - Define the canonical pair key and the result shape handed to callers.
//!
//! # Invariants
//! - Records are immutable after normalization.
//! - A pair key never depends on which record was seen first.

pub mod assignment;
pub mod pair;
pub mod row;
