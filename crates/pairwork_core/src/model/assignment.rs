//! Assignment record model.
//!
//! # Responsibility
//! - Define the canonical record for "employee worked on project between dates".
//! - Provide interval overlap arithmetic over valid calendar dates.
//!
//! # Invariants
//! - `start <= end` is not enforced; reversed intervals yield negative overlap.
//! - Any comparison touching an invalid date produces no overlap value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Calendar date that may have failed to parse.
///
/// The raw text of an unparseable value is kept so diagnostics can show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "value")]
pub enum RecordDate {
    Valid(NaiveDate),
    Invalid { raw: String },
}

impl RecordDate {
    /// Returns the parsed date, or `None` for an invalid marker.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Valid(date) => Some(*date),
            Self::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(value: NaiveDate) -> Self {
        Self::Valid(value)
    }
}

impl Display for RecordDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Invalid { raw } => write!(f, "invalid date `{raw}`"),
        }
    }
}

/// One normalized "employee on project" assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Opaque employee identifier, compared byte-wise.
    pub employee_id: String,
    /// Opaque project identifier, compared byte-wise.
    pub project_id: String,
    /// Inclusive start.
    pub start: RecordDate,
    /// Inclusive end. Resolved to the reference date for ongoing assignments.
    pub end: RecordDate,
    /// Whether `end` was substituted because the source had no end date.
    pub ongoing: bool,
}

impl AssignmentRecord {
    /// Builds a closed assignment from already-parsed dates.
    pub fn new(
        employee_id: impl Into<String>,
        project_id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            project_id: project_id.into(),
            start: start.into(),
            end: end.into(),
            ongoing: false,
        }
    }

    /// Returns whether both dates parsed and the record can contribute overlap.
    pub fn is_usable(&self) -> bool {
        self.start.is_valid() && self.end.is_valid()
    }

    /// Whole days between the later start and the earlier end.
    ///
    /// Zero or negative when the intervals touch or do not intersect. Returns
    /// `None` when any of the four dates is invalid.
    pub fn overlap_days(&self, other: &AssignmentRecord) -> Option<i64> {
        let start = self.start.as_date()?.max(other.start.as_date()?);
        let end = self.end.as_date()?.min(other.end.as_date()?);
        Some(end.signed_duration_since(start).num_days())
    }
}
