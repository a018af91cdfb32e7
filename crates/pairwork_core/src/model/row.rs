//! Raw input row seam.
//!
//! Rows are decoded by an external collaborator (CSV reader, UI form, test
//! fixture). Core only needs named string lookups.

use std::collections::{BTreeMap, HashMap};

/// Default employee identifier column.
pub const DEFAULT_EMPLOYEE_FIELD: &str = "EmpID";
/// Default project identifier column.
pub const DEFAULT_PROJECT_FIELD: &str = "ProjectID";
/// Default inclusive start date column.
pub const DEFAULT_START_FIELD: &str = "DateFrom";
/// Default inclusive end date column. Empty means ongoing.
pub const DEFAULT_END_FIELD: &str = "DateTo";

/// Read-only view over one decoded input row.
pub trait RawRow {
    /// Returns the raw string value of `name`, or `None` when the row has no
    /// such field at all.
    fn field(&self, name: &str) -> Option<&str>;
}

impl RawRow for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl RawRow for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl RawRow for [(&str, &str)] {
    fn field(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

impl<const N: usize> RawRow for [(&str, &str); N] {
    fn field(&self, name: &str) -> Option<&str> {
        self.as_slice().field(name)
    }
}

impl<T: RawRow + ?Sized> RawRow for &T {
    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }
}

/// Column names the normalizer reads from each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub employee: String,
    pub project: String,
    pub start: String,
    pub end: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            employee: DEFAULT_EMPLOYEE_FIELD.to_string(),
            project: DEFAULT_PROJECT_FIELD.to_string(),
            start: DEFAULT_START_FIELD.to_string(),
            end: DEFAULT_END_FIELD.to_string(),
        }
    }
}
