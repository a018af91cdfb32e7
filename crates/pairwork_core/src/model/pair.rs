//! Pair key and pair result model.

use serde::{Deserialize, Serialize};

/// Canonical key for an unordered employee pair on one project.
///
/// # Invariants
/// - `employee_a <= employee_b` (byte-wise string order).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    employee_a: String,
    employee_b: String,
    project_id: String,
}

impl PairKey {
    /// Builds a key, sorting the two employee identifiers.
    ///
    /// `canonical("E2", "E1", p)` and `canonical("E1", "E2", p)` are equal.
    pub fn canonical(first: &str, second: &str, project_id: &str) -> Self {
        let (employee_a, employee_b) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        Self {
            employee_a: employee_a.to_string(),
            employee_b: employee_b.to_string(),
            project_id: project_id.to_string(),
        }
    }

    pub fn employee_a(&self) -> &str {
        &self.employee_a
    }

    pub fn employee_b(&self) -> &str {
        &self.employee_b
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// Longest-working pair returned to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairResult {
    pub employee_a: String,
    pub employee_b: String,
    pub project_id: String,
    /// Sum of per-interval overlap days for this pair on this project.
    pub total_days_worked: i64,
}

impl PairResult {
    pub(crate) fn from_key(key: &PairKey, total_days_worked: i64) -> Self {
        Self {
            employee_a: key.employee_a.clone(),
            employee_b: key.employee_b.clone(),
            project_id: key.project_id.clone(),
            total_days_worked,
        }
    }
}
