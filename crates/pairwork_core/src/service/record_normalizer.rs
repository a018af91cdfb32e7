//! Record normalizer: raw rows to canonical assignment records.
//!
//! # Responsibility
//! - Map each raw row to one `AssignmentRecord`, independently of other rows.
//! - Resolve ongoing assignments to an explicit reference date.
//!
//! # Invariants
//! - Unparseable dates never abort the batch; they become `RecordDate::Invalid`.
//! - Rows lacking identifiers are rejected with a structured error and skipped.
//! - Identifiers are passed through untouched (no trimming, no case folding).

use crate::model::assignment::{AssignmentRecord, RecordDate};
use crate::model::row::{FieldNames, RawRow};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Placeholder some exports write instead of leaving the end date blank.
const ONGOING_PLACEHOLDER: &str = "NULL";

const OFFSET_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid iso date regex"));
static SLASH_YMD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})/(\d{1,2})/(\d{1,2})$").expect("valid y/m/d regex"));
static SLASH_MDY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("valid m/d/y regex"));
static MONTH_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{3,9})\.? (\d{1,2}),? (\d{4})$").expect("valid month name regex")
});

/// Per-row normalization failure. The caller is expected to skip the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Row has no such field at all.
    MissingField { row: usize, field: String },
    /// Identifier field is present but empty.
    EmptyField { row: usize, field: String },
}

impl NormalizeError {
    /// Zero-based index of the offending row in the input sequence.
    pub fn row(&self) -> usize {
        match self {
            Self::MissingField { row, .. } | Self::EmptyField { row, .. } => *row,
        }
    }
}

impl Display for NormalizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { row, field } => {
                write!(f, "row {row}: missing required field `{field}`")
            }
            Self::EmptyField { row, field } => {
                write!(f, "row {row}: field `{field}` must not be empty")
            }
        }
    }
}

impl Error for NormalizeError {}

/// Output of a batch normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Records in input order, rejected rows omitted.
    pub records: Vec<AssignmentRecord>,
    /// One entry per skipped row, in input order.
    pub rejected: Vec<NormalizeError>,
}

/// Normalizes every row, collecting rejected rows instead of failing.
pub fn normalize_rows<I>(rows: I, names: &FieldNames, today: NaiveDate) -> NormalizeReport
where
    I: IntoIterator,
    I::Item: RawRow,
{
    let mut report = NormalizeReport::default();
    for (index, row) in rows.into_iter().enumerate() {
        match normalize_row(index, &row, names, today) {
            Ok(record) => report.records.push(record),
            Err(err) => {
                warn!("event=row_rejected module=normalizer status=error reason={err}");
                report.rejected.push(err);
            }
        }
    }
    debug!(
        "event=normalize_done module=normalizer status=ok records={} rejected={}",
        report.records.len(),
        report.rejected.len()
    );
    report
}

/// Normalizes one row.
///
/// # Contract
/// - Absent, blank or `NULL` end date resolves to `today` (ongoing).
/// - Start date must be present as a field; its value may still be invalid.
///
/// # Errors
/// - `MissingField` when the employee, project or start field is absent.
/// - `EmptyField` when the employee or project identifier is empty.
pub fn normalize_row<R>(
    index: usize,
    row: &R,
    names: &FieldNames,
    today: NaiveDate,
) -> Result<AssignmentRecord, NormalizeError>
where
    R: RawRow + ?Sized,
{
    let employee_id = required_identifier(index, row, &names.employee)?;
    let project_id = required_identifier(index, row, &names.project)?;
    let start_raw = row
        .field(&names.start)
        .ok_or_else(|| NormalizeError::MissingField {
            row: index,
            field: names.start.clone(),
        })?;

    let start = parse_record_date(start_raw);
    let (end, ongoing) = match row.field(&names.end) {
        Some(raw) if !is_ongoing_marker(raw) => (parse_record_date(raw), false),
        _ => (RecordDate::Valid(today), true),
    };

    for date in [&start, &end] {
        if let RecordDate::Invalid { raw } = date {
            debug!(
                "event=invalid_date module=normalizer status=error row={} raw={:?}",
                index, raw
            );
        }
    }

    Ok(AssignmentRecord {
        employee_id: employee_id.to_string(),
        project_id: project_id.to_string(),
        start,
        end,
        ongoing,
    })
}

/// Parses one calendar date string.
///
/// Accepted shapes (surrounding whitespace ignored):
/// - `2024-01-05`
/// - ISO date-time such as `2024-01-05T10:00:00Z`, `2024-01-05T10:00:00+0530`
///   or `2024-01-05 08:30`; the date part is taken as written, the time must
///   still be a real time of day
/// - `2024/01/05`
/// - `01/05/2024` (month first)
/// - `January 5, 2024`, `Jan 5, 2024`, `Sept 5, 2024` (full English month
///   names and three-letter abbreviations, plus `Sept`)
///
/// Anything else, including out-of-range components, is `RecordDate::Invalid`.
pub fn parse_record_date(raw: &str) -> RecordDate {
    match parse_calendar_date(raw.trim()) {
        Some(date) => RecordDate::Valid(date),
        None => RecordDate::Invalid {
            raw: raw.to_string(),
        },
    }
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if let Some(caps) = ISO_DATE_RE.captures(value) {
        return ymd(&caps[1], &caps[2], &caps[3]);
    }
    if let Some(date) = parse_date_time(value) {
        return Some(date);
    }
    if let Some(caps) = SLASH_YMD_RE.captures(value) {
        return ymd(&caps[1], &caps[2], &caps[3]);
    }
    if let Some(caps) = SLASH_MDY_RE.captures(value) {
        return ymd(&caps[3], &caps[1], &caps[2]);
    }
    if let Some(caps) = MONTH_NAME_RE.captures(value) {
        let month = if caps[1].eq_ignore_ascii_case("sept") {
            "Sep"
        } else {
            &caps[1]
        };
        let normalized = format!("{} {} {}", month, &caps[2], &caps[3]);
        return NaiveDate::parse_from_str(&normalized, "%B %d %Y").ok();
    }
    None
}

fn parse_date_time(value: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.date_naive());
    }
    if let Some(parsed) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
    {
        return Some(parsed.date_naive());
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|parsed| parsed.date())
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn is_ongoing_marker(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ONGOING_PLACEHOLDER)
}

fn required_identifier<'row, R>(
    index: usize,
    row: &'row R,
    field: &str,
) -> Result<&'row str, NormalizeError>
where
    R: RawRow + ?Sized,
{
    match row.field(field) {
        None => Err(NormalizeError::MissingField {
            row: index,
            field: field.to_string(),
        }),
        Some("") => Err(NormalizeError::EmptyField {
            row: index,
            field: field.to_string(),
        }),
        Some(value) => Ok(value),
    }
}
