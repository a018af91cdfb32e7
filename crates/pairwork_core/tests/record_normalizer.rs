use chrono::NaiveDate;
use pairwork_core::{
    normalize_row, normalize_rows, AssignmentRecord, FieldNames, NormalizeError, RecordDate,
};
use std::collections::HashMap;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn closed_assignment_keeps_both_dates() {
    let input = row(&[
        ("EmpID", "143"),
        ("ProjectID", "12"),
        ("DateFrom", "2013-11-01"),
        ("DateTo", "2014-01-05"),
    ]);

    let record = normalize_row(0, &input, &FieldNames::default(), today()).unwrap();
    assert_eq!(
        record,
        AssignmentRecord::new("143", "12", date(2013, 11, 1), date(2014, 1, 5))
    );
    assert!(!record.ongoing);
}

#[test]
fn blank_absent_or_null_end_date_resolves_to_reference_date() {
    let names = FieldNames::default();
    let blank = row(&[
        ("EmpID", "1"),
        ("ProjectID", "P"),
        ("DateFrom", "2024-01-01"),
        ("DateTo", ""),
    ]);
    let null = row(&[
        ("EmpID", "1"),
        ("ProjectID", "P"),
        ("DateFrom", "2024-01-01"),
        ("DateTo", "NULL"),
    ]);
    let absent = row(&[("EmpID", "1"), ("ProjectID", "P"), ("DateFrom", "2024-01-01")]);

    for input in [blank, null, absent] {
        let record = normalize_row(0, &input, &names, today()).unwrap();
        assert_eq!(record.end, RecordDate::Valid(today()));
        assert!(record.ongoing);
    }
}

#[test]
fn unparseable_dates_are_kept_as_invalid_markers() {
    let input = row(&[
        ("EmpID", "7"),
        ("ProjectID", "P"),
        ("DateFrom", "not a date"),
        ("DateTo", "2024-02-31"),
    ]);

    let record = normalize_row(3, &input, &FieldNames::default(), today()).unwrap();
    assert_eq!(
        record.start,
        RecordDate::Invalid {
            raw: "not a date".to_string()
        }
    );
    assert!(!record.end.is_valid());
    assert!(!record.is_usable());
}

#[test]
fn identifiers_are_not_trimmed() {
    let input = row(&[("EmpID", " 7 "), ("ProjectID", "P"), ("DateFrom", "2024-01-01")]);
    let record = normalize_row(0, &input, &FieldNames::default(), today()).unwrap();
    assert_eq!(record.employee_id, " 7 ");
}

#[test]
fn missing_or_empty_identifiers_are_reported_with_row_index() {
    let names = FieldNames::default();
    let missing = row(&[("ProjectID", "P"), ("DateFrom", "2024-01-01")]);
    let empty = row(&[("EmpID", "1"), ("ProjectID", ""), ("DateFrom", "2024-01-01")]);
    let no_start = row(&[("EmpID", "1"), ("ProjectID", "P")]);

    assert_eq!(
        normalize_row(4, &missing, &names, today()).unwrap_err(),
        NormalizeError::MissingField {
            row: 4,
            field: "EmpID".to_string()
        }
    );
    assert_eq!(
        normalize_row(5, &empty, &names, today()).unwrap_err(),
        NormalizeError::EmptyField {
            row: 5,
            field: "ProjectID".to_string()
        }
    );
    let err = normalize_row(6, &no_start, &names, today()).unwrap_err();
    assert_eq!(err.row(), 6);
    assert_eq!(err.to_string(), "row 6: missing required field `DateFrom`");
}

#[test]
fn batch_skips_rejected_rows_and_keeps_order() {
    let rows = vec![
        row(&[
            ("EmpID", "1"),
            ("ProjectID", "P"),
            ("DateFrom", "2024-01-01"),
            ("DateTo", "2024-01-09"),
        ]),
        row(&[("EmpID", ""), ("ProjectID", ""), ("DateFrom", ""), ("DateTo", "")]),
        row(&[("EmpID", "2"), ("ProjectID", "P"), ("DateFrom", "2024-01-03"), ("DateTo", "")]),
    ];

    let report = normalize_rows(&rows, &FieldNames::default(), today());
    let employees: Vec<&str> = report
        .records
        .iter()
        .map(|record| record.employee_id.as_str())
        .collect();
    assert_eq!(employees, vec!["1", "2"]);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].row(), 1);
}

#[test]
fn custom_field_names_are_honored() {
    let names = FieldNames {
        employee: "employee".to_string(),
        project: "project".to_string(),
        start: "from".to_string(),
        end: "to".to_string(),
    };
    let input = [
        ("employee", "A"),
        ("project", "X"),
        ("from", "2024/03/01"),
        ("to", "03/10/2024"),
    ];

    let record = normalize_row(0, &input, &names, today()).unwrap();
    assert_eq!(
        record,
        AssignmentRecord::new("A", "X", date(2024, 3, 1), date(2024, 3, 10))
    );
}

#[test]
fn record_serializes_with_tagged_dates() {
    let input = row(&[("EmpID", "1"), ("ProjectID", "P"), ("DateFrom", "junk")]);
    let record = normalize_row(0, &input, &FieldNames::default(), today()).unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["employee_id"], "1");
    assert_eq!(json["start"]["state"], "invalid");
    assert_eq!(json["start"]["value"]["raw"], "junk");
    assert_eq!(json["end"]["state"], "valid");
    assert_eq!(json["end"]["value"], "2024-06-30");
    assert_eq!(json["ongoing"], true);
}
