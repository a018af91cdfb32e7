use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn pairwork() -> Command {
    Command::cargo_bin("pairwork").unwrap()
}

#[test]
fn prints_table_for_longest_pair() {
    let file = csv_file(
        "EmpID,ProjectID,DateFrom,DateTo\n\
         143,12,2013-11-01,2014-01-05\n\
         218,10,2012-05-16,NULL\n\
         143,10,2009-01-01,2011-04-27\n\
         218,12,2013-12-01,2014-03-01\n",
    );

    pairwork()
        .arg(file.path())
        .args(["--today", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Employee ID #1 | Employee ID #2 | Project ID | Days Worked",
        ))
        .stdout(predicate::str::contains("143            | 218            | 12         | 35"));
}

#[test]
fn prints_json_and_honors_custom_columns() {
    let file = csv_file(
        "emp,project,from,to\n\
         E2,P1,2024-01-05,2024-01-15\n\
         E1,P1,2024-01-01,2024-01-10\n",
    );

    let output = pairwork()
        .arg(file.path())
        .args(["--today", "2024-06-01", "--format", "json"])
        .args(["--emp-column", "emp", "--project-column", "project"])
        .args(["--from-column", "from", "--to-column", "to"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["employee_a"], "E1");
    assert_eq!(json["employee_b"], "E2");
    assert_eq!(json["project_id"], "P1");
    assert_eq!(json["total_days_worked"], 5);
}

#[test]
fn reports_no_data_and_skipped_rows() {
    let file = csv_file(
        "EmpID,ProjectID,DateFrom,DateTo\n\
         E1,P1,2024-01-01,2024-01-05\n\
         ,,,\n\
         E2,P1,2024-02-01,2024-02-05\n",
    );

    pairwork()
        .arg(file.path())
        .args(["--today", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available"))
        .stderr(predicate::str::contains(
            "warning: skipped row 1: field `EmpID` must not be empty",
        ));
}

#[test]
fn clamp_flag_recovers_pair_hidden_by_negative_overlap() {
    let file = csv_file(
        "EmpID,ProjectID,DateFrom,DateTo\n\
         E1,P1,2024-01-01,2024-01-11\n\
         E2,P1,2024-01-01,2024-01-11\n\
         E2,P1,2025-01-01,2025-01-02\n",
    );

    pairwork()
        .arg(file.path())
        .args(["--today", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available"));

    pairwork()
        .arg(file.path())
        .args(["--today", "2025-06-01", "--clamp-negative", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_days_worked\": 10"));
}

#[test]
fn rejects_unparseable_reference_date() {
    let file = csv_file("EmpID,ProjectID,DateFrom,DateTo\n");

    pairwork()
        .arg(file.path())
        .args(["--today", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a recognized calendar date"));
}

#[test]
fn missing_input_file_fails_with_context() {
    pairwork()
        .arg("/nonexistent/pairwork/input.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
