//! Result rendering for terminal output.

use anyhow::Result;
use pairwork_core::PairResult;

const HEADERS: [&str; 4] = ["Employee ID #1", "Employee ID #2", "Project ID", "Days Worked"];
const NO_DATA: &str = "No data available";

/// Renders a two-line aligned table, or a no-data notice.
pub fn table(pair: Option<&PairResult>) -> String {
    let Some(pair) = pair else {
        return NO_DATA.to_string();
    };

    let cells = [
        pair.employee_a.clone(),
        pair.employee_b.clone(),
        pair.project_id.clone(),
        pair.total_days_worked.to_string(),
    ];
    let widths: Vec<usize> = HEADERS
        .iter()
        .zip(cells.iter())
        .map(|(header, cell)| header.chars().count().max(cell.chars().count()))
        .collect();

    let header_line = join_padded(HEADERS.iter().copied(), &widths);
    let value_line = join_padded(cells.iter().map(String::as_str), &widths);
    format!("{header_line}\n{value_line}")
}

/// Renders the result as JSON, `null` when there is none.
pub fn json(pair: Option<&PairResult>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&pair)?)
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
