//! Command-line front end for `pairwork_core`.
//!
//! # Responsibility
//! - Decode one CSV file into raw rows and hand them to core.
//! - Render the longest-working pair as a table or JSON.
//!
//! # Invariants
//! - All pairing rules live in core; this binary only does I/O.
//! - Rejected rows are reported on stderr and never change the exit code.

mod csv_source;
mod render;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use log::info;
use pairwork_core::model::row::{
    DEFAULT_EMPLOYEE_FIELD, DEFAULT_END_FIELD, DEFAULT_PROJECT_FIELD, DEFAULT_START_FIELD,
};
use pairwork_core::{
    default_log_level, find_longest_pair, init_logging, parse_record_date, AggregatorOptions,
    FieldNames, RecordDate,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Find the pair of employees who worked together longest on a common project.
#[derive(Debug, Parser)]
#[command(name = "pairwork", version)]
struct Cli {
    /// CSV file with a header row.
    input: PathBuf,

    /// Reference date for assignments without an end date. Defaults to today.
    #[arg(long, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,

    /// Count non-overlapping interval pairs as zero instead of negative days.
    #[arg(long)]
    clamp_negative: bool,

    #[arg(long, default_value = DEFAULT_EMPLOYEE_FIELD)]
    emp_column: String,

    #[arg(long, default_value = DEFAULT_PROJECT_FIELD)]
    project_column: String,

    #[arg(long, default_value = DEFAULT_START_FIELD)]
    from_column: String,

    #[arg(long, default_value = DEFAULT_END_FIELD)]
    to_column: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Enable logging at this level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,

    /// Write rolling log files to this absolute directory instead of stderr.
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_level.is_some() || cli.log_dir.is_some() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, cli.log_dir.as_deref()).map_err(|err| anyhow!(err))?;
    }

    let rows = csv_source::read_rows(&cli.input)
        .with_context(|| format!("failed to read `{}`", cli.input.display()))?;
    let names = FieldNames {
        employee: cli.emp_column,
        project: cli.project_column,
        start: cli.from_column,
        end: cli.to_column,
    };
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let options = AggregatorOptions {
        clamp_negative_overlap: cli.clamp_negative,
    };
    info!(
        "event=cli_run module=cli status=ok rows={} today={} clamp_negative={}",
        rows.len(),
        today,
        options.clamp_negative_overlap
    );

    let outcome = find_longest_pair(&rows, &names, today, options);
    for rejected in &outcome.rejected {
        eprintln!("warning: skipped {rejected}");
    }

    let rendered = match cli.format {
        OutputFormat::Table => render::table(outcome.pair.as_ref()),
        OutputFormat::Json => render::json(outcome.pair.as_ref())?,
    };
    println!("{rendered}");
    Ok(())
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    match parse_record_date(value) {
        RecordDate::Valid(date) => Ok(date),
        RecordDate::Invalid { raw } => Err(format!("`{raw}` is not a recognized calendar date")),
    }
}
