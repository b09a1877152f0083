//! Report formatting and file output.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use setcalc_core::{ResultKind, ResultValue};
use setcalc_orchestration::report::{Report, ReportEntry};

/// Output format for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `name: value` line per entry.
    #[default]
    Text,
    /// A JSON array of entries.
    Json,
}

/// Render one entry as `name: value`.
#[must_use]
pub fn format_entry(entry: &ReportEntry) -> String {
    format!("{}: {}", entry.name, entry.text)
}

/// Render the report as text, one entry per line.
#[must_use]
pub fn format_text(report: &Report) -> String {
    let mut out = String::new();
    for entry in report {
        out.push_str(&format_entry(entry));
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    kind: ResultKind,
    text: &'a str,
    value: &'a ResultValue,
}

/// Render the report as a pretty-printed JSON array.
///
/// Non-finite floats serialize as `null`.
pub fn format_json(report: &Report) -> serde_json::Result<String> {
    let entries: Vec<JsonEntry<'_>> = report
        .iter()
        .map(|e| JsonEntry {
            name: &e.name,
            kind: e.kind(),
            text: &e.text,
            value: &e.value,
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

/// Render the report in the given format.
pub fn format_report(report: &Report, format: OutputFormat) -> io::Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(report)),
        OutputFormat::Json => format_json(report).map_err(io::Error::other),
    }
}

/// Write a rendered report to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: impl AsRef<Path>, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        writeln!(file)?;
    }
    Ok(())
}
