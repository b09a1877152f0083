//! Report sinks for the console and files.

use std::io::{self, Write};
use std::path::PathBuf;

use setcalc_orchestration::interfaces::ReportSink;
use setcalc_orchestration::report::Report;

use crate::output::{format_json, format_report, write_to_file, OutputFormat};
use crate::ui::styled_label;

/// Prints the report to stdout.
pub struct ConsoleSink {
    format: OutputFormat,
    quiet: bool,
}

impl ConsoleSink {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Write the report to `out`, returning the first write error.
    pub fn write_report(&self, out: &mut dyn Write, report: &Report) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", format_json(report).map_err(io::Error::other)?)?;
            }
            OutputFormat::Text if self.quiet => {
                for entry in report {
                    writeln!(out, "{}", entry.text)?;
                }
            }
            OutputFormat::Text => {
                for entry in report {
                    writeln!(out, "{}: {}", styled_label(&entry.name), entry.text)?;
                }
            }
        }
        out.flush()
    }
}

impl ReportSink for ConsoleSink {
    fn present(&self, report: &Report) -> io::Result<()> {
        let mut out = io::stdout().lock();
        self.write_report(&mut out, report)
    }
}

/// Writes the report to a file.
pub struct FileSink {
    path: PathBuf,
    format: OutputFormat,
}

impl FileSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }
}

impl ReportSink for FileSink {
    fn present(&self, report: &Report) -> io::Result<()> {
        let contents = format_report(report, self.format)?;
        write_to_file(&self.path, &contents)
    }
}
