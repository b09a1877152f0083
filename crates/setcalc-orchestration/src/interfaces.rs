//! Orchestration interfaces.

use std::io;

use crate::report::Report;

/// Destination for a finished report.
pub trait ReportSink: Send + Sync {
    /// Present the report.
    fn present(&self, report: &Report) -> io::Result<()>;
}

/// Sink that discards the report.
pub struct NullSink;

impl ReportSink for NullSink {
    fn present(&self, _report: &Report) -> io::Result<()> {
        Ok(())
    }
}
