//! Per-channel collectors.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use setcalc_core::{ResultKind, ValueFormat};

use crate::channel::ResultConsumer;
use crate::latch::CountdownLatch;
use crate::observer::{PipelineEvent, PipelineObserver};
use crate::report::{ReportEntry, SharedReport};

/// Drains one result channel into the shared report.
pub struct Collector {
    index: usize,
    name: String,
    kind: ResultKind,
    consumer: ResultConsumer,
    report: SharedReport,
    format: ValueFormat,
    collect_done: Arc<CountdownLatch>,
    observer: Arc<dyn PipelineObserver>,
}

impl Collector {
    /// Create a collector for the task at `index`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index: usize,
        name: impl Into<String>,
        kind: ResultKind,
        consumer: ResultConsumer,
        report: SharedReport,
        format: ValueFormat,
        collect_done: Arc<CountdownLatch>,
        observer: Arc<dyn PipelineObserver>,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            kind,
            consumer,
            report,
            format,
            collect_done,
            observer,
        }
    }

    /// Task name this collector reports under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Drain the channel until it is closed and empty, appending one entry
    /// per value. Counts the collect latch down on exit.
    ///
    /// Returns the number of entries appended.
    pub fn run(self) -> usize {
        let _done = self.collect_done.guard();
        let mut appended = 0;

        while let Some(value) = self.consumer.recv() {
            if value.kind() != self.kind {
                warn!(
                    index = self.index,
                    task = %self.name,
                    expected = %self.kind,
                    actual = %value.kind(),
                    "Result kind differs from declared kind"
                );
            }
            self.report
                .append(ReportEntry::new(self.name.clone(), value, self.format));
            appended += 1;
            self.observer.on_event(&PipelineEvent::EntryAppended {
                index: self.index,
                name: self.name.clone(),
            });
        }

        if appended == 0 {
            warn!(index = self.index, task = %self.name, "Channel closed without a value");
        }
        debug!(index = self.index, task = %self.name, appended, "Collector finished");
        appended
    }

    /// Run on a dedicated named thread.
    pub fn spawn(self) -> io::Result<JoinHandle<usize>> {
        thread::Builder::new()
            .name(format!("setcalc-collect-{}", self.index))
            .spawn(move || self.run())
    }
}
