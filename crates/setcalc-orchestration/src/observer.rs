//! Lifecycle observers.
//!
//! The pipeline reports barrier transitions, task completions, and report
//! appends to a `PipelineObserver`. Observers are called from compute
//! workers, collector threads, and the controller concurrently.

use crossbeam_channel::Sender;
use tracing::{debug, info};

use crate::barrier::BarrierPhase;

/// A lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// The controller entered a barrier phase.
    PhaseEntered(BarrierPhase),
    /// A task finished computing and sent its result.
    TaskComputed { index: usize, name: String },
    /// A collector appended an entry to the report.
    EntryAppended { index: usize, name: String },
}

/// Observer trait for pipeline lifecycle events.
pub trait PipelineObserver: Send + Sync {
    /// Receive an event.
    fn on_event(&self, event: &PipelineEvent);
}

/// Observer that forwards events through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<PipelineEvent>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<PipelineEvent>) -> Self {
        Self { sender }
    }
}

impl PipelineObserver for ChannelObserver {
    fn on_event(&self, event: &PipelineEvent) {
        // A full or disconnected channel drops the event.
        let _ = self.sender.try_send(event.clone());
    }
}

/// Observer that logs events through `tracing`.
pub struct LoggingObserver;

impl LoggingObserver {
    /// Create a new logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineObserver for LoggingObserver {
    fn on_event(&self, event: &PipelineEvent) {
        match event {
            PipelineEvent::PhaseEntered(phase) => info!(phase = %phase, "Barrier phase"),
            PipelineEvent::TaskComputed { index, name } => {
                debug!(index, task = %name, "Task computed");
            }
            PipelineEvent::EntryAppended { index, name } => {
                debug!(index, task = %name, "Entry appended");
            }
        }
    }
}

/// Null object pattern: ignores every event.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineObserver for NoOpObserver {
    fn on_event(&self, _event: &PipelineEvent) {}
}
