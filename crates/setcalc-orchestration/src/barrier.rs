//! Two-phase shutdown controller.
//!
//! The controller owns the result channels, both completion latches, and
//! the shared report, and walks a fixed sequence of phases:
//!
//! ```text
//! AwaitCompute -> CloseChannels -> AwaitCollect -> Done
//! ```
//!
//! Each phase is a distinct type parameter of `ShutdownController`, and each
//! transition consumes the controller, so channels can only be closed after
//! every task has finished and the report can only be read after every
//! collector has exited.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, info};

use crate::channel::ResultChannel;
use crate::latch::CountdownLatch;
use crate::observer::{PipelineEvent, PipelineObserver};
use crate::report::{Report, SharedReport};

/// Runtime view of the controller's phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarrierPhase {
    /// Waiting for every task to send its result.
    AwaitCompute,
    /// Closing every result channel.
    CloseChannels,
    /// Waiting for every collector to drain and exit.
    AwaitCollect,
    /// Terminal; the report is complete.
    Done,
}

impl fmt::Display for BarrierPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AwaitCompute => "await-compute",
            Self::CloseChannels => "close-channels",
            Self::AwaitCollect => "await-collect",
            Self::Done => "done",
        };
        f.write_str(s)
    }
}

/// Marker: waiting for the compute latch.
#[derive(Debug)]
pub struct AwaitCompute;
/// Marker: all tasks returned; channels still open.
#[derive(Debug)]
pub struct CloseChannels;
/// Marker: channels closed; waiting for the collect latch.
#[derive(Debug)]
pub struct AwaitCollect;
/// Marker: both barriers passed.
#[derive(Debug)]
pub struct Done;

/// Phase markers and their runtime tag.
pub trait Phase: sealed::Sealed {
    /// The runtime tag of this phase.
    const PHASE: BarrierPhase;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::AwaitCompute {}
    impl Sealed for super::CloseChannels {}
    impl Sealed for super::AwaitCollect {}
    impl Sealed for super::Done {}
}

impl Phase for AwaitCompute {
    const PHASE: BarrierPhase = BarrierPhase::AwaitCompute;
}
impl Phase for CloseChannels {
    const PHASE: BarrierPhase = BarrierPhase::CloseChannels;
}
impl Phase for AwaitCollect {
    const PHASE: BarrierPhase = BarrierPhase::AwaitCollect;
}
impl Phase for Done {
    const PHASE: BarrierPhase = BarrierPhase::Done;
}

/// Owner of the pipeline's lifecycle state.
pub struct ShutdownController<S: Phase> {
    width: usize,
    channels: Vec<ResultChannel>,
    compute: Arc<CountdownLatch>,
    collect: Arc<CountdownLatch>,
    report: SharedReport,
    observer: Arc<dyn PipelineObserver>,
    _phase: PhantomData<S>,
}

impl<S: Phase> ShutdownController<S> {
    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> BarrierPhase {
        S::PHASE
    }

    /// Number of tasks (and channels, and collectors) this controller
    /// tracks.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    fn advance<T: Phase>(self) -> ShutdownController<T> {
        self.observer.on_event(&PipelineEvent::PhaseEntered(T::PHASE));
        ShutdownController {
            width: self.width,
            channels: self.channels,
            compute: self.compute,
            collect: self.collect,
            report: self.report,
            observer: self.observer,
            _phase: PhantomData,
        }
    }
}

impl ShutdownController<AwaitCompute> {
    /// Create a controller for `width` tasks, with one open channel per
    /// task and both latches set to `width`.
    #[must_use]
    pub fn new(width: usize, observer: Arc<dyn PipelineObserver>) -> Self {
        observer.on_event(&PipelineEvent::PhaseEntered(BarrierPhase::AwaitCompute));
        Self {
            width,
            channels: (0..width).map(|_| ResultChannel::new()).collect(),
            compute: Arc::new(CountdownLatch::new(width)),
            collect: Arc::new(CountdownLatch::new(width)),
            report: SharedReport::new(),
            observer,
            _phase: PhantomData,
        }
    }

    /// The result channels, indexed like the tasks.
    #[must_use]
    pub fn channels(&self) -> &[ResultChannel] {
        &self.channels
    }

    /// Latch counted down once per finished task.
    #[must_use]
    pub fn compute_latch(&self) -> Arc<CountdownLatch> {
        Arc::clone(&self.compute)
    }

    /// Latch counted down once per exited collector.
    #[must_use]
    pub fn collect_latch(&self) -> Arc<CountdownLatch> {
        Arc::clone(&self.collect)
    }

    /// Handle collectors append through.
    #[must_use]
    pub fn report(&self) -> SharedReport {
        self.report.clone()
    }

    /// Block until every task has finished.
    pub fn await_compute(self) -> ShutdownController<CloseChannels> {
        debug!(outstanding = self.compute.remaining(), "Waiting for tasks");
        self.compute.wait();
        info!(tasks = self.width, "All tasks computed");
        self.advance()
    }
}

impl ShutdownController<CloseChannels> {
    /// Close every channel exactly once, then discard them.
    pub fn close_channels(mut self) -> ShutdownController<AwaitCollect> {
        let closed = self.channels.iter().filter(|ch| ch.close()).count();
        debug!(closed, "Result channels closed");
        self.channels.clear();
        self.advance()
    }
}

impl ShutdownController<AwaitCollect> {
    /// Block until every collector has exited.
    pub fn await_collect(self) -> ShutdownController<Done> {
        debug!(outstanding = self.collect.remaining(), "Waiting for collectors");
        self.collect.wait();
        info!(entries = self.report.len(), "All collectors finished");
        self.advance()
    }
}

impl ShutdownController<Done> {
    /// The finished report.
    #[must_use]
    pub fn into_report(self) -> Report {
        self.report.snapshot()
    }
}
