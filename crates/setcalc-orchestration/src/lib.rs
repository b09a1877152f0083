//! # setcalc-orchestration
//!
//! Concurrent execution of a static task batch: one single-value channel
//! and one collector per task, a dispatcher running tasks on a rayon pool,
//! and a typestate shutdown controller sequencing the two barriers.

pub mod barrier;
pub mod channel;
pub mod collector;
pub mod dispatcher;
pub mod interfaces;
pub mod latch;
pub mod observer;
pub mod options;
pub mod pipeline;
pub mod report;
pub mod task_selection;

pub use barrier::{BarrierPhase, ShutdownController};
pub use interfaces::ReportSink;
pub use options::PipelineOptions;
pub use pipeline::{run_pipeline, run_pipeline_with_observer, PipelineError};
pub use report::{Report, ReportEntry};
