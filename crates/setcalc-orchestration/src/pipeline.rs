//! Fan-out/fan-in pipeline: collectors, dispatch, and the shutdown barrier.

use std::sync::Arc;
use std::time::Instant;

use rayon::ThreadPoolBuilder;
use tracing::{debug, error, info, warn};

use setcalc_core::Task;

use crate::barrier::ShutdownController;
use crate::collector::Collector;
use crate::dispatcher::dispatch;
use crate::observer::{NoOpObserver, PipelineObserver};
use crate::options::PipelineOptions;
use crate::report::Report;

/// Error type for pipeline runs.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The compute pool could not be built.
    #[error("failed to build compute pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A collector thread could not be spawned.
    #[error("failed to spawn collector for {name}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A collector thread panicked.
    #[error("collector for {0} panicked")]
    CollectorPanicked(String),
}

/// Run every task concurrently and collect the results into a report.
///
/// Entry order is the order in which collectors appended, which varies
/// between runs.
pub fn run_pipeline(
    tasks: &[Arc<dyn Task>],
    opts: &PipelineOptions,
) -> Result<Report, PipelineError> {
    run_pipeline_with_observer(tasks, opts, Arc::new(NoOpObserver::new()))
}

/// Run the pipeline, reporting lifecycle events to `observer`.
pub fn run_pipeline_with_observer(
    tasks: &[Arc<dyn Task>],
    opts: &PipelineOptions,
    observer: Arc<dyn PipelineObserver>,
) -> Result<Report, PipelineError> {
    let start = Instant::now();
    let opts = opts.clone().normalize();
    let pool = ThreadPoolBuilder::new()
        .num_threads(opts.compute_threads)
        .thread_name(|i| format!("setcalc-compute-{i}"))
        .panic_handler(|_| error!("Task panicked; its result is lost"))
        .build()?;

    let controller = ShutdownController::new(tasks.len(), Arc::clone(&observer));
    let format = opts.value_format();

    // Collectors must be waiting before any task can finish.
    let mut handles = Vec::with_capacity(tasks.len());
    for (index, (task, channel)) in tasks.iter().zip(controller.channels()).enumerate() {
        let collector = Collector::new(
            index,
            task.name(),
            task.kind(),
            channel.consumer(),
            controller.report(),
            format,
            controller.collect_latch(),
            Arc::clone(&observer),
        );
        let handle = collector.spawn().map_err(|source| PipelineError::Spawn {
            name: task.name().to_string(),
            source,
        })?;
        handles.push((task.name().to_string(), handle));
    }
    debug!(collectors = handles.len(), "Collectors started");

    dispatch(
        &pool,
        tasks,
        controller.channels(),
        &controller.compute_latch(),
        &observer,
    );

    let done = controller
        .await_compute()
        .close_channels()
        .await_collect();

    for (name, handle) in handles {
        handle
            .join()
            .map_err(|_| PipelineError::CollectorPanicked(name))?;
    }

    let report = done.into_report();
    if report.len() != tasks.len() {
        warn!(
            expected = tasks.len(),
            actual = report.len(),
            "Report is missing entries"
        );
    }
    info!(
        entries = report.len(),
        elapsed = ?start.elapsed(),
        "Pipeline complete"
    );
    Ok(report)
}
