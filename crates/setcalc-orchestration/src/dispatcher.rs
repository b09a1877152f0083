//! Launches every task as an independent job on the compute pool.

use std::sync::Arc;

use rayon::ThreadPool;
use tracing::warn;

use setcalc_core::Task;

use crate::channel::ResultChannel;
use crate::latch::CountdownLatch;
use crate::observer::{PipelineEvent, PipelineObserver};

/// Spawn one job per task. Each job computes, sends its single result on
/// the channel with the same index, and counts `compute_done` down.
///
/// Returns immediately; completion is observed through the latch. The
/// countdown is guarded, so a job that panics still releases the barrier
/// and leaves its channel without a value. A task with no channel at its
/// index, or whose channel is already closed, is skipped and counted down
/// at once.
pub fn dispatch(
    pool: &ThreadPool,
    tasks: &[Arc<dyn Task>],
    channels: &[ResultChannel],
    compute_done: &Arc<CountdownLatch>,
    observer: &Arc<dyn PipelineObserver>,
) {
    for (index, task) in tasks.iter().enumerate() {
        let guard = compute_done.guard();
        let Some(channel) = channels.get(index) else {
            warn!(index, task = task.name(), "No channel for task");
            continue;
        };
        let Some(producer) = channel.producer() else {
            warn!(index, task = task.name(), "Channel closed before dispatch");
            continue;
        };
        let task = Arc::clone(task);
        let observer = Arc::clone(observer);

        pool.spawn(move || {
            let _done = guard;
            let value = task.compute();
            debug_assert_eq!(value.kind(), task.kind(), "task {} kind", task.name());
            if !producer.send(value) {
                warn!(index, task = task.name(), "Result dropped: no consumer");
            }
            observer.on_event(&PipelineEvent::TaskComputed {
                index,
                name: task.name().to_string(),
            });
        });
    }
}
