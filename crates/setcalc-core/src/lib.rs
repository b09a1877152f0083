//! # setcalc-core
//!
//! Leaf computations for the SetCalc pipeline: set algebra and descriptive
//! statistics over integer sequences, the typed result values they produce,
//! and the registry that binds operations to their inputs.

pub mod constants;
pub mod inputs;
pub mod operation;
pub mod registry;
pub mod sets;
pub mod stats;
pub mod task;
pub mod value;

// Re-exports
pub use constants::{exit_codes, DEFAULT_FLOAT_PRECISION, MAX_FLOAT_PRECISION};
pub use inputs::BatchInputs;
pub use operation::{Arity, Operation};
pub use registry::{sample_batch, DefaultTaskFactory, TaskFactory};
pub use task::{SetCalcError, Task, TaskDescriptor, TaskInputs};
pub use value::{ResultKind, ResultValue, ValueFormat};

/// Element type of every input sequence.
pub type Element = i64;

/// Run a single operation synchronously over the built-in sample inputs.
///
/// This is a convenience for simple use cases; the pipeline runs tasks
/// concurrently through `setcalc-orchestration`.
///
/// # Example
/// ```
/// use setcalc_core::{compute_sample, Operation, ResultValue};
///
/// assert_eq!(
///     compute_sample(Operation::Intersection),
///     ResultValue::Sequence(vec![2, 3])
/// );
/// ```
#[must_use]
pub fn compute_sample(operation: Operation) -> ResultValue {
    let factory = DefaultTaskFactory::default();
    factory
        .get(operation.key())
        .expect("built-in operations always register")
        .compute()
}
