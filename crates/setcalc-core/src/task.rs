//! Task trait and the `TaskDescriptor` implementation.
//!
//! `Task` is the trait consumed by orchestration. `TaskDescriptor` binds an
//! `Operation` to its immutable inputs and is the only implementation the
//! registry hands out.

use std::sync::Arc;

use crate::operation::{Arity, Operation};
use crate::value::{ResultKind, ResultValue};
use crate::{sets, stats, Element};

/// Error type for task registration and configuration.
#[derive(Debug, thiserror::Error)]
pub enum SetCalcError {
    /// The task key is not known to the registry.
    #[error("unknown task: {0}")]
    UnknownTask(String),

    /// Inputs do not match the operation's arity.
    #[error("{operation} expects {expected} input(s), got {actual}")]
    Arity {
        operation: Operation,
        expected: usize,
        actual: usize,
    },

    /// An element list could not be parsed.
    #[error("invalid element list '{input}': {reason}")]
    InvalidElements { input: String, reason: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Public trait for pipeline tasks.
///
/// Implementations must be pure: `compute` never blocks, never mutates
/// shared state, and always returns a value of kind `kind()`.
pub trait Task: Send + Sync {
    /// Label used for the report entry.
    fn name(&self) -> &str;

    /// Kind of value `compute` returns.
    fn kind(&self) -> ResultKind;

    /// Run the computation.
    fn compute(&self) -> ResultValue;
}

/// Immutable inputs of a task.
#[derive(Debug, Clone)]
pub enum TaskInputs {
    /// A single sample.
    Unary(Arc<[Element]>),
    /// Left and right operands.
    Binary(Arc<[Element]>, Arc<[Element]>),
}

impl TaskInputs {
    /// Number of input sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_, _) => 2,
        }
    }

    /// Always false; present for clippy's `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    fn arity(&self) -> Arity {
        match self {
            Self::Unary(_) => Arity::Unary,
            Self::Binary(_, _) => Arity::Binary,
        }
    }
}

/// A named operation bound to its inputs.
#[derive(Debug, Clone)]
pub struct TaskDescriptor {
    name: String,
    operation: Operation,
    inputs: TaskInputs,
    kind: ResultKind,
}

impl TaskDescriptor {
    /// Create a descriptor, checking the inputs against the operation's
    /// arity.
    pub fn new(
        name: impl Into<String>,
        operation: Operation,
        inputs: TaskInputs,
    ) -> Result<Self, SetCalcError> {
        if inputs.arity() != operation.arity() {
            return Err(SetCalcError::Arity {
                operation,
                expected: match operation.arity() {
                    Arity::Unary => 1,
                    Arity::Binary => 2,
                },
                actual: inputs.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            operation,
            inputs,
            kind: operation.result_kind(),
        })
    }

    /// Descriptor for a one-input operation.
    pub fn unary(
        name: impl Into<String>,
        operation: Operation,
        sample: impl Into<Arc<[Element]>>,
    ) -> Result<Self, SetCalcError> {
        Self::new(name, operation, TaskInputs::Unary(sample.into()))
    }

    /// Descriptor for a two-input operation.
    pub fn binary(
        name: impl Into<String>,
        operation: Operation,
        left: impl Into<Arc<[Element]>>,
        right: impl Into<Arc<[Element]>>,
    ) -> Result<Self, SetCalcError> {
        Self::new(
            name,
            operation,
            TaskInputs::Binary(left.into(), right.into()),
        )
    }

    /// The bound operation.
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The bound inputs.
    #[must_use]
    pub fn inputs(&self) -> &TaskInputs {
        &self.inputs
    }
}

impl Task for TaskDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ResultKind {
        self.kind
    }

    fn compute(&self) -> ResultValue {
        match (&self.inputs, self.operation) {
            (TaskInputs::Binary(a, b), Operation::Intersection) => {
                ResultValue::Sequence(sets::intersection(a, b))
            }
            (TaskInputs::Binary(a, b), Operation::Union) => {
                ResultValue::Sequence(sets::union(a, b))
            }
            (TaskInputs::Binary(a, b), Operation::Difference) => {
                ResultValue::Sequence(sets::difference(a, b))
            }
            (TaskInputs::Binary(a, b), Operation::SymmetricDifference) => {
                ResultValue::Sequence(sets::symmetric_difference(a, b))
            }
            (TaskInputs::Binary(a, b), Operation::IsSubset) => {
                ResultValue::Boolean(sets::is_subset(a, b))
            }
            (TaskInputs::Unary(x), Operation::Mean) => ResultValue::Float(stats::mean(x)),
            (TaskInputs::Unary(x), Operation::Median) => ResultValue::Float(stats::median(x)),
            (TaskInputs::Unary(x), Operation::Mode) => ResultValue::Sequence(stats::mode(x)),
            (TaskInputs::Unary(x), Operation::Variance) => {
                ResultValue::Float(stats::variance(x))
            }
            (TaskInputs::Unary(x), Operation::StandardDeviation) => {
                ResultValue::Float(stats::standard_deviation(x))
            }
            // Arity is checked in `new`.
            _ => unreachable!("arity of {} checked at construction", self.operation),
        }
    }
}
