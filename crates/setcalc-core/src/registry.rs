//! Task factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::inputs::BatchInputs;
use crate::operation::Operation;
use crate::task::{SetCalcError, Task, TaskDescriptor};

/// Factory trait for creating tasks.
pub trait TaskFactory: Send + Sync {
    /// Get or create a task by key.
    fn get(&self, key: &str) -> Result<Arc<dyn Task>, SetCalcError>;

    /// List all available task keys, in declaration order.
    fn available(&self) -> Vec<&str>;
}

/// Default factory binding every operation to a shared `BatchInputs`, with
/// lazy creation and a cache.
pub struct DefaultTaskFactory {
    inputs: BatchInputs,
    cache: RwLock<HashMap<Operation, Arc<dyn Task>>>,
}

impl DefaultTaskFactory {
    /// Create a factory over the given inputs.
    #[must_use]
    pub fn new(inputs: BatchInputs) -> Self {
        Self {
            inputs,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The inputs tasks are bound to.
    #[must_use]
    pub fn inputs(&self) -> &BatchInputs {
        &self.inputs
    }

    fn create_task(&self, operation: Operation) -> Result<TaskDescriptor, SetCalcError> {
        let name = operation.display_name();
        let inputs = &self.inputs;
        match operation {
            Operation::Intersection
            | Operation::Union
            | Operation::Difference
            | Operation::SymmetricDifference => TaskDescriptor::binary(
                name,
                operation,
                Arc::clone(&inputs.left),
                Arc::clone(&inputs.right),
            ),
            Operation::IsSubset => TaskDescriptor::binary(
                name,
                operation,
                Arc::clone(&inputs.subset_left),
                Arc::clone(&inputs.subset_right),
            ),
            Operation::Mode => {
                TaskDescriptor::unary(name, operation, Arc::clone(&inputs.mode_sample))
            }
            Operation::Mean
            | Operation::Median
            | Operation::Variance
            | Operation::StandardDeviation => {
                TaskDescriptor::unary(name, operation, Arc::clone(&inputs.sample))
            }
        }
    }
}

impl Default for DefaultTaskFactory {
    fn default() -> Self {
        Self::new(BatchInputs::default())
    }
}

impl TaskFactory for DefaultTaskFactory {
    fn get(&self, key: &str) -> Result<Arc<dyn Task>, SetCalcError> {
        let operation: Operation = key.parse()?;

        if let Some(task) = self.cache.read().get(&operation) {
            return Ok(Arc::clone(task));
        }

        debug!(task = %operation, "creating task descriptor");
        let task: Arc<dyn Task> = Arc::new(self.create_task(operation)?);
        self.cache.write().insert(operation, Arc::clone(&task));
        Ok(task)
    }

    fn available(&self) -> Vec<&str> {
        Operation::ALL.iter().map(|op| op.key()).collect()
    }
}

/// The ten built-in tasks over the built-in sample inputs, in declaration
/// order.
pub fn sample_batch() -> Result<Vec<Arc<dyn Task>>, SetCalcError> {
    let factory = DefaultTaskFactory::default();
    factory
        .available()
        .into_iter()
        .map(|key| factory.get(key))
        .collect()
}
