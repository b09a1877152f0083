//! Task selection logic.

use std::sync::Arc;

use setcalc_core::{SetCalcError, Task, TaskFactory};

/// Resolve a selection of `"all"` or a comma-separated list of task keys.
///
/// Duplicate keys are dropped, keeping the first occurrence.
pub fn select_tasks(
    selection: &str,
    factory: &dyn TaskFactory,
) -> Result<Vec<Arc<dyn Task>>, SetCalcError> {
    let selection = selection.trim();
    if selection.eq_ignore_ascii_case("all") {
        return factory
            .available()
            .into_iter()
            .map(|key| factory.get(key))
            .collect();
    }

    let mut tasks: Vec<Arc<dyn Task>> = Vec::new();
    for key in selection.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        let task = factory.get(key)?;
        if !tasks.iter().any(|t| Arc::ptr_eq(t, &task)) {
            tasks.push(task);
        }
    }
    if tasks.is_empty() {
        return Err(SetCalcError::Config("no tasks selected".into()));
    }
    Ok(tasks)
}
