//! Caller-supplied input samples for a batch.

use std::sync::Arc;

use crate::constants::{
    SAMPLE_LEFT, SAMPLE_MODE, SAMPLE_RIGHT, SAMPLE_STATS, SAMPLE_SUBSET_LEFT, SAMPLE_SUBSET_RIGHT,
};
use crate::task::SetCalcError;
use crate::Element;

/// Input samples shared by the tasks of one batch.
///
/// The defaults are the built-in sample sets.
#[derive(Debug, Clone)]
pub struct BatchInputs {
    /// Left operand of intersection, union, and both differences.
    pub left: Arc<[Element]>,
    /// Right operand of intersection, union, and both differences.
    pub right: Arc<[Element]>,
    /// Candidate subset.
    pub subset_left: Arc<[Element]>,
    /// Candidate superset.
    pub subset_right: Arc<[Element]>,
    /// Sample for mean, median, variance, and standard deviation.
    pub sample: Arc<[Element]>,
    /// Sample for the mode.
    pub mode_sample: Arc<[Element]>,
}

impl Default for BatchInputs {
    fn default() -> Self {
        Self {
            left: Arc::from(SAMPLE_LEFT.as_slice()),
            right: Arc::from(SAMPLE_RIGHT.as_slice()),
            subset_left: Arc::from(SAMPLE_SUBSET_LEFT.as_slice()),
            subset_right: Arc::from(SAMPLE_SUBSET_RIGHT.as_slice()),
            sample: Arc::from(SAMPLE_STATS.as_slice()),
            mode_sample: Arc::from(SAMPLE_MODE.as_slice()),
        }
    }
}

/// Parse a comma- or whitespace-separated list of integers.
///
/// An empty or blank string yields an empty list.
///
/// # Example
/// ```
/// use setcalc_core::inputs::parse_elements;
///
/// assert_eq!(parse_elements("1, 2,3").unwrap(), vec![1, 2, 3]);
/// assert!(parse_elements("").unwrap().is_empty());
/// assert!(parse_elements("1,x").is_err());
/// ```
pub fn parse_elements(s: &str) -> Result<Vec<Element>, SetCalcError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<Element>()
                .map_err(|e| SetCalcError::InvalidElements {
                    input: s.to_string(),
                    reason: format!("'{part}': {e}"),
                })
        })
        .collect()
}
