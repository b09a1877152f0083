//! Pipeline options.

use setcalc_core::{ValueFormat, DEFAULT_FLOAT_PRECISION};

/// Options for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Compute pool size (0 = one thread per available core).
    pub compute_threads: usize,
    /// Fractional digits for float results.
    pub float_precision: u16,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            compute_threads: 0,
            float_precision: DEFAULT_FLOAT_PRECISION,
        }
    }
}

impl PipelineOptions {
    /// Normalize options, resolving a zero thread count to the available
    /// parallelism.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.compute_threads == 0 {
            self.compute_threads = std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .unwrap_or(1);
        }
        self
    }

    /// Value format handed to the collectors.
    #[must_use]
    pub fn value_format(&self) -> ValueFormat {
        ValueFormat {
            float_precision: self.float_precision,
        }
    }
}
