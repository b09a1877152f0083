//! Constants for task sample inputs, formatting, and process exit codes.

/// Default number of fractional digits used when rendering float results.
pub const DEFAULT_FLOAT_PRECISION: u16 = 6;

/// Largest float precision the command line accepts.
pub const MAX_FLOAT_PRECISION: u16 = 64;

/// Left operand of the sample set operations.
pub const SAMPLE_LEFT: [i64; 3] = [1, 2, 3];

/// Right operand of the sample set operations.
pub const SAMPLE_RIGHT: [i64; 3] = [2, 3, 4];

/// Candidate subset for the sample subset check.
pub const SAMPLE_SUBSET_LEFT: [i64; 2] = [1, 2];

/// Candidate superset for the sample subset check.
pub const SAMPLE_SUBSET_RIGHT: [i64; 3] = [1, 2, 3];

/// Sample input for mean, median, variance, and standard deviation.
pub const SAMPLE_STATS: [i64; 5] = [1, 2, 3, 4, 5];

/// Sample input for the mode.
pub const SAMPLE_MODE: [i64; 7] = [1, 2, 2, 3, 3, 3, 4];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The pipeline could not be started or a collector failed.
    pub const ERROR_PIPELINE: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
