//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};

use setcalc_cli::OutputFormat;
use setcalc_core::inputs::parse_elements;
use setcalc_core::{
    BatchInputs, Element, SetCalcError, DEFAULT_FLOAT_PRECISION, MAX_FLOAT_PRECISION,
};
use setcalc_orchestration::PipelineOptions;

/// Order in which report entries are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportOrder {
    /// The order collectors appended in; varies between runs.
    #[default]
    Arrival,
    /// Sorted by task name.
    Name,
    /// The order tasks were selected in.
    Declared,
}

/// SetCalc-rs: concurrent set-algebra and statistics report.
#[derive(Parser, Debug)]
#[command(name = "setcalc", version, about)]
pub struct AppConfig {
    /// Tasks to run: "all" or a comma-separated list of task keys.
    #[arg(short, long, default_value = "all", env = "SETCALC_TASKS")]
    pub tasks: String,

    /// Left operand of the set operations.
    #[arg(long, default_value = "1,2,3", env = "SETCALC_LEFT")]
    pub left: String,

    /// Right operand of the set operations.
    #[arg(long, default_value = "2,3,4", env = "SETCALC_RIGHT")]
    pub right: String,

    /// Candidate subset for the subset check.
    #[arg(long, default_value = "1,2", env = "SETCALC_SUBSET_LEFT")]
    pub subset_left: String,

    /// Candidate superset for the subset check.
    #[arg(long, default_value = "1,2,3", env = "SETCALC_SUBSET_RIGHT")]
    pub subset_right: String,

    /// Sample for mean, median, variance, and standard deviation.
    #[arg(long, default_value = "1,2,3,4,5", env = "SETCALC_SAMPLE")]
    pub sample: String,

    /// Sample for the mode.
    #[arg(long, default_value = "1,2,2,3,3,3,4", env = "SETCALC_MODE_SAMPLE")]
    pub mode_sample: String,

    /// Fractional digits for float results.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_FLOAT_PRECISION,
        value_parser = clap::value_parser!(u16).range(..=i64::from(MAX_FLOAT_PRECISION))
    )]
    pub precision: u16,

    /// Compute threads (0 = one per core).
    #[arg(long, default_value = "0", env = "SETCALC_THREADS")]
    pub threads: usize,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Order of report entries.
    #[arg(long, value_enum, default_value_t = ReportOrder::Arrival)]
    pub order: ReportOrder,

    /// Also write the report to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List available task keys and exit.
    #[arg(long)]
    pub list: bool,

    /// Verbose output (debug logging).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only print values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the element lists into batch inputs.
    pub fn batch_inputs(&self) -> Result<BatchInputs, SetCalcError> {
        let parse = |s: &str| -> Result<Arc<[Element]>, SetCalcError> {
            parse_elements(s).map(Arc::from)
        };
        Ok(BatchInputs {
            left: parse(&self.left)?,
            right: parse(&self.right)?,
            subset_left: parse(&self.subset_left)?,
            subset_right: parse(&self.subset_right)?,
            sample: parse(&self.sample)?,
            mode_sample: parse(&self.mode_sample)?,
        })
    }

    /// Pipeline options from the flags.
    #[must_use]
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            compute_threads: self.threads,
            float_precision: self.precision,
        }
        .normalize()
    }
}
