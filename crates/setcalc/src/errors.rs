//! Error handling and exit codes.

use std::path::PathBuf;

use setcalc_core::constants::exit_codes;
use setcalc_core::SetCalcError;
use setcalc_orchestration::PipelineError;

/// Application-level failures outside the libraries.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The report could not be written.
    #[error("failed to write report to {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<SetCalcError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else if err.downcast_ref::<PipelineError>().is_some() {
        exit_codes::ERROR_PIPELINE
    } else {
        exit_codes::ERROR_GENERIC
    }
}
