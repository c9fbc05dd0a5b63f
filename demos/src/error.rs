//! Errors raised while running a demonstration.

use gatelab_hal::HalError;
use gatelab_ir::IrError;
use thiserror::Error;

/// A demonstration failed; the backend's error is passed through unchanged.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The backend rejected or failed the submission.
    #[error(transparent)]
    Backend(#[from] HalError),

    /// The gate sequence could not be built.
    #[error(transparent)]
    Circuit(#[from] IrError),
}

/// Result type for demonstrations.
pub type DemoResult<T> = Result<T, DemoError>;
