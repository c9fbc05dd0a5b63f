//! Error types for the AWS Braket adapter.

use gatelab_hal::HalError;
use thiserror::Error;

/// Result type for Braket operations.
pub type BraketResult<T> = Result<T, BraketError>;

/// Errors that can occur when using AWS Braket.
#[derive(Debug, Error)]
pub enum BraketError {
    /// Missing S3 bucket configuration.
    #[error("S3 bucket not configured. Set GATELAB_BRAKET_S3_BUCKET environment variable.")]
    MissingS3Bucket,

    /// Malformed task ARN.
    #[error("Invalid task ARN: {0}")]
    InvalidTaskArn(String),

    /// Braket API error.
    #[error("Braket API error: {0}")]
    BraketApi(String),

    /// S3 error.
    #[error("S3 error: {0}")]
    S3Error(String),

    /// Task not found.
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// Task failed.
    #[error("Task failed: {0}")]
    TaskFailed(String),

    /// Task was cancelled.
    #[error("Task was cancelled: {0}")]
    TaskCancelled(String),

    /// Circuit conversion error.
    #[error("Circuit conversion error: {0}")]
    CircuitError(String),

    /// Timeout waiting for task.
    #[error("Timeout waiting for task {0}")]
    Timeout(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Result parsing error.
    #[error("Failed to parse task result: {0}")]
    ResultParseError(String),
}

impl From<BraketError> for HalError {
    fn from(e: BraketError) -> Self {
        match e {
            BraketError::MissingS3Bucket | BraketError::InvalidTaskArn(_) => {
                HalError::Configuration(e.to_string())
            }
            BraketError::BraketApi(msg) => HalError::SubmissionFailed(msg),
            BraketError::TaskFailed(msg) => HalError::JobFailed(msg),
            BraketError::TaskCancelled(_) => HalError::JobCancelled,
            BraketError::Timeout(task) => HalError::Timeout(task),
            BraketError::CircuitError(msg) => HalError::InvalidCircuit(msg),
            BraketError::JsonError(err) => HalError::Serialization(err),
            _ => HalError::Backend(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_s3_bucket_display() {
        let err = BraketError::MissingS3Bucket;
        assert!(err.to_string().contains("GATELAB_BRAKET_S3_BUCKET"));
    }

    #[test]
    fn test_task_not_found_display() {
        let err = BraketError::TaskNotFound("arn:aws:braket:us-east-1:123:quantum-task/abc".into());
        assert!(err.to_string().contains("abc"));
    }

    // -- HalError conversion tests --

    #[test]
    fn test_missing_s3_to_hal_configuration() {
        let hal: HalError = BraketError::MissingS3Bucket.into();
        assert!(matches!(hal, HalError::Configuration(_)));
    }

    #[test]
    fn test_api_error_to_hal_submission() {
        let hal: HalError = BraketError::BraketApi("AccessDeniedException".into()).into();
        assert!(matches!(hal, HalError::SubmissionFailed(msg) if msg == "AccessDeniedException"));
    }

    #[test]
    fn test_task_failed_to_hal() {
        let hal: HalError = BraketError::TaskFailed("boom".into()).into();
        assert!(matches!(hal, HalError::JobFailed(msg) if msg == "boom"));
    }

    #[test]
    fn test_task_cancelled_to_hal() {
        let hal: HalError = BraketError::TaskCancelled("user".into()).into();
        assert!(matches!(hal, HalError::JobCancelled));
    }

    #[test]
    fn test_timeout_to_hal() {
        let hal: HalError = BraketError::Timeout("t1".into()).into();
        assert!(matches!(hal, HalError::Timeout(task) if task == "t1"));
    }

    #[test]
    fn test_circuit_error_to_hal() {
        let hal: HalError = BraketError::CircuitError("bad gate".into()).into();
        assert!(matches!(hal, HalError::InvalidCircuit(_)));
    }

    #[test]
    fn test_s3_error_to_hal_backend() {
        let hal: HalError = BraketError::S3Error("NoSuchKey".into()).into();
        assert!(matches!(hal, HalError::Backend(_)));
    }
}
