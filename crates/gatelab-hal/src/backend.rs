//! Backend trait.
//!
//! ```text
//!   submit(circuit, shots) ──→ ExecutionResult
//!        (async, resolves once the counts are available)
//! ```
//!
//! A backend is a capability, not a job manager: queueing, polling and
//! result retrieval are the provider's business and stay behind `submit`.

use async_trait::async_trait;

use gatelab_ir::Circuit;

use crate::error::HalResult;
use crate::result::ExecutionResult;

/// An execution backend for gate sequences.
///
/// # Contract
///
/// - `submit()` MUST NOT resolve until the full result set is available.
/// - On success, `result.counts.total_shots()` MUST equal `shots` and
///   `result.shots` MUST equal `shots`.
/// - Malformed sequences are rejected by the provider with
///   [`HalError::InvalidCircuit`](crate::HalError::InvalidCircuit); callers
///   do not pre-validate.
/// - Failures are reported once and never retried by the backend.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Execute `circuit` for `shots` trials and return the outcome histogram.
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult>;
}

#[async_trait]
impl<B: Backend + ?Sized> Backend for Box<B> {
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        (**self).submit(circuit, shots).await
    }
}

#[async_trait]
impl<B: Backend + ?Sized> Backend for std::sync::Arc<B> {
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        (**self).submit(circuit, shots).await
    }
}
