//! gatelab Adapter for AWS Braket
//!
//! Runs gate sequences on devices reachable through the AWS Braket
//! service. A submission is emitted as OpenQASM 3, created as a quantum
//! task, polled until it reaches a terminal state and read back from the
//! task's S3 output location.
//!
//! # Devices
//!
//! Any device ARN is accepted. Friendly names for the common ones are
//! resolved by [`device::arn_for_name`]:
//!
//! | Name | Device |
//! |------|--------|
//! | `sv1` / `tn1` / `dm1` | Amazon managed simulators |
//! | `ionq` / `aria` / `forte` | IonQ trapped-ion QPUs |
//! | `rigetti` | Rigetti Ankaa-3 |
//! | `iqm-garnet` | IQM Garnet |
//!
//! # Authentication
//!
//! AWS credentials are loaded from the standard AWS credential chain:
//! environment variables, shared config, SSO, or IAM role.
//!
//! Required environment variables:
//! - `GATELAB_BRAKET_S3_BUCKET`: S3 bucket for storing task results
//!
//! Optional environment variables:
//! - `GATELAB_BRAKET_S3_PREFIX`: S3 key prefix (default: `"gatelab-results"`)
//! - `AWS_REGION`: AWS region (default: `"us-east-1"`)
//!
//! # Example
//!
//! ```ignore
//! use gatelab_adapter_braket::{device, BraketBackend};
//! use gatelab_hal::Backend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = BraketBackend::connect(device::SV1).await?;
//!     let result = backend.submit(&circuit, 1000).await?;
//!     println!("{}", result.counts);
//!     Ok(())
//! }
//! ```

mod api;
mod backend;
mod config;
pub mod device;
mod error;

pub use backend::BraketBackend;
pub use config::BraketConfig;
pub use error::{BraketError, BraketResult};
