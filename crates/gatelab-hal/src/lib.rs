//! gatelab Execution Backend Capability
//!
//! This crate defines the one seam between the gate demonstrations and
//! whatever executes them: a local simulator, or a remote device reached
//! through a cloud service.
//!
//! # Overview
//!
//! - A [`Backend`] trait with a single operation, [`Backend::submit`]
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//! - One error taxonomy, [`HalError`], for every way a submission can fail
//!
//! # Providers
//!
//! | Backend | Crate | Authentication |
//! |---------|-------|----------------|
//! | Local Simulator | `gatelab-adapter-sim` | None |
//! | AWS Braket | `gatelab-adapter-braket` | AWS credential chain |
//!
//! # Implementing a Backend
//!
//! ```ignore
//! use gatelab_hal::{Backend, Counts, ExecutionResult, HalResult};
//! use gatelab_ir::Circuit;
//! use async_trait::async_trait;
//!
//! struct AlwaysZero;
//!
//! #[async_trait]
//! impl Backend for AlwaysZero {
//!     async fn submit(&self, _circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
//!         let mut counts = Counts::new();
//!         counts.insert("0", u64::from(shots));
//!         Ok(ExecutionResult::new(counts, shots))
//!     }
//! }
//! ```

pub mod backend;
pub mod error;
pub mod result;

pub use backend::Backend;
pub use error::{HalError, HalResult};
pub use result::{Counts, ExecutionResult};
