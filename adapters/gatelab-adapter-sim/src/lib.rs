//! gatelab Local Simulator
//!
//! A noiseless sampling backend for the short single-qubit gate sequences
//! the demonstrations build. The sequence is evolved once as a statevector
//! and the measured bits are then sampled `shots` times.
//!
//! Only the identity, the Paulis, Hadamard, S, T and their adjoints are
//! understood. Registers are capped at a handful of qubits.
//!
//! # Example
//!
//! ```ignore
//! use gatelab_adapter_sim::SimulatorBackend;
//! use gatelab_hal::Backend;
//! use gatelab_ir::{Circuit, QubitId};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!
//!     let mut circuit = Circuit::with_size("hadamard", 1, 0);
//!     circuit.h(QubitId(0))?.measure_all()?;
//!
//!     // Expect ~50% |0⟩ and ~50% |1⟩
//!     let result = backend.submit(&circuit, 1000).await?;
//!     println!("Results: {}", result.counts);
//!
//!     Ok(())
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::{MAX_SUPPORTED_QUBITS, SimulatorBackend};
