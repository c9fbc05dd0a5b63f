//! gatelab Gate Sequence Representation
//!
//! This crate provides the data structures the gatelab demonstrations build
//! and hand to an execution backend: a short, ordered sequence of single-qubit
//! gates over a fixed register, followed by measurements.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   the quantum and classical registers
//! - **Gates**: [`StandardGate`] for the textbook single-qubit gates
//! - **Instructions**: [`Instruction`] combining a gate or a measurement with
//!   its operands
//! - **Circuit**: [`Circuit`], the ordered gate sequence with a builder API
//! - **OpenQASM 3**: [`qasm::emit`] for providers that accept program source
//!
//! # Example: Superposition
//!
//! ```rust
//! use gatelab_ir::{Circuit, ClbitId, QubitId};
//!
//! let mut circuit = Circuit::with_size("hadamard", 1, 1);
//! circuit.h(QubitId(0)).unwrap().measure(QubitId(0), ClbitId(0)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 1);
//! assert_eq!(circuit.gate_names(), vec!["h"]);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Description |
//! |------|-------------|
//! | `I` | Identity |
//! | `X`, `Y`, `Z` | Pauli gates |
//! | `H` | Hadamard gate |
//! | `S`, `Sdg` | Phase gate and its adjoint |
//! | `T`, `Tdg` | π/8 gate and its adjoint |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qasm;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
