//! Quantum gate types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The textbook single-qubit gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X (NOT) gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z (phase flip) gate.
    Z,
    /// Hadamard gate.
    H,
    /// Phase gate (sqrt(Z)).
    S,
    /// Phase-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
}

impl StandardGate {
    /// Lowercase gate name, as used by OpenQASM.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
        }
    }

    /// Symbol drawn in circuit diagrams.
    #[inline]
    pub fn symbol(self) -> &'static str {
        match self {
            StandardGate::I => "I",
            StandardGate::X => "X",
            StandardGate::Y => "Y",
            StandardGate::Z => "Z",
            StandardGate::H => "H",
            StandardGate::S => "S",
            StandardGate::Sdg => "S†",
            StandardGate::T => "T",
            StandardGate::Tdg => "T†",
        }
    }

    /// The adjoint gate.
    pub fn inverse(self) -> Self {
        match self {
            StandardGate::S => StandardGate::Sdg,
            StandardGate::Sdg => StandardGate::S,
            StandardGate::T => StandardGate::Tdg,
            StandardGate::Tdg => StandardGate::T,
            other => other,
        }
    }

    /// Number of qubits this gate acts on.
    #[inline]
    pub fn num_qubits(self) -> u32 {
        1
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
