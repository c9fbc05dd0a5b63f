//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur while building a gate sequence.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("Qubit {qubit} not found in circuit{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Classical bit not found in circuit.
    #[error("Classical bit {clbit} not found in circuit")]
    ClbitNotFound {
        /// The classical bit that was not found.
        clbit: ClbitId,
    },

    /// Measurement operands do not pair up.
    #[error("Measurement of {qubits} qubits into {clbits} classical bits")]
    MeasureArityMismatch {
        /// Number of measured qubits.
        qubits: usize,
        /// Number of target classical bits.
        clbits: usize,
    },
}

#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_not_found_mentions_gate() {
        let err = IrError::QubitNotFound {
            qubit: QubitId(3),
            gate_name: Some("h".into()),
        };
        assert_eq!(err.to_string(), "Qubit q3 not found in circuit (gate: h)");
    }

    #[test]
    fn test_qubit_not_found_without_gate() {
        let err = IrError::QubitNotFound {
            qubit: QubitId(1),
            gate_name: None,
        };
        assert_eq!(err.to_string(), "Qubit q1 not found in circuit");
    }
}
