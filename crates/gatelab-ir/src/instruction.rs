//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::qubit::{ClbitId, QubitId};

/// The kind of instruction in a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A single-qubit gate.
    Gate(StandardGate),
    /// Z-basis measurement, qubit `i` into clbit `i` of the operand lists.
    Measure,
}

/// A complete instruction with operands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// The kind of instruction.
    pub kind: InstructionKind,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
    /// Classical bits written by this instruction (measurements only).
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self {
            kind: InstructionKind::Gate(gate),
            qubits: vec![qubit],
            clbits: vec![],
        }
    }

    /// Create a measurement instruction.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
            clbits: vec![clbit],
        }
    }

    /// Create a multi-qubit measurement instruction.
    ///
    /// Returns an error if the number of qubits and classical bits do not match.
    pub fn measure_all(
        qubits: impl IntoIterator<Item = QubitId>,
        clbits: impl IntoIterator<Item = ClbitId>,
    ) -> IrResult<Self> {
        let qubits: Vec<_> = qubits.into_iter().collect();
        let clbits: Vec<_> = clbits.into_iter().collect();
        if qubits.len() != clbits.len() {
            return Err(IrError::MeasureArityMismatch {
                qubits: qubits.len(),
                clbits: clbits.len(),
            });
        }
        Ok(Self {
            kind: InstructionKind::Measure,
            qubits,
            clbits,
        })
    }

    /// The gate, if this is a gate instruction.
    pub fn as_gate(&self) -> Option<StandardGate> {
        match self.kind {
            InstructionKind::Gate(gate) => Some(gate),
            InstructionKind::Measure => None,
        }
    }

    /// Check if this is a gate instruction.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, InstructionKind::Gate(_))
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self.kind, InstructionKind::Measure)
    }

    /// Pairs of (qubit, clbit) written by a measurement.
    pub fn measured_pairs(&self) -> impl Iterator<Item = (QubitId, ClbitId)> + '_ {
        self.qubits.iter().copied().zip(self.clbits.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_instruction() {
        let inst = Instruction::single_qubit_gate(StandardGate::H, QubitId(0));
        assert!(inst.is_gate());
        assert!(!inst.is_measure());
        assert_eq!(inst.as_gate(), Some(StandardGate::H));
        assert!(inst.clbits.is_empty());
    }

    #[test]
    fn test_measure_all_pairs() {
        let inst =
            Instruction::measure_all([QubitId(0), QubitId(1)], [ClbitId(0), ClbitId(1)]).unwrap();
        let pairs: Vec<_> = inst.measured_pairs().collect();
        assert_eq!(
            pairs,
            vec![(QubitId(0), ClbitId(0)), (QubitId(1), ClbitId(1))]
        );
    }

    #[test]
    fn test_measure_all_mismatch() {
        let err = Instruction::measure_all([QubitId(0), QubitId(1)], [ClbitId(0)]).unwrap_err();
        assert!(matches!(
            err,
            IrError::MeasureArityMismatch {
                qubits: 2,
                clbits: 1
            }
        ));
    }
}
