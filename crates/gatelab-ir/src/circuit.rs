//! High-level circuit builder API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A gate sequence over a fixed register.
///
/// Instructions are kept in application order. The register sizes are fixed
/// at construction, except that [`Circuit::measure_all`] allocates any
/// missing classical bits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Number of classical bits.
    num_clbits: u32,
    /// Instructions in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create an empty circuit with no qubits.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_size(name, 0, 0)
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    fn check_qubit(&self, qubit: QubitId, gate_name: Option<&str>) -> IrResult<()> {
        if qubit.0 < self.num_qubits {
            Ok(())
        } else {
            Err(IrError::QubitNotFound {
                qubit,
                gate_name: gate_name.map(str::to_string),
            })
        }
    }

    fn check_clbit(&self, clbit: ClbitId) -> IrResult<()> {
        if clbit.0 < self.num_clbits {
            Ok(())
        } else {
            Err(IrError::ClbitNotFound { clbit })
        }
    }

    /// Append a single-qubit gate.
    pub fn apply(&mut self, gate: StandardGate, qubit: QubitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit, Some(gate.name()))?;
        self.instructions
            .push(Instruction::single_qubit_gate(gate, qubit));
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply identity gate.
    pub fn i(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::I, qubit)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::X, qubit)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::Y, qubit)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::Z, qubit)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::H, qubit)
    }

    /// Apply S (phase) gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::S, qubit)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::Sdg, qubit)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::T, qubit)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::Tdg, qubit)
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit, None)?;
        self.check_clbit(clbit)?;
        self.instructions.push(Instruction::measure(qubit, clbit));
        Ok(self)
    }

    /// Measure all qubits to corresponding classical bits.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        // Ensure we have enough classical bits
        self.num_clbits = self.num_clbits.max(self.num_qubits);

        let qubits = (0..self.num_qubits).map(QubitId);
        let clbits = (0..self.num_qubits).map(ClbitId);
        self.instructions
            .push(Instruction::measure_all(qubits, clbits)?);
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Gates in application order, measurements skipped.
    pub fn gates(&self) -> impl Iterator<Item = StandardGate> + '_ {
        self.instructions.iter().filter_map(Instruction::as_gate)
    }

    /// Lowercase names of the gates in application order.
    pub fn gate_names(&self) -> Vec<&'static str> {
        self.gates().map(StandardGate::name).collect()
    }

    /// Whether any measurement has been appended.
    pub fn has_measurements(&self) -> bool {
        self.instructions.iter().any(Instruction::is_measure)
    }

    /// Get the circuit depth.
    ///
    /// A multi-qubit measurement occupies a single layer.
    pub fn depth(&self) -> usize {
        let mut qubit_depth = vec![0usize; self.num_qubits()];
        let mut clbit_depth = vec![0usize; self.num_clbits()];

        for inst in &self.instructions {
            let start = inst
                .qubits
                .iter()
                .map(|q| qubit_depth[q.index()])
                .chain(inst.clbits.iter().map(|c| clbit_depth[c.index()]))
                .max()
                .unwrap_or(0);
            for q in &inst.qubits {
                qubit_depth[q.index()] = start + 1;
            }
            for c in &inst.clbits {
                clbit_depth[c.index()] = start + 1;
            }
        }

        qubit_depth
            .into_iter()
            .chain(clbit_depth)
            .max()
            .unwrap_or(0)
    }
}

/// ASCII wire diagram, one line per qubit, one column per instruction.
impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = (0..self.num_qubits)
            .map(|q| format!("{}:", QubitId(q)))
            .collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);

        let mut rows: Vec<String> = labels
            .iter()
            .map(|l| format!("{l:<label_width$} "))
            .collect();

        for inst in &self.instructions {
            let symbol = match inst.kind {
                InstructionKind::Gate(gate) => gate.symbol(),
                InstructionKind::Measure => "M",
            };
            let width = symbol.chars().count();
            for (q, row) in rows.iter_mut().enumerate() {
                row.push('─');
                if inst.qubits.iter().any(|id| id.index() == q) {
                    row.push_str(symbol);
                } else {
                    row.push_str(&"─".repeat(width));
                }
                row.push('─');
            }
        }

        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.num_clbits(), 0);
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    fn test_circuit_with_size() {
        let circuit = Circuit::with_size("test", 2, 1);
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 1);
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::with_size("combo", 1, 1);
        circuit
            .h(QubitId(0))
            .unwrap()
            .x(QubitId(0))
            .unwrap()
            .s(QubitId(0))
            .unwrap()
            .h(QubitId(0))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap();

        assert_eq!(circuit.gate_names(), vec!["h", "x", "s", "h"]);
        assert_eq!(circuit.depth(), 5);
        assert!(circuit.has_measurements());
    }

    #[test]
    fn test_gate_on_missing_qubit() {
        let mut circuit = Circuit::with_size("test", 1, 1);
        let err = circuit.x(QubitId(1)).unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitNotFound { qubit: QubitId(1), gate_name: Some(ref g) } if g == "x"
        ));
        assert!(circuit.instructions().is_empty());
    }

    #[test]
    fn test_measure_missing_clbit() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        let err = circuit.measure(QubitId(0), ClbitId(0)).unwrap_err();
        assert!(matches!(err, IrError::ClbitNotFound { clbit: ClbitId(0) }));
    }

    #[test]
    fn test_measure_all_allocates_clbits() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.measure_all().unwrap();

        assert_eq!(circuit.num_clbits(), 2);
        let last = circuit.instructions().last().unwrap();
        assert!(last.is_measure());
        assert_eq!(last.qubits.len(), 2);
        assert_eq!(circuit.depth(), 2);
    }

    #[test]
    fn test_diagram_single_qubit() {
        let mut circuit = Circuit::with_size("combo", 1, 1);
        circuit
            .h(QubitId(0))
            .unwrap()
            .x(QubitId(0))
            .unwrap()
            .s(QubitId(0))
            .unwrap()
            .h(QubitId(0))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap();

        assert_eq!(circuit.to_string(), "q0: ─H──X──S──H──M─");
    }

    #[test]
    fn test_diagram_idle_wire() {
        let mut circuit = Circuit::with_size("z", 2, 1);
        circuit
            .h(QubitId(0))
            .unwrap()
            .sdg(QubitId(0))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap();

        let expected = format!("q0: ─H──S†──M─\nq1: {}", "─".repeat(10));
        assert_eq!(circuit.to_string(), expected);
    }
}
