//! OpenQASM 3.0 emitter for serializing circuits.

use crate::circuit::Circuit;
use crate::error::IrResult;
use crate::instruction::{Instruction, InstructionKind};

/// Emit a circuit as OpenQASM 3.0 source code.
pub fn emit(circuit: &Circuit) -> IrResult<String> {
    let mut emitter = Emitter::new();
    emitter.emit_circuit(circuit)
}

struct Emitter {
    output: String,
}

#[allow(clippy::unnecessary_wraps)]
impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) -> IrResult<String> {
        self.writeln("OPENQASM 3.0;");
        self.writeln("");

        let num_qubits = circuit.num_qubits();
        if num_qubits > 0 {
            self.writeln(&format!("qubit[{num_qubits}] q;"));
        }

        let num_clbits = circuit.num_clbits();
        if num_clbits > 0 {
            self.writeln(&format!("bit[{num_clbits}] c;"));
        }

        if num_qubits > 0 || num_clbits > 0 {
            self.writeln("");
        }

        for instruction in circuit.instructions() {
            self.emit_instruction(instruction);
        }

        Ok(std::mem::take(&mut self.output))
    }

    fn emit_instruction(&mut self, instruction: &Instruction) {
        match instruction.kind {
            InstructionKind::Gate(gate) => {
                for q in &instruction.qubits {
                    self.writeln(&format!("{} q[{}];", gate.name(), q.0));
                }
            }
            InstructionKind::Measure => {
                for (q, c) in instruction.measured_pairs() {
                    self.writeln(&format!("c[{}] = measure q[{}];", c.0, q.0));
                }
            }
        }
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::{ClbitId, QubitId};

    #[test]
    fn test_emit_hadamard_measure() {
        let mut circuit = Circuit::with_size("h", 1, 1);
        circuit
            .h(QubitId(0))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap();

        let qasm = emit(&circuit).unwrap();
        assert_eq!(
            qasm,
            "OPENQASM 3.0;\n\nqubit[1] q;\nbit[1] c;\n\nh q[0];\nc[0] = measure q[0];\n"
        );
    }

    #[test]
    fn test_emit_measure_all_expands() {
        let mut circuit = Circuit::with_size("pair", 2, 0);
        circuit.x(QubitId(1)).unwrap().measure_all().unwrap();

        let qasm = emit(&circuit).unwrap();
        assert!(qasm.contains("bit[2] c;"));
        assert!(qasm.contains("x q[1];"));
        assert!(qasm.contains("c[0] = measure q[0];"));
        assert!(qasm.contains("c[1] = measure q[1];"));
    }

    #[test]
    fn test_emit_adjoint_names() {
        let mut circuit = Circuit::with_size("adj", 1, 0);
        circuit.sdg(QubitId(0)).unwrap().tdg(QubitId(0)).unwrap();

        let qasm = emit(&circuit).unwrap();
        assert!(qasm.contains("sdg q[0];"));
        assert!(qasm.contains("tdg q[0];"));
        assert!(!qasm.contains("bit["));
    }
}
