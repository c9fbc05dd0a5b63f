//! The fixed catalog of gate demonstrations.

use gatelab_ir::{Circuit, ClbitId, IrResult, QubitId, StandardGate};

use crate::Driver;

/// One textbook gate demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demonstration {
    PauliX,
    PauliY,
    PauliZ,
    Phase,
    TGate,
    Hadamard,
    DoubleHadamard,
    Composite,
}

impl Demonstration {
    /// Every demonstration, in the order `run_all` executes them.
    pub const ALL: [Demonstration; 8] = [
        Demonstration::PauliX,
        Demonstration::PauliY,
        Demonstration::PauliZ,
        Demonstration::Phase,
        Demonstration::TGate,
        Demonstration::Hadamard,
        Demonstration::DoubleHadamard,
        Demonstration::Composite,
    ];

    /// Name given to the built sequence.
    pub fn name(self) -> &'static str {
        match self {
            Demonstration::PauliX => "Pauli-X Example",
            Demonstration::PauliY => "Pauli-Y Example",
            Demonstration::PauliZ => "Pauli-Z Example",
            Demonstration::Phase => "Phase Gate Example",
            Demonstration::TGate => "T Gate Example",
            Demonstration::Hadamard => "Hadamard Gate Example",
            Demonstration::DoubleHadamard => "Double Hadamard Example",
            Demonstration::Composite => "Gate Combination",
        }
    }

    /// Gates applied to qubit 0, in order.
    pub fn gates(self) -> &'static [StandardGate] {
        use StandardGate::{H, S, T, X, Y, Z};
        match self {
            Demonstration::PauliX => &[X],
            Demonstration::PauliY => &[Y],
            Demonstration::PauliZ => &[H, Z],
            Demonstration::Phase => &[H, S],
            Demonstration::TGate => &[H, T],
            Demonstration::Hadamard => &[H],
            Demonstration::DoubleHadamard => &[H, H],
            Demonstration::Composite => &[H, X, S, H],
        }
    }

    /// Report header, without the `===` frame.
    pub fn header(self, driver: Driver) -> String {
        let (standard, braket) = match self {
            Demonstration::PauliX => ("Pauli-X Gate Example", "Pauli-X Gate"),
            Demonstration::PauliY => ("Pauli-Y Gate Example", "Pauli-Y Gate"),
            Demonstration::PauliZ => ("Pauli-Z Gate Example", "Pauli-Z Gate"),
            Demonstration::Phase => ("Phase (S) Gate Example", "Phase (S) Gate"),
            Demonstration::TGate => ("T Gate Example", "T Gate (π/8)"),
            Demonstration::Hadamard => ("Hadamard Gate Example", "Hadamard Gate"),
            Demonstration::DoubleHadamard => {
                ("Double Hadamard Gate Example", "Double Hadamard Gate")
            }
            Demonstration::Composite => ("Gate Combination Circuit", "Complex Multi-Gate Circuit"),
        };
        match driver {
            Driver::Standard => standard.to_string(),
            Driver::Braket { .. } => format!("{braket} (Amazon Braket)"),
        }
    }

    /// Symbolic state the demonstrated gate acts on.
    pub fn input_state(self) -> &'static str {
        match self {
            Demonstration::PauliZ => "(|0⟩ + |1⟩)/√2 (after Hadamard)",
            Demonstration::Phase | Demonstration::TGate => "(|0⟩ + |1⟩)/√2",
            _ => "|0⟩",
        }
    }

    /// Extra line listing the operations, if the demonstration prints one.
    pub fn operations(self) -> Option<&'static str> {
        match self {
            Demonstration::DoubleHadamard => Some("H → H"),
            _ => None,
        }
    }

    /// Circuit summary line, composite only.
    pub fn circuit_line(self, driver: Driver) -> Option<&'static str> {
        match (self, driver) {
            (Demonstration::Composite, Driver::Standard) => Some("|0⟩ → H → X → S → H → Measure"),
            (Demonstration::Composite, Driver::Braket { .. }) => Some("H → X → S → H"),
            _ => None,
        }
    }

    /// Expected-outcome narration. Holds only for a noiseless backend.
    pub fn expected(self, driver: Driver) -> Option<&'static str> {
        let standard = matches!(driver, Driver::Standard);
        let text = match self {
            Demonstration::PauliX | Demonstration::PauliY if standard => {
                "{'1': 1000} (all measurements give |1⟩)"
            }
            Demonstration::PauliX | Demonstration::PauliY => "All measurements should give |1⟩",
            Demonstration::PauliZ | Demonstration::Hadamard if standard => {
                "Roughly equal distribution between 0 and 1"
            }
            Demonstration::PauliZ | Demonstration::TGate => "Roughly equal distribution",
            Demonstration::Phase if standard => {
                "Roughly equal distribution (phase is not observable)"
            }
            Demonstration::Phase => {
                "Roughly equal distribution (phase not observable in Z basis)"
            }
            Demonstration::Hadamard => "Roughly equal distribution (50% 0, 50% 1)",
            Demonstration::DoubleHadamard if standard => "{'0': 1000} (returns to |0⟩)",
            Demonstration::DoubleHadamard => "All measurements should give |0⟩",
            Demonstration::Composite => return None,
        };
        Some(text)
    }

    /// Title printed above the circuit diagram, composite only.
    pub fn diagram_title(self, driver: Driver) -> Option<&'static str> {
        match (self, driver) {
            (Demonstration::Composite, Driver::Standard) => Some("Circuit Diagram"),
            (Demonstration::Composite, Driver::Braket { .. }) => Some("Circuit structure"),
            _ => None,
        }
    }

    /// What the demonstrated gate does to the basis states.
    pub fn description(self) -> &'static str {
        match self {
            Demonstration::PauliX => {
                "The Pauli-X (NOT) gate flips the qubit state:\n\
                 |0⟩ → |1⟩\n\
                 |1⟩ → |0⟩\n\
                 Matrix: [[0, 1], [1, 0]]"
            }
            Demonstration::PauliY => {
                "The Pauli-Y gate:\n\
                 |0⟩ → i|1⟩\n\
                 |1⟩ → -i|0⟩\n\
                 Matrix: [[0, -i], [i, 0]]"
            }
            Demonstration::PauliZ => {
                "The Pauli-Z gate applies a phase flip:\n\
                 |0⟩ → |0⟩\n\
                 |1⟩ → -|1⟩\n\
                 Matrix: [[1, 0], [0, -1]]"
            }
            Demonstration::Phase => {
                "The Phase (S) gate:\n\
                 |0⟩ → |0⟩\n\
                 |1⟩ → i|1⟩\n\
                 Matrix: [[1, 0], [0, i]]"
            }
            Demonstration::TGate => {
                "The T (π/8) gate:\n\
                 |0⟩ → |0⟩\n\
                 |1⟩ → e^(iπ/4)|1⟩\n\
                 Matrix: [[1, 0], [0, e^(iπ/4)]]"
            }
            Demonstration::Hadamard => {
                "The Hadamard gate creates superposition:\n\
                 |0⟩ → (|0⟩ + |1⟩)/√2\n\
                 |1⟩ → (|0⟩ - |1⟩)/√2\n\
                 Matrix: (1/√2) * [[1, 1], [1, -1]]"
            }
            Demonstration::DoubleHadamard => {
                "Two consecutive Hadamard gates return the qubit to its original state:\n\
                 H * H = I\n\
                 |0⟩ → (|0⟩ + |1⟩)/√2 → |0⟩"
            }
            Demonstration::Composite => {
                "A sequence combining several gates:\n\
                 |0⟩ → H → X → S → H → Measure"
            }
        }
    }

    /// Build the gate sequence for `driver`.
    ///
    /// The standard driver measures qubit 0 into classical bit 0; the
    /// Pauli-Z sequence carries an idle second qubit. The Braket driver
    /// uses a single qubit and measures the whole register.
    pub fn build(self, driver: Driver) -> IrResult<Circuit> {
        let q0 = QubitId(0);
        let mut circuit = match (self, driver) {
            (Demonstration::PauliZ, Driver::Standard) => Circuit::with_size(self.name(), 2, 1),
            (_, Driver::Standard) => Circuit::with_size(self.name(), 1, 1),
            (_, Driver::Braket { .. }) => Circuit::with_size(self.name(), 1, 0),
        };

        for &gate in self.gates() {
            circuit.apply(gate, q0)?;
        }

        match driver {
            Driver::Standard => circuit.measure(q0, ClbitId(0))?,
            Driver::Braket { .. } => circuit.measure_all()?,
        };
        Ok(circuit)
    }
}
