//! Statevector sampling engine.

use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::PI;

use gatelab_ir::{Instruction, InstructionKind, StandardGate};

/// Amplitudes of an `n`-qubit register, qubit `k` mapped to bit `k` of the
/// basis index.
pub struct Statevector {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Apply an instruction. Measurements leave the state untouched; they
    /// are resolved at sampling time.
    pub fn apply(&mut self, instruction: &Instruction) {
        match instruction.kind {
            InstructionKind::Gate(gate) => {
                for q in &instruction.qubits {
                    self.apply_gate(gate, q.index());
                }
            }
            InstructionKind::Measure => {}
        }
    }

    fn apply_gate(&mut self, gate: StandardGate, qubit: usize) {
        match gate {
            StandardGate::I => {}
            StandardGate::X => self.apply_x(qubit),
            StandardGate::Y => self.apply_y(qubit),
            StandardGate::Z => self.apply_z(qubit),
            StandardGate::H => self.apply_h(qubit),
            StandardGate::S => self.apply_phase(qubit, PI / 2.0),
            StandardGate::Sdg => self.apply_phase(qubit, -PI / 2.0),
            StandardGate::T => self.apply_phase(qubit, PI / 4.0),
            StandardGate::Tdg => self.apply_phase(qubit, -PI / 4.0),
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        self.apply_phase(qubit, PI);
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp *= phase;
            }
        }
    }

    // =========================================================================
    // Sampling
    // =========================================================================

    /// Probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Draw one basis-state index according to the Born rule.
    pub fn sample<R: Rng>(probabilities: &[f64], rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, p) in probabilities.iter().enumerate() {
            cumulative += p;
            if r < cumulative {
                return i;
            }
        }

        // Rounding can leave the cumulative sum a hair below 1.
        probabilities
            .iter()
            .rposition(|p| *p > 0.0)
            .unwrap_or(probabilities.len() - 1)
    }

    /// Whole-register bit-string for a basis index, qubit 0 leftmost.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits)
            .chars()
            .rev()
            .collect()
    }
}
