//! Simulator backend implementation.

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, instrument};

use gatelab_hal::{Backend, Counts, ExecutionResult, HalError, HalResult};
use gatelab_ir::{Circuit, QubitId};

use crate::statevector::Statevector;

const DEFAULT_MAX_QUBITS: u32 = 8;

/// Hard ceiling on the register size; `with_max_qubits` clamps to it.
pub const MAX_SUPPORTED_QUBITS: u32 = 26;

/// Local simulator backend.
///
/// Executes synchronously inside `submit`; the sequence is evolved once
/// and the measurement is sampled `shots` times from the final state.
pub struct SimulatorBackend {
    /// Maximum number of qubits supported.
    max_qubits: u32,
    /// Sampling source.
    rng: Mutex<StdRng>,
}

impl SimulatorBackend {
    /// Create a new simulator backend seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a simulator whose samples are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Override the register size limit, up to [`MAX_SUPPORTED_QUBITS`].
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = max_qubits.min(MAX_SUPPORTED_QUBITS);
        self
    }

    fn validate(&self, circuit: &Circuit, shots: u32) -> HalResult<()> {
        if shots == 0 {
            return Err(HalError::InvalidShots("shots must be at least 1".into()));
        }
        if circuit.num_qubits() == 0 {
            return Err(HalError::InvalidCircuit(format!(
                "circuit '{}' has no qubits",
                circuit.name()
            )));
        }
        if circuit.num_qubits() > self.max_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.max_qubits
            )));
        }

        // Sampling happens once at the end, so a measured qubit must stay
        // untouched afterwards.
        let mut measured = vec![false; circuit.num_qubits()];
        for inst in circuit.instructions() {
            if inst.is_measure() {
                for q in &inst.qubits {
                    measured[q.index()] = true;
                }
            } else if let Some(q) = inst.qubits.iter().find(|q| measured[q.index()]) {
                return Err(HalError::InvalidCircuit(format!(
                    "circuit '{}' applies a gate to {q} after measuring it",
                    circuit.name()
                )));
            }
        }
        Ok(())
    }

    /// Run simulation synchronously.
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        debug!(
            "Starting simulation: {} qubits, {} shots",
            num_qubits, shots
        );

        let mut sv = Statevector::new(num_qubits);
        for inst in circuit.instructions() {
            sv.apply(inst);
        }
        let probabilities = sv.probabilities();

        // Later measurements into the same clbit overwrite earlier ones.
        let mut clbit_sources: Vec<Option<QubitId>> = vec![None; circuit.num_clbits()];
        for inst in circuit.instructions() {
            for (q, c) in inst.measured_pairs() {
                clbit_sources[c.index()] = Some(q);
            }
        }
        let measured = clbit_sources.iter().any(Option::is_some);

        let mut counts = Counts::new();
        {
            let mut rng = self
                .rng
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            for _ in 0..shots {
                let outcome = Statevector::sample(&probabilities, &mut *rng);
                let bitstring = if measured {
                    clbit_bitstring(&clbit_sources, outcome)
                } else {
                    sv.outcome_to_bitstring(outcome)
                };
                counts.insert(bitstring, 1);
            }
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

/// Classical register contents for a sampled basis state, `c0` leftmost.
/// Clbits that were never written read as `0`.
fn clbit_bitstring(sources: &[Option<QubitId>], outcome: usize) -> String {
    sources
        .iter()
        .map(|source| match source {
            Some(q) if outcome & (1 << q.index()) != 0 => '1',
            _ => '0',
        })
        .collect()
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        self.validate(circuit, shots)?;
        Ok(self.run_simulation(circuit, shots))
    }
}
