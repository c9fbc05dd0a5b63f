//! Runs demonstrations against one execution backend.

use gatelab_hal::{Backend, Counts};
use gatelab_ir::Circuit;
use tracing::{debug, info};

use crate::catalog::Demonstration;
use crate::error::DemoResult;
use crate::report::Report;
use crate::{Driver, print_banner, print_completion};

/// Shots per demonstration.
pub const SHOTS: u32 = 1000;

/// Holds the backend chosen at construction and runs the catalog on it.
///
/// Every demonstration awaits its submission before returning, so
/// submissions never overlap.
pub struct ExampleRunner {
    backend: Box<dyn Backend>,
    driver: Driver,
}

impl ExampleRunner {
    pub fn new(backend: Box<dyn Backend>, driver: Driver) -> Self {
        Self { backend, driver }
    }

    /// Presentation profile in use.
    pub fn driver(&self) -> Driver {
        self.driver
    }

    /// Pauli-X on |0⟩.
    pub async fn pauli_x(&self) -> DemoResult<(Counts, Circuit)> {
        self.run(Demonstration::PauliX).await
    }

    /// Pauli-Y on |0⟩.
    pub async fn pauli_y(&self) -> DemoResult<(Counts, Circuit)> {
        self.run(Demonstration::PauliY).await
    }

    /// Pauli-Z after a Hadamard.
    pub async fn pauli_z(&self) -> DemoResult<(Counts, Circuit)> {
        self.run(Demonstration::PauliZ).await
    }

    /// S after a Hadamard.
    pub async fn phase(&self) -> DemoResult<(Counts, Circuit)> {
        self.run(Demonstration::Phase).await
    }

    /// T after a Hadamard.
    pub async fn t_gate(&self) -> DemoResult<(Counts, Circuit)> {
        self.run(Demonstration::TGate).await
    }

    /// Hadamard on |0⟩.
    pub async fn hadamard(&self) -> DemoResult<(Counts, Circuit)> {
        self.run(Demonstration::Hadamard).await
    }

    /// Two Hadamards in a row.
    pub async fn double_hadamard(&self) -> DemoResult<(Counts, Circuit)> {
        self.run(Demonstration::DoubleHadamard).await
    }

    /// H, X, S, H; also prints the circuit diagram.
    pub async fn composite(&self) -> DemoResult<(Counts, Circuit)> {
        self.run(Demonstration::Composite).await
    }

    /// Build, submit and report one demonstration.
    pub async fn run(&self, demo: Demonstration) -> DemoResult<(Counts, Circuit)> {
        let circuit = demo.build(self.driver)?;
        debug!(circuit = circuit.name(), shots = SHOTS, "Submitting");

        let result = self.backend.submit(&circuit, SHOTS).await?;
        println!(
            "{}",
            Report::new(demo, self.driver, &result.counts, &circuit)
        );

        Ok((result.counts, circuit))
    }

    /// Run the whole catalog in order. The first failure stops the run.
    pub async fn run_all(&self) -> DemoResult<()> {
        info!(driver = %self.driver, "Running all examples");
        print_banner(&self.driver.title(), self.driver.rule_width());

        self.pauli_x().await?;
        self.pauli_y().await?;
        self.pauli_z().await?;
        self.phase().await?;
        self.t_gate().await?;
        self.hadamard().await?;
        self.double_hadamard().await?;
        self.composite().await?;

        print_completion(self.driver.rule_width());
        info!("All examples completed");
        Ok(())
    }
}
