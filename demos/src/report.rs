//! Text rendering of a demonstration's outcome.

use std::fmt;

use gatelab_hal::Counts;
use gatelab_ir::Circuit;

use crate::Driver;
use crate::catalog::Demonstration;

/// The block of text printed after a demonstration has run.
///
/// ```text
///
/// === Hadamard Gate Example ===
/// Input: |0⟩
/// Output: {'0': 503, '1': 497}
/// Expected: Roughly equal distribution between 0 and 1
/// ```
#[derive(Debug, Clone)]
pub struct Report<'a> {
    demo: Demonstration,
    driver: Driver,
    counts: &'a Counts,
    circuit: &'a Circuit,
}

impl<'a> Report<'a> {
    pub fn new(
        demo: Demonstration,
        driver: Driver,
        counts: &'a Counts,
        circuit: &'a Circuit,
    ) -> Self {
        Self {
            demo,
            driver,
            counts,
            circuit,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            demo,
            driver,
            counts,
            circuit,
        } = *self;

        writeln!(f)?;
        writeln!(f, "=== {} ===", demo.header(driver))?;
        write!(f, "Input: {}", demo.input_state())?;
        if let Some(operations) = demo.operations() {
            write!(f, "\nOperations: {operations}")?;
        }
        if let Some(line) = demo.circuit_line(driver) {
            write!(f, "\nCircuit: {line}")?;
        }
        write!(f, "\n{}: {counts}", driver.counts_label())?;
        if let Some(expected) = demo.expected(driver) {
            write!(f, "\nExpected: {expected}")?;
        }
        if let Some(title) = demo.diagram_title(driver) {
            write!(f, "\n\n{title}:\n{circuit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(demo: Demonstration, driver: Driver, counts: &[(&str, u64)]) -> String {
        let counts: Counts = counts.iter().map(|(k, v)| (*k, *v)).collect();
        let circuit = demo.build(driver).unwrap();
        Report::new(demo, driver, &counts, &circuit).to_string()
    }

    #[test]
    fn test_standard_pauli_x() {
        assert_eq!(
            render(Demonstration::PauliX, Driver::Standard, &[("1", 1000)]),
            "\n=== Pauli-X Gate Example ===\n\
             Input: |0⟩\n\
             Output: {'1': 1000}\n\
             Expected: {'1': 1000} (all measurements give |1⟩)"
        );
    }

    #[test]
    fn test_braket_double_hadamard() {
        assert_eq!(
            render(
                Demonstration::DoubleHadamard,
                Driver::Braket { cloud: false },
                &[("0", 1000)]
            ),
            "\n=== Double Hadamard Gate (Amazon Braket) ===\n\
             Input: |0⟩\n\
             Operations: H → H\n\
             Measurement counts: {'0': 1000}\n\
             Expected: All measurements should give |0⟩"
        );
    }

    #[test]
    fn test_standard_composite_prints_diagram() {
        assert_eq!(
            render(
                Demonstration::Composite,
                Driver::Standard,
                &[("0", 488), ("1", 512)]
            ),
            "\n=== Gate Combination Circuit ===\n\
             Input: |0⟩\n\
             Circuit: |0⟩ → H → X → S → H → Measure\n\
             Output: {'0': 488, '1': 512}\n\
             \n\
             Circuit Diagram:\n\
             q0: ─H──X──S──H──M─"
        );
    }

    #[test]
    fn test_braket_composite_structure() {
        let text = render(
            Demonstration::Composite,
            Driver::Braket { cloud: true },
            &[("1", 1000)],
        );
        assert!(text.contains("Circuit: H → X → S → H\nMeasurement counts:"));
        assert!(text.ends_with("Circuit structure:\nq0: ─H──X──S──H──M─"));
        assert!(!text.contains("Expected"));
    }

    #[test]
    fn test_pauli_z_input_state() {
        let text = render(Demonstration::PauliZ, Driver::Standard, &[("0", 500), ("1", 500)]);
        assert!(text.contains("Input: (|0⟩ + |1⟩)/√2 (after Hadamard)\n"));
        assert!(text.ends_with("Expected: Roughly equal distribution between 0 and 1"));
    }
}
