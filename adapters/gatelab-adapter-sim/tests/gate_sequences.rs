//! End-to-end sampling of the demonstrated gate sequences.

use gatelab_adapter_sim::SimulatorBackend;
use gatelab_hal::Backend;
use gatelab_ir::{Circuit, QubitId, StandardGate};

const SHOTS: u32 = 1000;

fn sequence(gates: &[StandardGate]) -> Circuit {
    let mut circuit = Circuit::with_size("sequence", 1, 0);
    for gate in gates {
        circuit.apply(*gate, QubitId(0)).unwrap();
    }
    circuit.measure_all().unwrap();
    circuit
}

#[tokio::test]
async fn deterministic_sequences() {
    use StandardGate::*;

    let backend = SimulatorBackend::with_seed(2024);
    let cases: [(&[StandardGate], &str); 5] = [
        (&[X], "1"),
        (&[Y], "1"),
        (&[H, H], "0"),
        (&[H, Z, H], "1"),
        (&[H, S, S, H], "1"),
    ];

    for (gates, expected) in cases {
        let result = backend.submit(&sequence(gates), SHOTS).await.unwrap();
        assert_eq!(
            result.counts.get(expected),
            u64::from(SHOTS),
            "sequence {gates:?}"
        );
    }
}

#[tokio::test]
async fn superposition_sequences_stay_balanced() {
    use StandardGate::*;

    let backend = SimulatorBackend::with_seed(77);
    let cases: [&[StandardGate]; 4] = [&[H], &[H, Z], &[H, S], &[H, T]];

    for gates in cases {
        let result = backend.submit(&sequence(gates), SHOTS).await.unwrap();
        assert_eq!(result.counts.total_shots(), u64::from(SHOTS));
        let p0 = result.counts.probability("0");
        assert!((0.425..=0.575).contains(&p0), "sequence {gates:?}: {p0}");
    }
}

#[tokio::test]
async fn composite_sequence_counts_sum_to_shots() {
    let backend = SimulatorBackend::with_seed(11);
    let mut circuit = Circuit::with_size("composite", 1, 0);
    circuit
        .h(QubitId(0))
        .unwrap()
        .x(QubitId(0))
        .unwrap()
        .s(QubitId(0))
        .unwrap()
        .h(QubitId(0))
        .unwrap()
        .measure_all()
        .unwrap();

    let result = backend.submit(&circuit, SHOTS).await.unwrap();
    assert_eq!(result.counts.total_shots(), u64::from(SHOTS));
    assert!(result.execution_time_ms.is_some());
}
