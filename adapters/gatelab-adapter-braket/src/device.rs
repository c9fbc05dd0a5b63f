//! Known Braket device ARNs.
//!
//! The demonstrations take a device ARN on the command line; the common
//! ones can be given by a short name instead.

// ──────────────────────────────────────────────────────────────────────
// Known device ARNs
// ──────────────────────────────────────────────────────────────────────

/// Rigetti Ankaa-3 (84 qubits, superconducting).
pub const RIGETTI_ANKAA_3: &str = "arn:aws:braket:us-west-1::device/qpu/rigetti/Ankaa-3";

/// IonQ Aria (25 qubits, trapped-ion).
pub const IONQ_ARIA: &str = "arn:aws:braket:us-east-1::device/qpu/ionq/Aria-1";

/// IonQ Aria 2 (25 qubits, trapped-ion).
pub const IONQ_ARIA_2: &str = "arn:aws:braket:us-east-1::device/qpu/ionq/Aria-2";

/// IonQ Forte (36 qubits, trapped-ion).
pub const IONQ_FORTE: &str = "arn:aws:braket:us-east-1::device/qpu/ionq/Forte-1";

/// IQM Garnet (20 qubits, superconducting).
pub const IQM_GARNET: &str = "arn:aws:braket:eu-north-1::device/qpu/iqm/Garnet";

/// SV1 state vector simulator.
pub const SV1: &str = "arn:aws:braket:::device/quantum-simulator/amazon/sv1";

/// TN1 tensor network simulator.
pub const TN1: &str = "arn:aws:braket:::device/quantum-simulator/amazon/tn1";

/// DM1 density matrix simulator.
pub const DM1: &str = "arn:aws:braket:::device/quantum-simulator/amazon/dm1";

/// Map a friendly device name to its ARN.
pub fn arn_for_name(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "rigetti" | "ankaa" | "ankaa-3" | "ankaa3" => Some(RIGETTI_ANKAA_3),
        "ionq" | "aria" | "aria-1" => Some(IONQ_ARIA),
        "aria-2" => Some(IONQ_ARIA_2),
        "forte" | "forte-1" => Some(IONQ_FORTE),
        "iqm-garnet" | "garnet" => Some(IQM_GARNET),
        "sv1" | "braket-sv1" => Some(SV1),
        "tn1" | "braket-tn1" => Some(TN1),
        "dm1" | "braket-dm1" => Some(DM1),
        _ => None,
    }
}

/// Resolve a command-line device argument: a known name, or an ARN as-is.
pub fn resolve(name_or_arn: &str) -> String {
    arn_for_name(name_or_arn).map_or_else(|| name_or_arn.to_string(), str::to_string)
}

/// Extract provider name from a device ARN.
pub fn provider_from_arn(device_arn: &str) -> &str {
    // ARN format: arn:aws:braket:<region>::device/<type>/<provider>/<device>
    device_arn.split('/').nth(2).unwrap_or("unknown")
}

/// Whether the ARN names one of the managed simulators rather than a QPU.
pub fn is_simulator(device_arn: &str) -> bool {
    device_arn.split('/').nth(1) == Some("quantum-simulator")
}
