//! Offline checks of the adapter's public surface. Nothing here talks to AWS.

use std::time::Duration;

use gatelab_adapter_braket::{BraketConfig, BraketError, device};
use gatelab_hal::HalError;

#[test]
fn friendly_names_resolve_to_arns() {
    for name in ["sv1", "tn1", "dm1", "ionq", "aria", "forte", "rigetti", "iqm-garnet"] {
        let arn = device::resolve(name);
        assert!(arn.starts_with("arn:aws:braket:"), "{name} -> {arn}");
    }
    assert_eq!(device::provider_from_arn(&device::resolve("forte")), "ionq");
}

#[test]
fn config_requires_bucket() {
    let err = BraketConfig::from_lookup(|_| None).unwrap_err();
    let hal: HalError = err.into();
    assert!(matches!(hal, HalError::Configuration(msg) if msg.contains("GATELAB_BRAKET_S3_BUCKET")));
}

#[test]
fn config_polling_override() {
    let config = BraketConfig::from_lookup(|key| {
        (key == "GATELAB_BRAKET_S3_BUCKET").then(|| "results".to_string())
    })
    .unwrap()
    .with_polling(Duration::from_millis(250), Duration::from_secs(30));

    assert_eq!(config.poll_interval, Duration::from_millis(250));
    assert_eq!(config.poll_timeout, Duration::from_secs(30));
}

#[test]
fn task_failures_surface_as_hal_errors() {
    let hal: HalError = BraketError::TaskFailed("device offline".into()).into();
    assert_eq!(hal.to_string(), "Job failed: device offline");
}
