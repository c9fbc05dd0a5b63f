//! Choosing between the local simulator and a remote Braket device.

use anyhow::Result;
use gatelab_adapter_sim::SimulatorBackend;
use gatelab_hal::Backend;
use tracing::{info, warn};

/// Where the demonstrations should run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendSelection {
    /// Ask for a remote device.
    pub use_remote: bool,
    /// Device ARN, or a short name such as `sv1`.
    pub device_arn: Option<String>,
}

impl BackendSelection {
    /// Always the local simulator.
    pub fn local() -> Self {
        Self::default()
    }

    /// A remote device, by ARN or short name.
    pub fn remote(device_arn: impl Into<String>) -> Self {
        Self {
            use_remote: true,
            device_arn: Some(device_arn.into()),
        }
    }

    /// Selection for the standard driver, which never leaves the local
    /// simulator. Asking it for a remote device is an error.
    pub fn standard(use_remote: bool) -> Result<Self> {
        if use_remote {
            anyhow::bail!(
                "--remote needs --driver braket; the standard driver runs on the local simulator only"
            );
        }
        Ok(Self::local())
    }

    /// Remote only when asked for AND a device is given.
    pub fn is_remote(&self) -> bool {
        self.remote_device().is_some()
    }

    fn remote_device(&self) -> Option<&str> {
        self.device_arn
            .as_deref()
            .filter(|arn| self.use_remote && !arn.is_empty())
    }
}

/// Open the selected backend.
///
/// Asking for a remote device without naming one logs a warning and falls
/// back to the local simulator.
pub async fn connect(selection: &BackendSelection) -> Result<Box<dyn Backend>> {
    if selection.use_remote && !selection.is_remote() {
        warn!("Remote execution requested without a device ARN; using the local simulator");
    }

    match selection.remote_device() {
        Some(device) => connect_remote(device).await,
        None => {
            info!("Using the local simulator");
            Ok(Box::new(SimulatorBackend::new()))
        }
    }
}

#[cfg(feature = "braket")]
async fn connect_remote(name_or_arn: &str) -> Result<Box<dyn Backend>> {
    use gatelab_adapter_braket::{BraketBackend, device};

    let device_arn = device::resolve(name_or_arn);
    info!(device = %device_arn, "Using Amazon Braket");
    match BraketBackend::connect(device_arn).await {
        Ok(backend) => Ok(Box::new(backend)),
        Err(e) => anyhow::bail!(
            "Failed to connect to AWS Braket: {e}. Set GATELAB_BRAKET_S3_BUCKET and configure AWS credentials."
        ),
    }
}

#[cfg(not(feature = "braket"))]
#[allow(clippy::unused_async)]
async fn connect_remote(name_or_arn: &str) -> Result<Box<dyn Backend>> {
    anyhow::bail!(
        "Braket backend not available for device '{name_or_arn}'. Rebuild with --features braket"
    );
}
