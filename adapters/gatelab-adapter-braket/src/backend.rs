//! AWS Braket backend implementation.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use gatelab_hal::{Backend, Counts, ExecutionResult, HalError, HalResult};
use gatelab_ir::{Circuit, qasm};

use crate::api::{BraketClient, TaskResult, TaskStatus};
use crate::config::BraketConfig;
use crate::device;
use crate::error::{BraketError, BraketResult};

/// AWS Braket backend adapter.
///
/// Each submission becomes one quantum task. `submit` blocks (asynchronously)
/// until the task reaches a terminal state, then downloads its result.
#[derive(Debug)]
pub struct BraketBackend {
    /// Braket API client.
    client: BraketClient,
    /// Device ARN.
    device_arn: String,
    /// Polling cadence.
    poll_interval: Duration,
    poll_timeout: Duration,
}

impl BraketBackend {
    /// Connect to a Braket device.
    ///
    /// Reads configuration from environment variables:
    /// - `GATELAB_BRAKET_S3_BUCKET` (required): S3 bucket for task results
    /// - `GATELAB_BRAKET_S3_PREFIX` (optional, default: `"gatelab-results"`)
    /// - `AWS_REGION` (optional, default: `"us-east-1"`)
    ///
    /// AWS credentials are loaded from the default chain (environment,
    /// SSO, config files, IAM role).
    pub async fn connect(device_arn: impl Into<String>) -> BraketResult<Self> {
        let config = BraketConfig::from_env()?;
        Ok(Self::connect_with(device_arn, &config).await)
    }

    /// Connect with explicit settings.
    pub async fn connect_with(device_arn: impl Into<String>, config: &BraketConfig) -> Self {
        let device_arn = device_arn.into();
        let client = BraketClient::new(config).await;

        info!(
            device = %device_arn,
            provider = device::provider_from_arn(&device_arn),
            simulator = device::is_simulator(&device_arn),
            region = %config.region,
            "Connected to Amazon Braket"
        );

        Self {
            client,
            device_arn,
            poll_interval: config.poll_interval,
            poll_timeout: config.poll_timeout,
        }
    }

    /// Get the device ARN.
    pub fn device_arn(&self) -> &str {
        &self.device_arn
    }

    /// Convert circuit to OpenQASM 3.0 string.
    fn circuit_to_qasm(circuit: &Circuit) -> BraketResult<String> {
        qasm::emit(circuit).map_err(|e| BraketError::CircuitError(e.to_string()))
    }

    async fn run_task(&self, qasm: &str, shots: u32) -> BraketResult<(String, TaskResult)> {
        let task_arn = self
            .client
            .create_task(&self.device_arn, qasm, shots)
            .await?;
        debug!(task = %task_arn, "Created quantum task");

        let client = &self.client;
        let task = task_arn.as_str();
        let waited = wait_for_task(
            task,
            move || client.get_task_status(task),
            self.poll_interval,
            self.poll_timeout,
        )
        .await;

        if matches!(waited, Err(BraketError::Timeout(_))) {
            if let Err(e) = self.client.cancel_task(&task_arn).await {
                warn!(task = %task_arn, error = %e, "Failed to cancel timed-out task");
            }
        }
        waited?;

        let result = self.client.get_task_result(&task_arn).await?;
        Ok((task_arn, result))
    }
}

/// Poll `status` every `interval` until the task reaches a terminal state.
async fn wait_for_task<F, Fut>(
    task_arn: &str,
    mut status: F,
    interval: Duration,
    timeout: Duration,
) -> BraketResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = BraketResult<TaskStatus>>,
{
    let start = Instant::now();
    loop {
        let current = status().await?;
        if current.is_terminal() {
            return match current {
                TaskStatus::Completed => Ok(()),
                TaskStatus::Failed(reason) => Err(BraketError::TaskFailed(reason)),
                _ => Err(BraketError::TaskCancelled(task_arn.to_string())),
            };
        }
        debug!(task = task_arn, status = ?current, "Task not finished");

        if start.elapsed() >= timeout {
            return Err(BraketError::Timeout(task_arn.to_string()));
        }
        tokio::time::sleep(interval).await;
    }
}

/// Turn a task result document into a histogram.
///
/// Prefers `measurementCounts`, then raw `measurements`, then
/// `measurementProbabilities` scaled by the submitted shot count.
fn parse_result(result: &TaskResult, shots: u32) -> BraketResult<Counts> {
    let mut counts = Counts::new();

    if let Some(measurement_counts) = &result.measurement_counts {
        for (bitstring, &count) in measurement_counts {
            counts.insert(bitstring.clone(), count);
        }
        return Ok(counts);
    }

    if let Some(measurements) = &result.measurements {
        for measurement in measurements {
            let bitstring: String = measurement
                .iter()
                .map(|b| if *b == 0 { '0' } else { '1' })
                .collect();
            counts.insert(bitstring, 1);
        }
        return Ok(counts);
    }

    if let Some(probs) = &result.measurement_probabilities {
        for (bitstring, &prob) in probs {
            let count = (prob * f64::from(shots)).max(0.0).round() as u64;
            counts.insert(bitstring.clone(), count);
        }
        return Ok(counts);
    }

    Err(BraketError::ResultParseError(
        "result contains no measurement data".into(),
    ))
}

#[async_trait]
impl Backend for BraketBackend {
    #[instrument(skip(self, circuit), fields(device = %self.device_arn, circuit = circuit.name()))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        if shots == 0 {
            return Err(HalError::InvalidShots("shots must be at least 1".into()));
        }

        let qasm = Self::circuit_to_qasm(circuit)?;
        let start = Instant::now();
        let (task_arn, task_result) = self.run_task(&qasm, shots).await?;
        let counts = parse_result(&task_result, shots)?;

        if counts.total_shots() != u64::from(shots) {
            warn!(
                task = %task_arn,
                received = counts.total_shots(),
                requested = shots,
                "Device returned a different number of shots"
            );
        }

        let metadata = serde_json::json!({
            "task_arn": task_arn,
            "device_arn": self.device_arn,
            "additional_metadata": task_result.additional_metadata,
        });

        Ok(ExecutionResult::new(counts, shots)
            .with_execution_time(start.elapsed().as_millis() as u64)
            .with_metadata(metadata))
    }
}
