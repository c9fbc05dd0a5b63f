//! AWS Braket API client wrapper.
//!
//! Wraps the AWS SDK for Braket and S3: task creation, status queries,
//! cancellation and result retrieval.

use std::fmt;
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::config::BraketConfig;
use crate::error::{BraketError, BraketResult};

/// AWS Braket API client.
pub struct BraketClient {
    /// Braket SDK client.
    braket: aws_sdk_braket::Client,
    /// S3 SDK client for result retrieval.
    s3: aws_sdk_s3::Client,
    /// S3 bucket for task results.
    s3_bucket: String,
    /// S3 key prefix for task results.
    s3_prefix: String,
    /// AWS region.
    region: String,
}

impl fmt::Debug for BraketClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BraketClient")
            .field("s3_bucket", &self.s3_bucket)
            .field("s3_prefix", &self.s3_prefix)
            .field("region", &self.region)
            .field("credentials", &"[REDACTED]")
            .finish()
    }
}

impl BraketClient {
    /// Create a new Braket client.
    ///
    /// Loads AWS credentials from the default chain (environment, SSO, config files, IAM role).
    pub async fn new(config: &BraketConfig) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .timeout_config(
                aws_config::timeout::TimeoutConfig::builder()
                    .operation_timeout(Duration::from_secs(60))
                    .connect_timeout(Duration::from_secs(10))
                    .build(),
            )
            .load()
            .await;

        Self {
            braket: aws_sdk_braket::Client::new(&sdk_config),
            s3: aws_sdk_s3::Client::new(&sdk_config),
            s3_bucket: config.s3_bucket.clone(),
            s3_prefix: config.s3_prefix.clone(),
            region: config.region.clone(),
        }
    }

    /// Create a quantum task running an OpenQASM 3 program.
    pub async fn create_task(
        &self,
        device_arn: &str,
        qasm: &str,
        shots: u32,
    ) -> BraketResult<String> {
        let resp = self
            .braket
            .create_quantum_task()
            .device_arn(device_arn)
            .action(openqasm_action(qasm))
            .shots(i64::from(shots))
            .output_s3_bucket(&self.s3_bucket)
            .output_s3_key_prefix(&self.s3_prefix)
            .send()
            .await
            .map_err(|e| BraketError::BraketApi(e.to_string()))?;

        Ok(resp.quantum_task_arn().to_string())
    }

    /// Get quantum task status.
    pub async fn get_task_status(&self, task_arn: &str) -> BraketResult<TaskStatus> {
        let resp = self
            .braket
            .get_quantum_task()
            .quantum_task_arn(task_arn)
            .send()
            .await
            .map_err(|e| {
                if e.to_string().contains("ResourceNotFoundException") {
                    BraketError::TaskNotFound(task_arn.to_string())
                } else {
                    BraketError::BraketApi(e.to_string())
                }
            })?;

        let status = match resp.status() {
            aws_sdk_braket::types::QuantumTaskStatus::Created => TaskStatus::Created,
            aws_sdk_braket::types::QuantumTaskStatus::Queued => TaskStatus::Queued,
            aws_sdk_braket::types::QuantumTaskStatus::Running => TaskStatus::Running,
            aws_sdk_braket::types::QuantumTaskStatus::Completed => TaskStatus::Completed,
            aws_sdk_braket::types::QuantumTaskStatus::Failed => TaskStatus::Failed(
                resp.failure_reason()
                    .unwrap_or("Unknown failure")
                    .to_string(),
            ),
            aws_sdk_braket::types::QuantumTaskStatus::Cancelling => TaskStatus::Cancelling,
            aws_sdk_braket::types::QuantumTaskStatus::Cancelled => TaskStatus::Cancelled,
            _ => TaskStatus::Failed("Unknown status".to_string()),
        };

        Ok(status)
    }

    /// Cancel a quantum task.
    pub async fn cancel_task(&self, task_arn: &str) -> BraketResult<()> {
        self.braket
            .cancel_quantum_task()
            .quantum_task_arn(task_arn)
            .send()
            .await
            .map_err(|e| BraketError::BraketApi(e.to_string()))?;

        Ok(())
    }

    /// Get task result from S3.
    ///
    /// Braket stores results as JSON in the configured S3 bucket under
    /// `{prefix}/{task_id}/results.json`.
    pub async fn get_task_result(&self, task_arn: &str) -> BraketResult<TaskResult> {
        let key = result_key(&self.s3_prefix, task_arn)?;

        let resp = self
            .s3
            .get_object()
            .bucket(&self.s3_bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| BraketError::S3Error(e.to_string()))?;

        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| BraketError::S3Error(e.to_string()))?;

        let result: TaskResult = serde_json::from_slice(&body.into_bytes())?;

        Ok(result)
    }
}

/// Task action document for an OpenQASM program.
fn openqasm_action(qasm: &str) -> String {
    serde_json::json!({
        "braketSchemaHeader": {
            "name": "braket.ir.openqasm.program",
            "version": "1"
        },
        "source": qasm
    })
    .to_string()
}

/// S3 key of a task's result document.
fn result_key(prefix: &str, task_arn: &str) -> BraketResult<String> {
    // arn:aws:braket:<region>:<account>:quantum-task/<id>
    let task_id = task_arn
        .rsplit_once('/')
        .map(|(_, id)| id)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| BraketError::InvalidTaskArn(task_arn.to_string()))?;

    Ok(format!("{prefix}/{task_id}/results.json"))
}

/// Quantum task status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task has been created.
    Created,
    /// Task is queued.
    Queued,
    /// Task is running.
    Running,
    /// Task completed successfully.
    Completed,
    /// Task failed with reason.
    Failed(String),
    /// Task is being cancelled.
    Cancelling,
    /// Task was cancelled.
    Cancelled,
}

impl TaskStatus {
    /// Check if the task is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Completed | TaskStatus::Failed(_) | TaskStatus::Cancelled
        )
    }
}

/// Task result from Braket (stored in S3).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResult {
    /// Measurement counts (bitstring -> count).
    #[serde(default)]
    pub measurement_counts: Option<FxHashMap<String, u64>>,
    /// Measurement probabilities (bitstring -> probability).
    #[serde(default)]
    pub measurement_probabilities: Option<FxHashMap<String, f64>>,
    /// Raw measurements, one array of bits per shot.
    #[serde(default)]
    pub measurements: Option<Vec<Vec<u8>>>,
    /// Result metadata.
    #[serde(default)]
    pub additional_metadata: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_terminal() {
        assert!(TaskStatus::Completed.is_terminal());
        assert!(TaskStatus::Failed("err".into()).is_terminal());
        assert!(TaskStatus::Cancelled.is_terminal());
        assert!(!TaskStatus::Created.is_terminal());
        assert!(!TaskStatus::Queued.is_terminal());
        assert!(!TaskStatus::Running.is_terminal());
        assert!(!TaskStatus::Cancelling.is_terminal());
    }

    #[test]
    fn test_openqasm_action() {
        let action: serde_json::Value =
            serde_json::from_str(&openqasm_action("OPENQASM 3.0;\n")).unwrap();
        assert_eq!(
            action["braketSchemaHeader"]["name"],
            "braket.ir.openqasm.program"
        );
        assert_eq!(action["source"], "OPENQASM 3.0;\n");
    }

    #[test]
    fn test_result_key() {
        let key = result_key(
            "gatelab-results",
            "arn:aws:braket:us-east-1:123456789012:quantum-task/5c2f1e",
        )
        .unwrap();
        assert_eq!(key, "gatelab-results/5c2f1e/results.json");

        assert!(matches!(
            result_key("p", "no-slash-here"),
            Err(BraketError::InvalidTaskArn(_))
        ));
        assert!(result_key("p", "arn:quantum-task/").is_err());
    }

    #[test]
    fn test_task_result_deserialize_counts() {
        let json = r#"{
            "measurementCounts": {"0": 510, "1": 490},
            "measuredQubits": [0]
        }"#;
        let result: TaskResult = serde_json::from_str(json).unwrap();
        let counts = result.measurement_counts.unwrap();
        assert_eq!(counts.get("0"), Some(&510));
        assert_eq!(counts.get("1"), Some(&490));
    }

    #[test]
    fn test_task_result_deserialize_measurements() {
        let json = r#"{
            "measurements": [[0], [1], [1], [1]],
            "measuredQubits": [0],
            "additionalMetadata": {"action": {}}
        }"#;
        let result: TaskResult = serde_json::from_str(json).unwrap();
        let measurements = result.measurements.unwrap();
        assert_eq!(measurements.len(), 4);
        assert_eq!(measurements[1], vec![1]);
        assert!(result.additional_metadata.is_some());
    }
}
