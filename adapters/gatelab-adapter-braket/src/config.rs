//! Connection settings read from the environment.

use std::time::Duration;

use crate::error::{BraketError, BraketResult};

/// S3 bucket for task results (required).
pub const ENV_S3_BUCKET: &str = "GATELAB_BRAKET_S3_BUCKET";
/// S3 key prefix for task results.
pub const ENV_S3_PREFIX: &str = "GATELAB_BRAKET_S3_PREFIX";
/// AWS region.
pub const ENV_REGION: &str = "AWS_REGION";

const DEFAULT_S3_PREFIX: &str = "gatelab-results";
const DEFAULT_REGION: &str = "us-east-1";

/// Interval between task status queries.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Give up waiting after this long. Matches the SDK's own default of five
/// days, long enough for QPU queues.
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(5 * 24 * 60 * 60);

/// Settings for a Braket connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BraketConfig {
    /// AWS region.
    pub region: String,
    /// S3 bucket for task results.
    pub s3_bucket: String,
    /// S3 key prefix for task results.
    pub s3_prefix: String,
    /// Interval between status queries.
    pub poll_interval: Duration,
    /// Maximum time to wait for a task to finish.
    pub poll_timeout: Duration,
}

impl BraketConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> BraketResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> BraketResult<Self> {
        let s3_bucket = lookup(ENV_S3_BUCKET)
            .filter(|bucket| !bucket.is_empty())
            .ok_or(BraketError::MissingS3Bucket)?;
        let s3_prefix = lookup(ENV_S3_PREFIX).unwrap_or_else(|| DEFAULT_S3_PREFIX.to_string());
        let region = lookup(ENV_REGION).unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Self {
            region,
            s3_bucket,
            s3_prefix,
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_timeout: DEFAULT_POLL_TIMEOUT,
        })
    }

    /// Override the polling cadence.
    #[must_use]
    pub fn with_polling(mut self, interval: Duration, timeout: Duration) -> Self {
        self.poll_interval = interval;
        self.poll_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: FxHashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BraketConfig::from_lookup(lookup_in(&[(ENV_S3_BUCKET, "amazon-braket-demo")]))
            .unwrap();

        assert_eq!(config.s3_bucket, "amazon-braket-demo");
        assert_eq!(config.s3_prefix, "gatelab-results");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.poll_interval, Duration::from_secs(1));
        assert_eq!(config.poll_timeout, Duration::from_secs(432_000));
    }

    #[test]
    fn test_overrides() {
        let config = BraketConfig::from_lookup(lookup_in(&[
            (ENV_S3_BUCKET, "bucket"),
            (ENV_S3_PREFIX, "runs"),
            (ENV_REGION, "eu-north-1"),
        ]))
        .unwrap();

        assert_eq!(config.s3_prefix, "runs");
        assert_eq!(config.region, "eu-north-1");
    }

    #[test]
    fn test_missing_bucket() {
        let err = BraketConfig::from_lookup(lookup_in(&[])).unwrap_err();
        assert!(matches!(err, BraketError::MissingS3Bucket));

        let err = BraketConfig::from_lookup(lookup_in(&[(ENV_S3_BUCKET, "")])).unwrap_err();
        assert!(matches!(err, BraketError::MissingS3Bucket));
    }
}
