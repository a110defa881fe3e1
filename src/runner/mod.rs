//! Parallel transfer execution with batch timing
//!
//! One round fans out `concurrency` independent transfers against the peer,
//! waits for all of them, and converts the batch wall-clock time plus the
//! bytes actually moved into a single throughput sample. Timing covers the
//! whole batch, never individual transfers.

use crate::{
    error::{AppError, Result},
    logging,
    models::{Config, Sample},
    types::Direction,
};
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use reqwest::{header, Client};
use std::time::{Duration, Instant};

/// Executes one measurement round and produces its sample
///
/// The orchestrator only depends on this trait, so tests can substitute a
/// scripted executor for the real network runner.
#[async_trait]
pub trait RoundExecutor: Send + Sync {
    /// Run one round of concurrent transfers in the given direction
    async fn run_round(&self, direction: Direction, round: u32) -> Result<Sample>;
}

/// Network transfer runner backed by a reqwest client
#[derive(Clone)]
pub struct TransferRunner {
    client: Client,
    download_url: String,
    upload_url: String,
    payload: Bytes,
    concurrency: u32,
}

impl TransferRunner {
    /// Create a runner from a validated configuration
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        // Keeping no idle connections forces every transfer unit onto its
        // own connection, matching the one-connection-per-unit model.
        let client = Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(0)
            .user_agent(concat!("lan-speed-tester/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::network(format!("Failed to create HTTP client: {}", e)))?;

        let base = url::Url::parse(&config.base_url)?;
        let download_url = base.join(Direction::Download.endpoint_path())?.to_string();
        let upload_url = base.join(Direction::Upload.endpoint_path())?.to_string();

        let payload = Bytes::from(vec![b'A'; config.payload_bytes as usize]);

        Ok(Self {
            client,
            download_url,
            upload_url,
            payload,
            concurrency: config.concurrency,
        })
    }

    /// Execute one round: fan out, barrier, convert to Mbps
    pub async fn run(&self, direction: Direction, round: u32) -> Result<Sample> {
        let mut tasks = Vec::with_capacity(self.concurrency as usize);

        let start = Instant::now();
        for unit in 0..self.concurrency {
            let runner = self.clone();
            tasks.push(tokio::spawn(async move {
                match direction {
                    Direction::Download => runner.download_once().await,
                    Direction::Upload => runner.upload_once().await,
                }
                .map_err(|e| (unit, e))
            }));
        }

        let outcomes = futures::future::join_all(tasks).await;
        let elapsed = start.elapsed();

        let mut total_bytes: u64 = 0;
        let mut completed_units: u32 = 0;
        let mut failed_units: u32 = 0;

        for outcome in outcomes {
            match outcome {
                Ok(Ok(bytes)) => {
                    total_bytes += bytes;
                    completed_units += 1;
                }
                Ok(Err((unit, error))) => {
                    failed_units += 1;
                    logging::warn(
                        "runner",
                        &format!("{} round {} unit {} failed: {}", direction, round, unit, error),
                    );
                }
                Err(join_error) => {
                    failed_units += 1;
                    logging::warn(
                        "runner",
                        &format!("{} round {} task aborted: {}", direction, round, join_error),
                    );
                }
            }
        }

        let mbps = throughput_mbps(total_bytes, elapsed)?;

        logging::debug(
            "runner",
            &format!(
                "{} round {}: {} bytes over {:.3}s across {} units ({} failed)",
                direction,
                round,
                total_bytes,
                elapsed.as_secs_f64(),
                completed_units,
                failed_units
            ),
        );

        Ok(Sample::new(round, mbps, elapsed, completed_units, failed_units))
    }

    /// Fetch the download payload once, discarding the bytes
    async fn download_once(&self) -> Result<u64> {
        let response = self.client.get(&self.download_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::http_request(format!(
                "download returned status {}",
                status
            )));
        }

        let mut stream = response.bytes_stream();
        let mut received: u64 = 0;
        while let Some(chunk) = stream.next().await {
            received += chunk?.len() as u64;
        }

        Ok(received)
    }

    /// Send the upload payload once, discarding the response
    async fn upload_once(&self) -> Result<u64> {
        let response = self
            .client
            .post(&self.upload_url)
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(self.payload.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::http_request(format!(
                "upload returned status {}",
                status
            )));
        }

        // Drain whatever the peer answers with
        response.bytes().await?;

        Ok(self.payload.len() as u64)
    }
}

#[async_trait]
impl RoundExecutor for TransferRunner {
    async fn run_round(&self, direction: Direction, round: u32) -> Result<Sample> {
        self.run(direction, round).await
    }
}

/// Convert transferred bytes and batch duration into megabits per second
///
/// Fails on a non-positive duration or when nothing was transferred, so a
/// degenerate round can never produce an Infinity/NaN or zero sample.
pub fn throughput_mbps(total_bytes: u64, elapsed: Duration) -> Result<f64> {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return Err(AppError::measurement("non-positive batch duration"));
    }
    if total_bytes == 0 {
        return Err(AppError::measurement("no transfer completed in this round"));
    }

    let bits = (total_bytes * 8) as f64;
    Ok(bits / (secs * 1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_formula_determinism() {
        // 10 MiB payload, 4 concurrent units, 2.0s batch time
        let total_bytes = 10 * 1024 * 1024 * 4;
        let mbps = throughput_mbps(total_bytes, Duration::from_secs(2)).unwrap();
        assert_eq!(mbps, 160.0);
    }

    #[test]
    fn test_throughput_single_unit() {
        let mbps = throughput_mbps(1024 * 1024, Duration::from_secs(1)).unwrap();
        assert_eq!(mbps, 8.0);
    }

    #[test]
    fn test_zero_duration_is_measurement_error() {
        let result = throughput_mbps(1024, Duration::ZERO);
        assert!(matches!(result, Err(AppError::Measurement(_))));
    }

    #[test]
    fn test_zero_bytes_is_measurement_error() {
        let result = throughput_mbps(0, Duration::from_secs(1));
        assert!(matches!(result, Err(AppError::Measurement(_))));
    }

    #[test]
    fn test_throughput_is_finite_and_positive() {
        let mbps = throughput_mbps(123_456_789, Duration::from_millis(137)).unwrap();
        assert!(mbps.is_finite());
        assert!(mbps > 0.0);
    }

    #[test]
    fn test_runner_rejects_invalid_config() {
        let mut config = Config::default();
        config.concurrency = 0;
        assert!(TransferRunner::new(&config).is_err());

        let mut config = Config::default();
        config.payload_bytes = 0;
        assert!(TransferRunner::new(&config).is_err());
    }

    #[test]
    fn test_runner_builds_endpoint_urls() {
        let mut config = Config::default();
        config.base_url = "http://192.168.1.50:9000".to_string();
        config.payload_bytes = 1024;
        let runner = TransferRunner::new(&config).unwrap();

        assert_eq!(runner.download_url, "http://192.168.1.50:9000/download");
        assert_eq!(runner.upload_url, "http://192.168.1.50:9000/upload");
        assert_eq!(runner.payload.len(), 1024);
    }
}
