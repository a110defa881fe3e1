//! Configuration data model and validation

use crate::types::{AppError, Direction, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the peer server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Payload size per transfer in bytes
    #[serde(default = "default_payload_bytes")]
    pub payload_bytes: u64,

    /// Number of concurrent transfers per round
    #[serde(default = "default_concurrency")]
    pub concurrency: u32,

    /// Number of measurement rounds per direction
    #[serde(default = "default_round_count")]
    pub round_count: u32,

    /// Per-operation timeout duration
    #[serde(default = "default_timeout_secs")]
    pub timeout_seconds: u64,

    /// Measure the download direction
    #[serde(default = "default_true")]
    pub run_download: bool,

    /// Measure the upload direction
    #[serde(default = "default_true")]
    pub run_upload: bool,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,

    /// Run as the peer server instead of measuring
    #[serde(default)]
    pub serve: bool,

    /// Listen port for server mode
    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            payload_bytes: default_payload_bytes(),
            concurrency: default_concurrency(),
            round_count: default_round_count(),
            timeout_seconds: default_timeout_secs(),
            run_download: true,
            run_upload: true,
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
            serve: false,
            server_port: default_server_port(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Directions to measure, in phase order
    pub fn directions(&self) -> Vec<Direction> {
        let mut directions = Vec::new();
        if self.run_download {
            directions.push(Direction::Download);
        }
        if self.run_upload {
            directions.push(Direction::Upload);
        }
        directions
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(AppError::config("Base URL cannot be empty"));
        }

        match url::Url::parse(&self.base_url) {
            Ok(parsed) => {
                if parsed.scheme() != "http" && parsed.scheme() != "https" {
                    return Err(AppError::config(format!(
                        "Base URL must use http or https: {}",
                        self.base_url
                    )));
                }
                if parsed.host_str().is_none() {
                    return Err(AppError::config(format!("Base URL must have a host: {}", self.base_url)));
                }
            }
            Err(e) => {
                return Err(AppError::config(format!("Invalid base URL '{}': {}", self.base_url, e)));
            }
        }

        if self.payload_bytes == 0 {
            return Err(AppError::config("Payload size must be greater than 0"));
        }

        if self.payload_bytes > 1024 * 1024 * 1024 {
            return Err(AppError::config("Payload size cannot exceed 1 GiB"));
        }

        if self.concurrency == 0 {
            return Err(AppError::config("Concurrency must be greater than 0"));
        }

        if self.concurrency > 256 {
            return Err(AppError::config("Concurrency cannot exceed 256"));
        }

        if self.round_count == 0 {
            return Err(AppError::config("Round count must be greater than 0"));
        }

        if self.round_count > 100 {
            return Err(AppError::config("Round count cannot exceed 100"));
        }

        if self.timeout_seconds == 0 {
            return Err(AppError::config("Timeout must be greater than 0"));
        }

        if self.timeout_seconds > 300 {
            return Err(AppError::config("Timeout cannot exceed 300 seconds"));
        }

        if !self.serve && !self.run_download && !self.run_upload {
            return Err(AppError::config("At least one direction must be enabled"));
        }

        Ok(())
    }

    /// Non-fatal configuration concerns worth surfacing before a run
    pub fn validation_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let cpus = num_cpus::get() as u32;
        if self.concurrency > cpus * 4 {
            warnings.push(format!(
                "Concurrency {} heavily oversubscribes {} CPU cores; timing may reflect scheduler contention",
                self.concurrency, cpus
            ));
        }

        if self.payload_bytes < 1024 * 1024 {
            warnings.push(format!(
                "Payload of {} bytes is small; per-request overhead will dominate the measurement",
                self.payload_bytes
            ));
        }

        warnings
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(base_url) = std::env::var("LST_URL") {
            self.base_url = base_url.trim().to_string();
        }

        if let Ok(size_mb) = std::env::var("LST_SIZE_MB") {
            let mebibytes: u64 = size_mb
                .parse()
                .map_err(|e| AppError::config(format!("Invalid LST_SIZE_MB value '{}': {}", size_mb, e)))?;
            self.payload_bytes = mebibytes * 1024 * 1024;
        }

        if let Ok(threads) = std::env::var("LST_THREADS") {
            self.concurrency = threads
                .parse()
                .map_err(|e| AppError::config(format!("Invalid LST_THREADS value '{}': {}", threads, e)))?;
        }

        if let Ok(count) = std::env::var("LST_COUNT") {
            self.round_count = count
                .parse()
                .map_err(|e| AppError::config(format!("Invalid LST_COUNT value '{}': {}", count, e)))?;
        }

        if let Ok(timeout) = std::env::var("LST_TIMEOUT_SECONDS") {
            self.timeout_seconds = timeout
                .parse()
                .map_err(|e| AppError::config(format!("Invalid LST_TIMEOUT_SECONDS value '{}': {}", timeout, e)))?;
        }

        if let Ok(enable_color) = std::env::var("LST_ENABLE_COLOR") {
            self.enable_color = enable_color
                .parse()
                .map_err(|e| AppError::config(format!("Invalid LST_ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        if let Ok(port) = std::env::var("LST_SERVER_PORT") {
            self.server_port = port
                .parse()
                .map_err(|e| AppError::config(format!("Invalid LST_SERVER_PORT value '{}': {}", port, e)))?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_base_url() -> String {
    crate::defaults::DEFAULT_BASE_URL.to_string()
}

fn default_payload_bytes() -> u64 {
    crate::defaults::DEFAULT_PAYLOAD_BYTES
}

fn default_concurrency() -> u32 {
    crate::defaults::DEFAULT_CONCURRENCY
}

fn default_round_count() -> u32 {
    crate::defaults::DEFAULT_ROUND_COUNT
}

fn default_timeout_secs() -> u64 {
    crate::defaults::DEFAULT_TIMEOUT.as_secs()
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

fn default_server_port() -> u16 {
    crate::defaults::DEFAULT_SERVER_PORT
}

fn default_true() -> bool {
    true
}
