//! LAN Speed Tester
//!
//! A LAN throughput testing tool that measures download and upload
//! bandwidth against a peer server by timing batches of parallel HTTP
//! transfers and reporting per-round, average, and median speeds.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod output;
pub mod runner;
pub mod server;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, Measurement, Sample, SampleSeries, SummaryStatistics};
pub use orchestrator::MeasurementOrchestrator;
pub use output::{OutputFormatterFactory, ReportFormatter};
pub use runner::{RoundExecutor, TransferRunner};
pub use types::Direction;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
    pub const DEFAULT_PAYLOAD_BYTES: u64 = 10 * 1024 * 1024;
    pub const DEFAULT_CONCURRENCY: u32 = 4;
    pub const DEFAULT_ROUND_COUNT: u32 = 5;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_SERVER_PORT: u16 = 8080;
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
