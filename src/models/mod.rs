//! Data models for configuration and measurement results

pub mod config;
pub mod sample;

pub use config::Config;
pub use sample::{Measurement, Sample, SampleSeries, SummaryStatistics};
