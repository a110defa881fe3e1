//! Throughput samples and measurement result data models

use crate::types::Direction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single throughput measurement produced by one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// Round index, 1-based, in execution order
    pub round: u32,

    /// Measured throughput in megabits per second
    pub mbps: f64,

    /// Wall-clock duration of the whole transfer batch
    pub elapsed: Duration,

    /// Concurrent transfers that ran to completion
    pub completed_units: u32,

    /// Concurrent transfers that failed or timed out
    pub failed_units: u32,

    /// Timestamp when the round completed
    pub timestamp: DateTime<Utc>,
}

impl Sample {
    /// Create a new sample for a completed round
    pub fn new(round: u32, mbps: f64, elapsed: Duration, completed_units: u32, failed_units: u32) -> Self {
        Self {
            round,
            mbps,
            elapsed,
            completed_units,
            failed_units,
            timestamp: Utc::now(),
        }
    }

    /// Check whether every transfer unit in the round completed
    pub fn is_clean(&self) -> bool {
        self.failed_units == 0
    }
}

/// Ordered throughput samples for one direction
///
/// Samples are appended in round order and the order is preserved for
/// reporting; statistics work on a copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSeries {
    /// Direction these samples were measured in
    pub direction: Direction,

    samples: Vec<Sample>,
}

impl SampleSeries {
    /// Create an empty series for a direction
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            samples: Vec::new(),
        }
    }

    /// Create an empty series with capacity for the expected round count
    pub fn with_capacity(direction: Direction, rounds: usize) -> Self {
        Self {
            direction,
            samples: Vec::with_capacity(rounds),
        }
    }

    /// Append the sample of a completed round
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Samples in round order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Throughput values in round order
    pub fn mbps_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.mbps).collect()
    }

    /// Number of collected samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the series holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total failed transfer units across all rounds
    pub fn total_failed_units(&self) -> u32 {
        self.samples.iter().map(|s| s.failed_units).sum()
    }
}

/// Derived summary of a finalized sample series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean across all samples (Mbps)
    pub average_mbps: f64,

    /// Median across all samples (Mbps)
    pub median_mbps: f64,
}

/// Complete result of one direction's measurement phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    /// Direction this measurement covers
    pub direction: Direction,

    /// Per-round samples in round order
    pub series: SampleSeries,

    /// Summary computed from the finalized series
    pub summary: SummaryStatistics,
}
