//! Type definitions and aliases

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Transfer direction for a measurement phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// GET the payload from the peer
    Download,
    /// POST the payload to the peer
    Upload,
}

impl Direction {
    /// Human-readable label used in report headers
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Download => "Download",
            Direction::Upload => "Upload",
        }
    }

    /// Peer endpoint path for this direction
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Direction::Download => "/download",
            Direction::Upload => "/upload",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rough throughput classification used for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedClass {
    /// Near line rate on a gigabit LAN (>= 500 Mbps)
    Fast,
    /// Usable but well below line rate (100-500 Mbps)
    Moderate,
    /// Something is likely wrong (< 100 Mbps)
    Slow,
}

impl SpeedClass {
    /// Classify a throughput figure in Mbps
    pub fn from_mbps(mbps: f64) -> Self {
        if mbps >= 500.0 {
            Self::Fast
        } else if mbps >= 100.0 {
            Self::Moderate
        } else {
            Self::Slow
        }
    }
}
