//! Report formatting for measurement results
//!
//! The measurement core returns structured results; everything about how
//! they look on a terminal lives here, behind a trait so plain and colored
//! rendering stay interchangeable.

pub mod colored;
pub mod formatter;

pub use colored::ColoredFormatter;
pub use formatter::PlainFormatter;

use crate::models::Measurement;

/// Renders a finished measurement for human consumption
pub trait ReportFormatter: Send + Sync {
    /// Format a direction's full report: per-round samples in round
    /// order, then average and median
    fn format_measurement(&self, measurement: &Measurement) -> String;

    /// Format a short progress line announcing a phase
    fn format_phase_start(&self, direction_label: &str) -> String;
}

/// Factory for creating the right formatter for the terminal
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on the color setting
    pub fn create_formatter(enable_color: bool) -> Box<dyn ReportFormatter> {
        if enable_color {
            Box::new(ColoredFormatter::new())
        } else {
            Box::new(PlainFormatter::new())
        }
    }
}
