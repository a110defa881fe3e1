//! Plain text report formatting

use crate::models::Measurement;
use crate::output::ReportFormatter;
use std::fmt::Write as _;

/// Plain text formatter without any terminal styling
pub struct PlainFormatter;

impl PlainFormatter {
    /// Create a new plain formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for PlainFormatter {
    fn format_measurement(&self, measurement: &Measurement) -> String {
        let mut output = String::new();

        let header = format!("===== {} Speed Test Results =====", measurement.direction.label());
        let _ = writeln!(output, "{}", header);

        for sample in measurement.series.samples() {
            let _ = writeln!(output, "Measurement {}: {:.2} Mbps", sample.round, sample.mbps);
            if !sample.is_clean() {
                let _ = writeln!(
                    output,
                    "  ({} of {} transfers failed this round)",
                    sample.failed_units,
                    sample.failed_units + sample.completed_units
                );
            }
        }

        let _ = writeln!(output);
        let _ = writeln!(output, "Average Speed: {:.2} Mbps", measurement.summary.average_mbps);
        let _ = writeln!(output, "Median Speed: {:.2} Mbps", measurement.summary.median_mbps);
        output.push_str(&"=".repeat(header.len()));

        output
    }

    fn format_phase_start(&self, direction_label: &str) -> String {
        format!("Measuring {} speed...", direction_label.to_lowercase())
    }
}
