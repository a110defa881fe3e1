//! Colored terminal report formatting

use crate::models::Measurement;
use crate::output::ReportFormatter;
use crate::types::SpeedClass;
use colored::Colorize;
use std::fmt::Write as _;

/// Formatter styling the report with ANSI colors
pub struct ColoredFormatter;

impl ColoredFormatter {
    /// Create a new colored formatter
    pub fn new() -> Self {
        Self
    }

    /// Color a throughput figure by how healthy it looks for a LAN
    fn colorize_mbps(&self, mbps: f64) -> String {
        let text = format!("{:.2} Mbps", mbps);
        match SpeedClass::from_mbps(mbps) {
            SpeedClass::Fast => text.green().to_string(),
            SpeedClass::Moderate => text.yellow().to_string(),
            SpeedClass::Slow => text.red().to_string(),
        }
    }
}

impl Default for ColoredFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for ColoredFormatter {
    fn format_measurement(&self, measurement: &Measurement) -> String {
        let mut output = String::new();

        let header = format!("===== {} Speed Test Results =====", measurement.direction.label());
        let _ = writeln!(output, "{}", header.cyan().bold());

        for sample in measurement.series.samples() {
            let _ = writeln!(
                output,
                "Measurement {}: {}",
                sample.round,
                self.colorize_mbps(sample.mbps)
            );
            if !sample.is_clean() {
                let warning = format!(
                    "  ({} of {} transfers failed this round)",
                    sample.failed_units,
                    sample.failed_units + sample.completed_units
                );
                let _ = writeln!(output, "{}", warning.yellow());
            }
        }

        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "{} {}",
            "Average Speed:".bold(),
            self.colorize_mbps(measurement.summary.average_mbps)
        );
        let _ = writeln!(
            output,
            "{} {}",
            "Median Speed:".bold(),
            self.colorize_mbps(measurement.summary.median_mbps)
        );
        output.push_str(&"=".repeat(header.len()).cyan().bold().to_string());

        output
    }

    fn format_phase_start(&self, direction_label: &str) -> String {
        format!("Measuring {} speed...", direction_label.to_lowercase())
            .bold()
            .to_string()
    }
}
