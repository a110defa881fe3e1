//! Command-line interface definition and validation

use clap::Parser;

/// LAN Speed Tester - measure download and upload throughput against a peer
#[derive(Parser, Debug, Clone)]
#[command(name = "lan-speed-tester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the peer server
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Payload size per transfer in MiB
    #[arg(short = 's', long = "size-mb", value_name = "MIB")]
    pub size_mb: Option<u64>,

    /// Number of concurrent transfers per round
    #[arg(short = 't', long)]
    pub threads: Option<u32>,

    /// Number of measurement rounds per direction
    #[arg(short = 'c', long)]
    pub count: Option<u32>,

    /// Per-operation timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Measure only the download direction
    #[arg(long)]
    pub download_only: bool,

    /// Measure only the upload direction
    #[arg(long)]
    pub upload_only: bool,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Run as the peer server instead of measuring
    #[arg(long)]
    pub serve: bool,

    /// Listen port for server mode
    #[arg(short = 'p', long, requires = "serve")]
    pub port: Option<u16>,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.download_only && self.upload_only {
            return Err("Cannot specify both --download-only and --upload-only".to_string());
        }

        if self.serve && (self.download_only || self.upload_only) {
            return Err("Direction flags do not apply in --serve mode".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }
}

/// Detect whether the terminal is likely to render ANSI colors
fn supports_color() -> bool {
    use std::io::IsTerminal;

    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if matches!(std::env::var("TERM"), Ok(term) if term == "dumb") {
        return false;
    }

    std::io::stdout().is_terminal()
}
