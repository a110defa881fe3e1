//! LAN Speed Tester - Main CLI Application
//!
//! Measures download and upload throughput against a peer server with
//! batches of parallel HTTP transfers, or runs the peer server itself.

use clap::Parser;
use lan_speed_tester::{
    cli::Cli,
    config::load_config,
    error::{AppError, Result},
    logging,
    output::OutputFormatterFactory,
    server,
    MeasurementOrchestrator, TransferRunner,
};
use std::process;

#[tokio::main]
async fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("Please report this issue at: https://github.com/MaurUppi/lan-speed-tester/issues");
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(1);
    }

    // Handle the actual application logic
    if let Err(e) = run_application(cli).await {
        eprintln!("Error: {}", e);

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    // Load and validate configuration
    let config = load_config(cli)?;
    logging::init(&config);

    if config.debug {
        println!("{} v{}", lan_speed_tester::PKG_NAME, lan_speed_tester::VERSION);
        println!("Configuration loaded successfully:");
        println!("  Base URL: {}", config.base_url);
        println!("  Payload: {} bytes", config.payload_bytes);
        println!("  Concurrency: {}", config.concurrency);
        println!("  Rounds: {}", config.round_count);
        println!("  Timeout: {}s", config.timeout_seconds);
        println!();
    }

    for warning in config.validation_warnings() {
        logging::warn("config", &warning);
    }

    if config.serve {
        return server::serve(config.server_port, config.payload_bytes).await;
    }

    run_measurements(&config).await
}

/// Run the configured measurement phases sequentially
async fn run_measurements(config: &lan_speed_tester::Config) -> Result<()> {
    let runner = TransferRunner::new(config)?;
    let orchestrator = MeasurementOrchestrator::new(runner, config);
    let formatter = OutputFormatterFactory::create_formatter(config.enable_color);

    let directions = config.directions();
    let mut failed_phases = 0;

    for (i, direction) in directions.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", formatter.format_phase_start(direction.label()));

        match orchestrator.measure(*direction).await {
            Ok(measurement) => {
                println!("{}", formatter.format_measurement(&measurement));
            }
            Err(e) => {
                failed_phases += 1;
                eprintln!("{}", e.format_for_console(config.enable_color));
                eprintln!("{} phase failed, continuing", direction.label());
            }
        }
    }

    if failed_phases == directions.len() {
        Err(AppError::measurement("all measurement phases failed - check that the peer server is reachable"))
    } else {
        Ok(())
    }
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - Verify the URL format (must start with http:// or https://)");
            eprintln!("  - Payload size, thread count, and round count must all be positive");
        }
        AppError::Network(_) | AppError::HttpRequest(_) => {
            eprintln!();
            eprintln!("Network troubleshooting:");
            eprintln!("  - Check that the peer server is running (try its /health endpoint)");
            eprintln!("  - Verify firewall settings");
            eprintln!("  - Start a peer with: lst --serve");
        }
        AppError::Timeout(_) => {
            eprintln!();
            eprintln!("Timeout troubleshooting:");
            eprintln!("  - Increase the timeout with --timeout");
            eprintln!("  - Reduce the payload size with --size-mb");
        }
        AppError::Measurement(_) => {
            eprintln!();
            eprintln!("Measurement troubleshooting:");
            eprintln!("  - Verify the peer server is reachable from this host");
            eprintln!("  - Reduce the thread count with --threads");
        }
        _ => {}
    }
}
