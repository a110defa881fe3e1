//! Configuration assembly from defaults, environment, and CLI arguments

use crate::{
    cli::Cli,
    error::Result,
    models::Config,
};

/// Load the effective configuration
///
/// Precedence: CLI arguments > environment variables (including a local
/// `.env` file) > built-in defaults. The result is validated before use.
pub fn load_config(cli: Cli) -> Result<Config> {
    // Load .env file if present; ignore a missing file
    dotenv::dotenv().ok();

    let mut config = Config::default();
    config.merge_from_env()?;
    apply_cli_overrides(&mut config, &cli);

    config.validate()?;
    Ok(config)
}

/// Overlay CLI arguments onto the configuration
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref url) = cli.url {
        config.base_url = url.clone();
    }

    if let Some(size_mb) = cli.size_mb {
        config.payload_bytes = size_mb * 1024 * 1024;
    }

    if let Some(threads) = cli.threads {
        config.concurrency = threads;
    }

    if let Some(count) = cli.count {
        config.round_count = count;
    }

    if let Some(timeout) = cli.timeout {
        config.timeout_seconds = timeout;
    }

    if cli.download_only {
        config.run_upload = false;
    }

    if cli.upload_only {
        config.run_download = false;
    }

    config.enable_color = cli.use_colors();
    config.verbose = cli.verbose;
    config.debug = cli.debug;

    config.serve = cli.serve;
    if let Some(port) = cli.port {
        config.server_port = port;
    }
}
