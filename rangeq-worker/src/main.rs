//! RangeQ Worker - Range query task runner
//!
//! Fetches an array-and-queries payload from a remote task API, answers every
//! query through the prefix-table engine, and submits the result envelope.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod client;
mod config;
mod runner;

use config::WorkerConfig;

#[derive(Parser, Debug)]
#[command(name = "rangeq-worker")]
#[command(about = "Fetch, solve, and submit range query batches")]
#[command(version = "0.2.0")]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "rangeq.toml")]
    config: PathBuf,

    /// Base URL of the task API (overrides config)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Endpoint path serving the input payload (overrides config)
    #[arg(long)]
    data_endpoint: Option<String>,

    /// Endpoint path accepting the result envelope (overrides config)
    #[arg(long)]
    result_endpoint: Option<String>,

    /// Bearer token for the task API (overrides config)
    #[arg(short, long, env = "RANGEQ_TOKEN")]
    token: Option<String>,

    /// Print the result envelope instead of submitting it
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    /// Apply CLI overrides on top of the file configuration
    fn apply_to(&self, config: &mut WorkerConfig) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(endpoint) = &self.data_endpoint {
            config.api.data_endpoint = endpoint.clone();
        }
        if let Some(endpoint) = &self.result_endpoint {
            config.api.result_endpoint = endpoint.clone();
        }
        if let Some(token) = &self.token {
            config.auth.token = Some(token.clone());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    let env_filter = EnvFilter::new(format!(
        "rangeq_worker={},rangeq_core={}",
        log_level, log_level
    ));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    info!("RangeQ Worker v0.2.0 starting");

    // Load configuration and apply CLI overrides
    let mut config = WorkerConfig::load(&args.config)?;
    args.apply_to(&mut config);
    config.validate()?;

    match runner::run(&config, args.dry_run).await {
        Ok(envelope) => {
            info!(
                "Workflow completed: {} answers, {} unsupported",
                envelope.result.len(),
                envelope.unsupported_count()
            );
            Ok(())
        }
        Err(e) => {
            error!("Workflow failed: {:#}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_replace_file_values() {
        let args = Args::parse_from([
            "rangeq-worker",
            "--base-url",
            "https://tasks.example.com",
            "--token",
            "cli-token",
            "--data-endpoint",
            "payload",
        ]);

        let mut config = WorkerConfig::default();
        config.auth.token = Some("file-token".to_string());
        args.apply_to(&mut config);

        assert_eq!(config.api.base_url, "https://tasks.example.com");
        assert_eq!(config.api.data_endpoint, "payload");
        assert_eq!(config.auth.token.as_deref(), Some("cli-token"));
        // Untouched values keep their file/default settings
        assert_eq!(config.api.result_endpoint, "result");
    }
}
