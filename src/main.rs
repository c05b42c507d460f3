//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `hsts_check` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use hsts_check::check_url;
use hsts_check::cli::{Cli, Command};
use hsts_check::initialization::init_logger_with;
use hsts_check::server::start_server;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match &cli.command {
        Command::Serve(_) => {
            if let Err(e) = start_server(&config).await {
                eprintln!("hsts_check error: {:#}", e);
                process::exit(1);
            }
        }
        Command::Check(args) => {
            let response = check_url(&config, &args.url)
                .await
                .context("Failed to run check")?;
            println!("{}", response.to_json());
            if !response.is_success() {
                process::exit(1);
            }
        }
    }

    Ok(())
}
