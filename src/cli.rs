//! Command-line interface.
//!
//! Lives in the library so the argument parsing can be tested directly.

use std::net::IpAddr;

use clap::{Args, Parser, Subcommand};

use crate::config::{
    Config, LogFormat, LogLevel, DEFAULT_BIND_ADDRESS, DEFAULT_CORS_ORIGIN, DEFAULT_PORT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Checks whether a site's HSTS header qualifies for the browser preload list.
#[derive(Debug, Parser)]
#[command(name = "hsts_check", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP endpoint
    Serve(ServeArgs),
    /// Check a single URL and print the JSON result
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Value of the Access-Control-Allow-Origin response header
    #[arg(long, env = "API_CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,

    #[command(flatten)]
    pub client: ClientArgs,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// URL to check (https:// is assumed when no scheme is given)
    pub url: String,

    #[command(flatten)]
    pub client: ClientArgs,
}

/// Outbound request options shared by both subcommands
#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Total request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Cli {
    /// Library configuration for the parsed arguments.
    pub fn config(&self) -> Config {
        let mut config = Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            ..Default::default()
        };

        let client = match &self.command {
            Command::Serve(args) => {
                config.bind_address = args.bind;
                config.port = args.port;
                config.cors_origin = args.cors_origin.clone();
                &args.client
            }
            Command::Check(args) => &args.client,
        };
        config.timeout_seconds = client.timeout_seconds;
        config.user_agent = client.user_agent.clone();
        config
    }
}
