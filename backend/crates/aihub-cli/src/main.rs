//! aihub - AI Hub account CLI
//!
//! # Examples
//!
//! ```bash
//! # Create an account and sign in
//! aihub register alice s3cret
//! aihub login alice s3cret
//!
//! # Track sessions for the signed-in user
//! aihub session add 6f1c0e2a
//! aihub session list --pretty
//! ```

use aihub_auth::{AuthClient, FileStore, SessionClient};
use aihub_cli::{Cli, CliResult, execute};
use aihub_config::{Config, LogSink};

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.server, cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(server: Option<String>, command: aihub_cli::Commands) -> CliResult<Value> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    // stdout carries the command result
    config.init_logger(LogSink::Stderr)?;

    // Explicit flag > config/env
    let base_url = server.unwrap_or_else(|| config.client.base_url.clone());
    let http = AuthClient::with_timeout(&base_url, config.client.request_timeout())?;
    let store = FileStore::new(config.storage_path()?);
    let client = SessionClient::new(http, store);

    execute(&client, command).await
}
