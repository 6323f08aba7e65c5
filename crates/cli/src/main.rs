// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `boa` - command-line client for the Boa API
//!
//! Credentials come from `--user`/`BOA_USER` and `BOA_PASSWORD`. The
//! endpoint can be changed with `--host`/`BOA_HOST` and `--path`/`BOA_PATH`,
//! or in `$XDG_CONFIG_HOME/boa/config.toml`. Logging goes to stderr and is
//! filtered by `BOA_LOG` (default `warn`).

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod color;
mod commands;
mod config;
mod exit_error;
mod output;

use anyhow::Result;
use boa_client::{BoaClient, Transport};
use boa_core::Clock;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::config::{FileConfig, Overrides};
use crate::exit_error::{exit_code, ExitError};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "boa",
    version = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH")),
    about = "Query the Boa source-code analysis service",
    styles = color::styles(),
)]
struct Cli {
    /// API host, without scheme or path
    #[arg(long, global = true, env = "BOA_HOST")]
    host: Option<String>,

    /// API path on the host, starting with `/`
    #[arg(long, global = true, env = "BOA_PATH")]
    path: Option<String>,

    /// Boa username (password is read from BOA_PASSWORD)
    #[arg(short, long, global = true, env = "BOA_USER")]
    user: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, global = true, env = "BOA_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            path: self.path.clone(),
            user: self.user.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BOA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let overrides = cli.overrides();
    let file = FileConfig::load()?;
    let endpoint = config::resolve_endpoint(&overrides, &file)?;
    let user = config::resolve_user(&overrides, &file)?;
    let password = config::password()?;

    tracing::debug!(host = endpoint.host(), path = endpoint.path(), "connecting");
    let client = BoaClient::with_endpoint(endpoint)?;
    client.login(&user, &password).await.map_err(ExitError::login)?;

    let result = commands::run(cli.command, &client, cli.format).await;
    close_session(&client).await;
    result
}

/// Log out, leaving the exit code to the command that ran.
async fn close_session<T: Transport, C: Clock>(client: &BoaClient<T, C>) {
    if let Err(e) = client.close().await {
        tracing::debug!(error = %e, "session not closed cleanly");
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
