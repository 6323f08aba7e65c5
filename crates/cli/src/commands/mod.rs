// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod dataset;
pub mod job;
pub mod jobs;
pub mod sample;
pub mod submit;

use std::path::PathBuf;

use anyhow::Result;
use boa_client::{BoaClient, Transport};
use boa_core::Clock;
use clap::Subcommand;

use crate::output::OutputFormat;

#[derive(Subcommand)]
pub enum Command {
    /// List input datasets
    Datasets,
    /// List jobs, newest first
    Jobs(jobs::JobsArgs),
    /// Inspect or manage one job
    Job(job::JobArgs),
    /// Submit a query as a new job
    Submit {
        /// File holding the query, or `-` for stdin
        file: PathBuf,

        /// Dataset name (default: the first dataset listed)
        #[arg(long, short = 'd')]
        dataset: Option<String>,
    },
    /// List datasets, show the last job, then submit and stop a tiny query
    Sample,
}

/// Run one command against a logged-in client
pub async fn run<T: Transport, C: Clock>(
    command: Command,
    client: &BoaClient<T, C>,
    format: OutputFormat,
) -> Result<()> {
    match command {
        Command::Datasets => dataset::list(client, format).await,
        Command::Jobs(args) => jobs::handle(args, client, format).await,
        Command::Job(args) => job::handle(args.command, client, format).await,
        Command::Submit { file, dataset } => {
            submit::handle(&file, dataset.as_deref(), client, format).await
        }
        Command::Sample => sample::run(client).await,
    }
}
