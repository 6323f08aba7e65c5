// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `boa jobs` - job listing and counting

use anyhow::Result;
use boa_client::{BoaClient, Transport};
use boa_core::{Clock, JobRecord};
use clap::{Args, Subcommand};

use crate::output::{format_job_row, format_or_json, now_ms, print_list, OutputFormat};

#[derive(Args)]
pub struct JobsArgs {
    #[command(subcommand)]
    pub command: Option<JobsCommand>,

    /// Only public jobs
    #[arg(long, global = true)]
    pub public: bool,

    /// Skip this many of the newest jobs
    #[arg(long, requires = "limit")]
    pub offset: Option<u32>,

    /// Show at most this many jobs
    #[arg(short = 'n', long)]
    pub limit: Option<u32>,
}

#[derive(Subcommand)]
pub enum JobsCommand {
    /// Print the number of jobs
    Count,
}

pub async fn handle<T: Transport, C: Clock>(
    args: JobsArgs,
    client: &BoaClient<T, C>,
    format: OutputFormat,
) -> Result<()> {
    match args.command {
        Some(JobsCommand::Count) => {
            let count = client.job_count(args.public).await?;
            format_or_json(format, &count, || {
                println!("{}", count);
                Ok(())
            })
        }
        None => {
            let jobs = match args.limit {
                Some(limit) => {
                    client.job_range(args.public, args.offset.unwrap_or(0), limit).await?
                }
                None => client.jobs(args.public).await?,
            };
            let records: Vec<JobRecord> = jobs.iter().map(|job| job.record().clone()).collect();
            let now = now_ms();
            print_list(format, &records, "No jobs", |record| format_job_row(record, now))
        }
    }
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
