// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `boa job` - single-job commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use boa_client::{BoaClient, Transport};
use boa_core::{Clock, JobId};
use clap::{Args, Subcommand};

use crate::output::{format_or_json, now_ms, print_job, print_list, OutputFormat};

#[derive(Args)]
pub struct JobArgs {
    #[command(subcommand)]
    pub command: JobCommand,
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// Show submission time, dataset and status of a job
    Show {
        /// Job ID
        id: JobId,
    },
    /// Print the query source of a job
    Source {
        /// Job ID
        id: JobId,
    },
    /// Print the output of a finished job
    Output {
        /// Job ID
        id: JobId,

        /// Write the output to FILE instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Skip the first BYTES bytes of output
        #[arg(long, value_name = "BYTES")]
        start: Option<u64>,

        /// Read at most BYTES bytes (see `boa job size`)
        #[arg(long, value_name = "BYTES")]
        length: Option<u64>,
    },
    /// Print the size of a job's output in bytes
    Size {
        /// Job ID
        id: JobId,
    },
    /// Print compiler errors of a job
    Errors {
        /// Job ID
        id: JobId,
    },
    /// Print the web page of a job
    Url {
        /// Job ID
        id: JobId,

        /// Print the public page (valid only if the job is public)
        #[arg(long)]
        public: bool,
    },
    /// Stop a running job
    Stop {
        /// Job ID
        id: JobId,
    },
    /// Run a job again
    Resubmit {
        /// Job ID
        id: JobId,
    },
    /// Delete a job
    Delete {
        /// Job ID
        id: JobId,
    },
    /// Show or change whether a job is public
    Public {
        /// Job ID
        id: JobId,

        /// `true` or `false`; omit to print the current setting
        value: Option<bool>,
    },
}

pub async fn handle<T: Transport, C: Clock>(
    command: JobCommand,
    client: &BoaClient<T, C>,
    format: OutputFormat,
) -> Result<()> {
    match command {
        JobCommand::Show { id } => {
            let job = client.job(id).await?;
            format_or_json(format, job.record(), || {
                print_job(&mut std::io::stdout(), job.record(), now_ms())?;
                Ok(())
            })
        }
        JobCommand::Source { id } => {
            let source = client.job_source(id).await?;
            let data = serde_json::json!({ "id": id, "source": source });
            format_or_json(format, &data, || {
                println!("{}", source);
                Ok(())
            })
        }
        JobCommand::Output { id, out, start, length } => {
            let output = match (start, length) {
                (None, None) => client.job_output(id).await?,
                (start, length) => {
                    client.job_output_range(id, start.unwrap_or(0), length.unwrap_or(0)).await?
                }
            };
            match out {
                Some(path) => {
                    std::fs::write(&path, &output)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote {} bytes to {}", output.len(), path.display());
                    Ok(())
                }
                None => {
                    let data = serde_json::json!({ "id": id, "output": output });
                    format_or_json(format, &data, || {
                        print!("{}", output);
                        Ok(())
                    })
                }
            }
        }
        JobCommand::Size { id } => {
            let size = client.job_output_size(id).await?;
            format_or_json(format, &size, || {
                println!("{}", size);
                Ok(())
            })
        }
        JobCommand::Errors { id } => {
            let errors = client.job_compiler_errors(id).await?;
            print_list(format, &errors, "No compiler errors", String::clone)
        }
        JobCommand::Url { id, public } => {
            let url = if public { client.job_public_url(id).await? } else { client.job_url(id).await? };
            format_or_json(format, &url.as_str(), || {
                println!("{}", url);
                Ok(())
            })
        }
        JobCommand::Stop { id } => {
            client.stop_job(id).await?;
            println!("Stopped job {}", id);
            Ok(())
        }
        JobCommand::Resubmit { id } => {
            client.resubmit_job(id).await?;
            println!("Resubmitted job {}", id);
            Ok(())
        }
        JobCommand::Delete { id } => {
            client.delete_job(id).await?;
            println!("Deleted job {}", id);
            Ok(())
        }
        JobCommand::Public { id, value: Some(public) } => {
            client.set_job_public(id, public).await?;
            println!("Job {} is now {}", id, visibility(public));
            Ok(())
        }
        JobCommand::Public { id, value: None } => {
            let public = client.is_job_public(id).await?;
            format_or_json(format, &public, || {
                println!("Job {} is {}", id, visibility(public));
                Ok(())
            })
        }
    }
}

fn visibility(public: bool) -> &'static str {
    if public {
        "public"
    } else {
        "private"
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
