// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `boa sample` - a short tour of the API

use anyhow::Result;
use boa_client::{BoaClient, Transport};
use boa_core::Clock;

use crate::color;

/// Query submitted by the sample session
pub const SAMPLE_QUERY: &str = "o: output sum of int;\no << 1;";

pub async fn run<T: Transport, C: Clock>(client: &BoaClient<T, C>) -> Result<()> {
    println!("{}", color::header("Datasets:"));
    for dataset in client.datasets().await? {
        println!("  {}", dataset);
    }

    match client.last_job().await? {
        Some(job) => println!("{} {}", color::context("Last job:"), job),
        None => println!("{} none", color::context("Last job:")),
    }

    let mut job = client.query(SAMPLE_QUERY, None).await?;
    println!("{} {}", color::context("Submitted:"), job);

    job.stop().await?;
    job.refresh().await?;
    println!("{} {}", color::context("Stopped job:"), job);
    Ok(())
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod tests;
