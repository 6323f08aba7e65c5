// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `boa submit`

use std::path::Path;

use anyhow::{bail, Context, Result};
use boa_client::{BoaClient, Transport};
use boa_core::Clock;

use crate::exit_error::{ExitError, NOT_FOUND};
use crate::output::{format_or_json, OutputFormat};

pub async fn handle<T: Transport, C: Clock>(
    file: &Path,
    dataset: Option<&str>,
    client: &BoaClient<T, C>,
    format: OutputFormat,
) -> Result<()> {
    let source = read_source(file)?;
    let dataset = match dataset {
        Some(name) => Some(client.dataset(name).await?.ok_or_else(|| {
            ExitError::new(NOT_FOUND, format!("unknown dataset '{}': see `boa datasets`", name))
        })?),
        None => None,
    };

    let job = client.query(&source, dataset.as_ref()).await?;
    format_or_json(format, job.record(), || {
        println!("Submitted job {} on {}", job.id(), job.dataset().name());
        Ok(())
    })
}

/// Read query text from `file`, or from stdin when `file` is `-`.
pub fn read_source(file: &Path) -> Result<String> {
    let source = if file == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("failed to read query from stdin")?
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?
    };
    if source.trim().is_empty() {
        bail!("query is empty");
    }
    Ok(source)
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
