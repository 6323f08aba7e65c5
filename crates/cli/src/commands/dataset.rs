// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `boa datasets`

use anyhow::Result;
use boa_client::{BoaClient, Transport};
use boa_core::Clock;

use crate::output::{format_dataset_row, print_list, OutputFormat};

pub async fn list<T: Transport, C: Clock>(
    client: &BoaClient<T, C>,
    format: OutputFormat,
) -> Result<()> {
    let datasets = client.datasets().await?;
    print_list(format, &datasets, "No datasets", format_dataset_row)
}
