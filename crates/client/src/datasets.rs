// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dataset listing and lookup.

use boa_core::{Clock, Dataset};
use boa_wire::{parse_datasets, Method};

use crate::transport::Transport;
use crate::{BoaClient, ClientError};

impl<T: Transport, C: Clock> BoaClient<T, C> {
    /// All datasets the account may query.
    ///
    /// Served from the cache for 24 hours after a fetch. A cache hit does
    /// not require a session; a refill does.
    pub async fn datasets(&self) -> Result<Vec<Dataset>, ClientError> {
        let now_ms = self.now_ms();
        let cached = self.with_state(|state| state.cache.get(now_ms));
        if let Some(datasets) = cached {
            tracing::debug!(count = datasets.len(), "dataset cache hit");
            return Ok(datasets);
        }

        let response = self.call(Method::Datasets, vec![]).await?;
        let datasets = parse_datasets(&response)?;
        tracing::debug!(count = datasets.len(), "dataset cache refilled");
        self.with_state(|state| state.cache.store(datasets.clone(), now_ms));
        Ok(datasets)
    }

    /// Dataset names, in server order
    pub async fn dataset_names(&self) -> Result<Vec<String>, ClientError> {
        Ok(self.datasets().await?.into_iter().map(|d| d.name().to_string()).collect())
    }

    /// The dataset named exactly `name`, if any.
    pub async fn dataset(&self, name: &str) -> Result<Option<Dataset>, ClientError> {
        Ok(self.datasets().await?.into_iter().find(|d| d.name() == name))
    }
}

#[cfg(test)]
#[path = "datasets_tests.rs"]
mod tests;
