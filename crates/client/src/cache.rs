// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory dataset list cache.

use boa_core::Dataset;

/// How long a fetched dataset list stays valid (24 hours)
pub const DATASET_CACHE_TTL_MS: u64 = 86_400_000;

/// Dataset list plus the epoch millisecond it was fetched at.
///
/// Valid only while the list is present and younger than
/// [`DATASET_CACHE_TTL_MS`].
#[derive(Debug, Default)]
pub(crate) struct DatasetCache {
    datasets: Option<Vec<Dataset>>,
    cached_at_ms: u64,
}

impl DatasetCache {
    pub(crate) fn get(&self, now_ms: u64) -> Option<Vec<Dataset>> {
        let datasets = self.datasets.as_ref()?;
        (now_ms.saturating_sub(self.cached_at_ms) < DATASET_CACHE_TTL_MS).then(|| datasets.clone())
    }

    pub(crate) fn store(&mut self, datasets: Vec<Dataset>, now_ms: u64) {
        self.datasets = Some(datasets);
        self.cached_at_ms = now_ms;
    }

    pub(crate) fn clear(&mut self) {
        self.datasets = None;
        self.cached_at_ms = 0;
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
