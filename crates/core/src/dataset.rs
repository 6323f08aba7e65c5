// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input datasets that jobs run against.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

crate::define_id! {
    /// Server-assigned identifier of an input dataset.
    pub struct DatasetId;
}

/// A named remote input corpus.
///
/// Immutable once built. Two datasets are equal when their ids are equal;
/// the name is a display label only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    id: DatasetId,
    name: String,
}

impl Dataset {
    pub fn new(id: impl Into<DatasetId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }

    pub fn id(&self) -> DatasetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Dataset {}

impl Hash for Dataset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.id, self.name)
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
