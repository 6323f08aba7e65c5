// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! boa-core: Value types shared by the Boa API client crates

pub mod macros;

pub mod clock;
pub mod dataset;
pub mod job;
pub mod timestamp;

#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use clock::{Clock, SystemClock};
pub use dataset::{Dataset, DatasetId};
#[cfg(any(test, feature = "test-support"))]
pub use job::JobRecordBuilder;
pub use job::{CompileStatus, ExecutionStatus, JobId, JobRecord};
pub use timestamp::{format_elapsed, format_submitted, parse_submitted, TimestampError};
