// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the Boa source-code analysis API.
//!
//! Construct a [`BoaClient`], [`login`](BoaClient::login), then list
//! datasets, submit queries and manage jobs. Every operation is one remote
//! call; job handles call back into the client that created them.
//!
//! ```no_run
//! # async fn demo() -> Result<(), boa_client::ClientError> {
//! let client = boa_client::BoaClient::new()?;
//! client.login("user", "pass").await?;
//!
//! for dataset in client.datasets().await? {
//!     println!("{dataset}");
//! }
//! if let Some(job) = client.last_job().await? {
//!     println!("Last job submitted: {job}");
//! }
//!
//! client.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Sharing
//!
//! `BoaClient` is a cheap handle over shared session state (credentials,
//! login flag and the dataset cache). Clones and job handles all observe
//! the same session: logging out through one logs out all of them.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod cache;
mod config;
mod datasets;
mod error;
mod handle;
mod jobs;
mod session;
pub mod transport;

#[cfg(test)]
mod test_helpers;

pub use cache::DATASET_CACHE_TTL_MS;
pub use config::{Endpoint, DEFAULT_HOST, DEFAULT_PATH, DEFAULT_TIMEOUT};
pub use error::ClientError;
pub use handle::JobHandle;
pub use session::BoaClient;
pub use transport::{ByteRange, Credentials, HttpTransport, Transport, TransportError};

pub use boa_core::{CompileStatus, Dataset, DatasetId, ExecutionStatus, JobId, JobRecord};
pub use url::Url;
