// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local handle to a remote job.

use boa_core::{Clock, CompileStatus, Dataset, ExecutionStatus, JobId, JobRecord};
use chrono::{DateTime, Utc};
use url::Url;

use crate::transport::{HttpTransport, Transport};
use crate::{BoaClient, ClientError};

/// A job record bound to the client that fetched it.
///
/// Every operation delegates to that client using the job id. Dropping a
/// handle has no effect on the server.
pub struct JobHandle<T: Transport = HttpTransport, C: Clock = boa_core::SystemClock> {
    client: BoaClient<T, C>,
    record: JobRecord,
}

impl<T: Transport, C: Clock> JobHandle<T, C> {
    pub(crate) fn new(client: BoaClient<T, C>, record: JobRecord) -> Self {
        Self { client, record }
    }

    pub fn id(&self) -> JobId {
        self.record.id
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.record.submitted_at
    }

    pub fn dataset(&self) -> &Dataset {
        &self.record.dataset
    }

    pub fn compile_status(&self) -> CompileStatus {
        self.record.compile_status
    }

    pub fn execution_status(&self) -> ExecutionStatus {
        self.record.execution_status
    }

    /// Snapshot of the job as last fetched
    pub fn record(&self) -> &JobRecord {
        &self.record
    }

    pub fn is_terminal(&self) -> bool {
        self.record.is_terminal()
    }

    /// Refetch the job and update submission time and statuses.
    ///
    /// The id and dataset never change.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let latest = self.client.fetch_job_record(self.record.id).await?;
        self.record.submitted_at = latest.submitted_at;
        self.record.compile_status = latest.compile_status;
        self.record.execution_status = latest.execution_status;
        Ok(())
    }

    pub async fn stop(&self) -> Result<(), ClientError> {
        self.client.stop_job(self.id()).await
    }

    pub async fn resubmit(&self) -> Result<(), ClientError> {
        self.client.resubmit_job(self.id()).await
    }

    pub async fn delete(&self) -> Result<(), ClientError> {
        self.client.delete_job(self.id()).await
    }

    pub async fn set_public(&self, public: bool) -> Result<(), ClientError> {
        self.client.set_job_public(self.id(), public).await
    }

    pub async fn is_public(&self) -> Result<bool, ClientError> {
        self.client.is_job_public(self.id()).await
    }

    pub async fn url(&self) -> Result<Url, ClientError> {
        self.client.job_url(self.id()).await
    }

    /// See [`BoaClient::job_public_url`].
    pub async fn public_url(&self) -> Result<Url, ClientError> {
        self.client.job_public_url(self.id()).await
    }

    pub async fn compiler_errors(&self) -> Result<Vec<String>, ClientError> {
        self.client.job_compiler_errors(self.id()).await
    }

    pub async fn source(&self) -> Result<String, ClientError> {
        self.client.job_source(self.id()).await
    }

    pub async fn output(&self) -> Result<String, ClientError> {
        self.client.job_output(self.id()).await
    }

    /// See [`BoaClient::job_output_range`].
    pub async fn output_range(&self, start: u64, len: u64) -> Result<String, ClientError> {
        self.client.job_output_range(self.id(), start, len).await
    }

    pub async fn output_size(&self) -> Result<u64, ClientError> {
        self.client.job_output_size(self.id()).await
    }
}

impl<T: Transport, C: Clock> Clone for JobHandle<T, C> {
    fn clone(&self) -> Self {
        Self { client: self.client.clone(), record: self.record.clone() }
    }
}

impl<T: Transport, C: Clock> std::fmt::Debug for JobHandle<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobHandle").field("record", &self.record).finish()
    }
}

impl<T: Transport, C: Clock> std::fmt::Display for JobHandle<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.record, f)
    }
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
