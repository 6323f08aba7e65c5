// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job queries, submission and job-scoped calls.
//!
//! `boa.*` methods take numeric ids; `job.*` methods take the id as a
//! decimal string.

use boa_core::{Clock, Dataset, JobId, JobRecord};
use boa_wire::{
    expect_bool, expect_int, expect_str, parse_job, parse_jobs, parse_strings, parse_url, Method,
    ProtocolError, Value,
};
use url::Url;

use crate::transport::{ByteRange, Transport};
use crate::{BoaClient, ClientError, JobHandle};

impl<T: Transport, C: Clock> BoaClient<T, C> {
    pub async fn job(&self, id: JobId) -> Result<JobHandle<T, C>, ClientError> {
        let record = self.fetch_job_record(id).await?;
        Ok(self.handle(record))
    }

    /// Most recently submitted job, or `None` when the account has none
    pub async fn last_job(&self) -> Result<Option<JobHandle<T, C>>, ClientError> {
        Ok(self.job_range(false, 0, 1).await?.into_iter().next())
    }

    /// Every job of the account, or only the public ones
    pub async fn jobs(&self, public_only: bool) -> Result<Vec<JobHandle<T, C>>, ClientError> {
        let response = self.call(Method::Jobs, vec![Value::Bool(public_only)]).await?;
        Ok(self.handles(parse_jobs(&response)?))
    }

    /// `length` jobs starting `offset` jobs back from the newest
    pub async fn job_range(
        &self,
        public_only: bool,
        offset: u32,
        length: u32,
    ) -> Result<Vec<JobHandle<T, C>>, ClientError> {
        let params = vec![Value::Bool(public_only), Value::from(offset), Value::from(length)];
        let response = self.call(Method::JobRange, params).await?;
        Ok(self.handles(parse_jobs(&response)?))
    }

    pub async fn job_count(&self, public_only: bool) -> Result<u64, ClientError> {
        let response = self.call(Method::JobCount, vec![Value::Bool(public_only)]).await?;
        count("boa.count", &response)
    }

    /// Submit `source` as a new job.
    ///
    /// Without a dataset the first one from [`datasets`](Self::datasets)
    /// is used.
    pub async fn query(
        &self,
        source: &str,
        dataset: Option<&Dataset>,
    ) -> Result<JobHandle<T, C>, ClientError> {
        self.ensure_logged_in()?;
        let dataset_id = match dataset {
            Some(dataset) => dataset.id(),
            None => self
                .datasets()
                .await?
                .first()
                .map(Dataset::id)
                .ok_or(ProtocolError::NoDatasets)?,
        };

        let params = vec![Value::from(source), Value::from(dataset_id.get())];
        let response = self.call(Method::Submit, params).await?;
        let record = parse_job(&response)?;
        tracing::info!(job = %record.id, dataset = %dataset_id, "submitted query");
        Ok(self.handle(record))
    }

    pub async fn stop_job(&self, id: JobId) -> Result<(), ClientError> {
        self.call(Method::JobStop, job_params(id)).await?;
        Ok(())
    }

    pub async fn resubmit_job(&self, id: JobId) -> Result<(), ClientError> {
        self.call(Method::JobResubmit, job_params(id)).await?;
        Ok(())
    }

    pub async fn delete_job(&self, id: JobId) -> Result<(), ClientError> {
        self.call(Method::JobDelete, job_params(id)).await?;
        Ok(())
    }

    pub async fn set_job_public(&self, id: JobId, public: bool) -> Result<(), ClientError> {
        let mut params = job_params(id);
        params.push(Value::Bool(public));
        self.call(Method::JobSetPublic, params).await?;
        Ok(())
    }

    pub async fn is_job_public(&self, id: JobId) -> Result<bool, ClientError> {
        let response = self.call(Method::JobPublic, job_params(id)).await?;
        Ok(expect_bool("job.public", &response)?)
    }

    pub async fn job_url(&self, id: JobId) -> Result<Url, ClientError> {
        let response = self.call(Method::JobUrl, job_params(id)).await?;
        Ok(parse_url("job.url", &response)?)
    }

    /// Public page of the job.
    ///
    /// Returned whether or not the job is public; check
    /// [`is_job_public`](Self::is_job_public) if it must resolve.
    pub async fn job_public_url(&self, id: JobId) -> Result<Url, ClientError> {
        let response = self.call(Method::JobPublicUrl, job_params(id)).await?;
        Ok(parse_url("job.publicurl", &response)?)
    }

    pub async fn job_compiler_errors(&self, id: JobId) -> Result<Vec<String>, ClientError> {
        let response = self.call(Method::JobCompilerErrors, job_params(id)).await?;
        Ok(parse_strings("job.compilerErrors", &response)?)
    }

    pub async fn job_source(&self, id: JobId) -> Result<String, ClientError> {
        let response = self.call(Method::JobSource, job_params(id)).await?;
        Ok(expect_str("job.source", &response)?.to_string())
    }

    /// Full output of a finished job.
    ///
    /// `job.output` answers with a download URL; the body behind it is
    /// fetched and decompressed.
    pub async fn job_output(&self, id: JobId) -> Result<String, ClientError> {
        let url = self.job_output_location(id).await?;
        self.fetch(&url, None).await
    }

    /// `len` bytes of output starting at byte `start`; a `len` of zero
    /// reads to the end. Pair with [`job_output_size`](Self::job_output_size)
    /// to page through large outputs.
    pub async fn job_output_range(
        &self,
        id: JobId,
        start: u64,
        len: u64,
    ) -> Result<String, ClientError> {
        let url = self.job_output_location(id).await?;
        self.fetch(&url, Some(ByteRange::new(start, len))).await
    }

    /// Size of the job's output in bytes
    pub async fn job_output_size(&self, id: JobId) -> Result<u64, ClientError> {
        let response = self.call(Method::JobOutputSize, job_params(id)).await?;
        count("job.outputsize", &response)
    }

    async fn job_output_location(&self, id: JobId) -> Result<Url, ClientError> {
        let response = self.call(Method::JobOutput, job_params(id)).await?;
        let url = parse_url("job.output", &response)?;
        tracing::debug!(job = %id, %url, "output location");
        Ok(url)
    }

    pub(crate) async fn fetch_job_record(&self, id: JobId) -> Result<JobRecord, ClientError> {
        let response = self.call(Method::Job, vec![Value::from(id.get())]).await?;
        Ok(parse_job(&response)?)
    }

    fn handle(&self, record: JobRecord) -> JobHandle<T, C> {
        JobHandle::new(self.clone(), record)
    }

    fn handles(&self, records: Vec<JobRecord>) -> Vec<JobHandle<T, C>> {
        records.into_iter().map(|record| self.handle(record)).collect()
    }
}

fn job_params(id: JobId) -> Vec<Value> {
    vec![Value::from(id.to_string())]
}

fn count(field: &'static str, value: &Value) -> Result<u64, ClientError> {
    let raw = expect_int(field, value)?;
    u64::try_from(raw)
        .map_err(|_| ProtocolError::InvalidNumber { field, value: raw.to_string() }.into())
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
