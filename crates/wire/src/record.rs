// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record parser: decoded [`Value`]s into typed records.
//!
//! Required keys are checked before any field is converted, so a record
//! missing several keys reports the first one in declaration order.

use std::collections::BTreeMap;

use boa_core::{
    parse_submitted, CompileStatus, Dataset, DatasetId, ExecutionStatus, JobId, JobRecord,
    TimestampError,
};
use thiserror::Error;
use url::Url;

use crate::Value;

/// A response that decoded cleanly but does not have the expected shape.
///
/// Points at a server/client version mismatch; never worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("invalid response from server: response does not contain key '{key}'")]
    MissingKey { key: &'static str },
    #[error("invalid response from server: expected {expected} for '{field}', got {found}")]
    UnexpectedType { field: &'static str, expected: &'static str, found: &'static str },
    #[error("invalid number '{value}' for '{field}' from server")]
    InvalidNumber { field: &'static str, value: String },
    #[error("invalid '{field}' from server: {source}")]
    InvalidTimestamp {
        field: &'static str,
        #[source]
        source: TimestampError,
    },
    #[error("invalid response from server: {field} '{value}' unknown")]
    UnknownStatus { field: &'static str, value: String },
    #[error("invalid URL '{value}' from server: {reason}")]
    InvalidUrl { value: String, reason: String },
    #[error("no input datasets available")]
    NoDatasets,
}

const DATASET_KEYS: &[&str] = &["id", "name"];
const JOB_KEYS: &[&str] = &["id", "submitted", "input", "compiler_status", "hadoop_status"];

/// Parse one dataset record (`{id, name}`).
pub fn parse_dataset(value: &Value) -> Result<Dataset, ProtocolError> {
    let record = expect_struct("input", value)?;
    require_keys(record, DATASET_KEYS)?;
    let id = parse_id("id", field(record, "id")?)?;
    let name = expect_str("name", field(record, "name")?)?;
    Ok(Dataset::new(DatasetId::new(id), name))
}

/// Parse one job record
/// (`{id, submitted, input, compiler_status, hadoop_status}`).
pub fn parse_job(value: &Value) -> Result<JobRecord, ProtocolError> {
    let record = expect_struct("job", value)?;
    require_keys(record, JOB_KEYS)?;

    let id = parse_id("id", field(record, "id")?)?;
    let submitted = expect_str("submitted", field(record, "submitted")?)?;
    let submitted_at = parse_submitted(submitted)
        .map_err(|source| ProtocolError::InvalidTimestamp { field: "submitted", source })?;
    let dataset = parse_dataset(field(record, "input")?)?;

    let compiler = expect_str("compiler_status", field(record, "compiler_status")?)?;
    let compile_status = CompileStatus::from_wire(compiler).ok_or_else(|| {
        ProtocolError::UnknownStatus { field: "compiler_status", value: compiler.to_string() }
    })?;

    let hadoop = expect_str("hadoop_status", field(record, "hadoop_status")?)?;
    let execution_status = ExecutionStatus::from_wire(hadoop).ok_or_else(|| {
        ProtocolError::UnknownStatus { field: "hadoop_status", value: hadoop.to_string() }
    })?;

    Ok(JobRecord { id: JobId::new(id), submitted_at, dataset, compile_status, execution_status })
}

/// Parse an array of dataset records, preserving order.
pub fn parse_datasets(value: &Value) -> Result<Vec<Dataset>, ProtocolError> {
    expect_array("datasets", value)?.iter().map(parse_dataset).collect()
}

/// Parse an array of job records, preserving order.
pub fn parse_jobs(value: &Value) -> Result<Vec<JobRecord>, ProtocolError> {
    expect_array("jobs", value)?.iter().map(parse_job).collect()
}

/// Parse an array of strings (e.g. compiler error lines).
pub fn parse_strings(field: &'static str, value: &Value) -> Result<Vec<String>, ProtocolError> {
    expect_array(field, value)?
        .iter()
        .map(|item| expect_str(field, item).map(str::to_string))
        .collect()
}

/// Parse an absolute URL carried as a string.
pub fn parse_url(field: &'static str, value: &Value) -> Result<Url, ProtocolError> {
    let text = expect_str(field, value)?;
    Url::parse(text)
        .map_err(|e| ProtocolError::InvalidUrl { value: text.to_string(), reason: e.to_string() })
}

/// Fetch a required member of a struct value.
pub fn expect_member<'a>(
    context: &'static str,
    value: &'a Value,
    key: &'static str,
) -> Result<&'a Value, ProtocolError> {
    field(expect_struct(context, value)?, key)
}

pub fn expect_struct<'a>(
    field: &'static str,
    value: &'a Value,
) -> Result<&'a BTreeMap<String, Value>, ProtocolError> {
    value.as_struct().ok_or_else(|| unexpected(field, "struct", value))
}

pub fn expect_array<'a>(field: &'static str, value: &'a Value) -> Result<&'a [Value], ProtocolError> {
    value.as_array().ok_or_else(|| unexpected(field, "array", value))
}

pub fn expect_str<'a>(field: &'static str, value: &'a Value) -> Result<&'a str, ProtocolError> {
    value.as_str().ok_or_else(|| unexpected(field, "string", value))
}

/// Read a flag; an `<int>` is true when it equals 1.
pub fn expect_bool(field: &'static str, value: &Value) -> Result<bool, ProtocolError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Int(i) => Ok(*i == 1),
        other => Err(unexpected(field, "boolean", other)),
    }
}

/// Read an integer, accepting the decimal-string form some methods use.
pub fn expect_int(field: &'static str, value: &Value) -> Result<i64, ProtocolError> {
    match value {
        Value::Int(i) => Ok(*i),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| ProtocolError::InvalidNumber { field, value: s.clone() }),
        other => Err(unexpected(field, "int", other)),
    }
}

/// Ids are positive. String ids must be plain digits, no sign or padding.
fn parse_id(field: &'static str, value: &Value) -> Result<u32, ProtocolError> {
    let (id, raw) = match value {
        Value::Int(i) => (u32::try_from(*i).ok(), i.to_string()),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            (s.parse::<u32>().ok(), s.clone())
        }
        Value::String(s) => (None, s.clone()),
        other => return Err(unexpected(field, "int", other)),
    };
    id.filter(|id| *id > 0).ok_or(ProtocolError::InvalidNumber { field, value: raw })
}

fn require_keys(
    record: &BTreeMap<String, Value>,
    keys: &[&'static str],
) -> Result<(), ProtocolError> {
    match keys.iter().copied().find(|key| !record.contains_key(*key)) {
        Some(key) => Err(ProtocolError::MissingKey { key }),
        None => Ok(()),
    }
}

fn field<'a>(
    record: &'a BTreeMap<String, Value>,
    key: &'static str,
) -> Result<&'a Value, ProtocolError> {
    record.get(key).ok_or(ProtocolError::MissingKey { key })
}

fn unexpected(field: &'static str, expected: &'static str, found: &Value) -> ProtocolError {
    ProtocolError::UnexpectedType { field, expected, found: found.kind() }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
