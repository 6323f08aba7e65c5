// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted transport for tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use boa_wire::{Method, Value};
use parking_lot::Mutex;
use url::Url;

use super::{ByteRange, Credentials, Transport, TransportError};

/// Fault code returned for calls nothing was scripted for
pub const UNSCRIPTED_FAULT_CODE: i64 = -32601;

/// Recorded remote call
#[derive(Debug, Clone, PartialEq)]
pub struct TransportCall {
    pub method: Method,
    pub params: Vec<Value>,
    pub credentials: Option<Credentials>,
}

/// Recorded download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub url: Url,
    pub range: Option<ByteRange>,
}

#[derive(Default)]
struct FakeTransportState {
    calls: Vec<TransportCall>,
    queued: HashMap<Method, VecDeque<Result<Value, TransportError>>>,
    standing: HashMap<Method, Result<Value, TransportError>>,
    fetches: Vec<FetchCall>,
    documents: HashMap<Url, String>,
}

/// Fake transport that records calls and replays scripted results.
///
/// One-shot results (`*_once`) are consumed first, in order; after that
/// the standing result for the method answers every call.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Arc<Mutex<FakeTransportState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call to `method` with `value`
    pub fn respond(&self, method: Method, value: Value) {
        self.inner.lock().standing.insert(method, Ok(value));
    }

    /// Answer every call to `method` with a fault carrying `message`
    pub fn fail(&self, method: Method, message: &str) {
        self.inner.lock().standing.insert(method, Err(fault(message)));
    }

    /// Answer the next call to `method` with `value`
    pub fn respond_once(&self, method: Method, value: Value) {
        self.push(method, Ok(value));
    }

    /// Answer the next call to `method` with a fault carrying `message`
    pub fn fail_once(&self, method: Method, message: &str) {
        self.push(method, Err(fault(message)));
    }

    /// Answer the next call to `method` with an arbitrary error
    pub fn error_once(&self, method: Method, error: TransportError) {
        self.push(method, Err(error));
    }

    /// All recorded calls, in order
    pub fn calls(&self) -> Vec<TransportCall> {
        self.inner.lock().calls.clone()
    }

    /// Recorded calls to one method, in order
    pub fn calls_to(&self, method: Method) -> Vec<TransportCall> {
        self.inner.lock().calls.iter().filter(|c| c.method == method).cloned().collect()
    }

    /// Methods called, in order
    pub fn methods(&self) -> Vec<Method> {
        self.inner.lock().calls.iter().map(|c| c.method).collect()
    }

    /// Serve `body` for downloads of `url`; unknown URLs answer 404
    pub fn serve(&self, url: Url, body: &str) {
        self.inner.lock().documents.insert(url, body.to_string());
    }

    /// Recorded downloads, in order
    pub fn fetches(&self) -> Vec<FetchCall> {
        self.inner.lock().fetches.clone()
    }

    fn push(&self, method: Method, result: Result<Value, TransportError>) {
        self.inner.lock().queued.entry(method).or_default().push_back(result);
    }
}

fn fault(message: &str) -> TransportError {
    TransportError::Fault { code: 1, message: message.to_string() }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn call(
        &self,
        method: Method,
        params: Vec<Value>,
        credentials: Option<&Credentials>,
    ) -> Result<Value, TransportError> {
        let mut state = self.inner.lock();
        state.calls.push(TransportCall { method, params, credentials: credentials.cloned() });
        if let Some(result) = state.queued.get_mut(&method).and_then(VecDeque::pop_front) {
            return result;
        }
        state.standing.get(&method).cloned().unwrap_or_else(|| {
            Err(TransportError::Fault {
                code: UNSCRIPTED_FAULT_CODE,
                message: format!("no response scripted for {}", method),
            })
        })
    }

    async fn fetch(&self, url: &Url, range: Option<ByteRange>) -> Result<String, TransportError> {
        let mut state = self.inner.lock();
        state.fetches.push(FetchCall { url: url.clone(), range });
        let body = state.documents.get(url).ok_or(TransportError::Status { status: 404 })?;
        Ok(match range {
            Some(range) => slice(body, range),
            None => body.clone(),
        })
    }
}

fn slice(body: &str, range: ByteRange) -> String {
    let bytes = body.as_bytes();
    let start = usize::try_from(range.start).unwrap_or(usize::MAX).min(bytes.len());
    let end = match range.len {
        0 => bytes.len(),
        len => start.saturating_add(usize::try_from(len).unwrap_or(usize::MAX)).min(bytes.len()),
    };
    String::from_utf8_lossy(&bytes[start..end]).into_owned()
}
