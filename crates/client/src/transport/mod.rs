// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport seam between the session and the remote endpoint.
//!
//! A transport performs exactly one remote call per invocation and never
//! retries. Session headers are passed in per call, so transports hold no
//! session state of their own.

mod http;

pub use http::HttpTransport;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTransport, FetchCall, TransportCall};

use async_trait::async_trait;
use boa_wire::{CodecError, Method, Value};
use thiserror::Error;
use url::Url;

/// Errors from a single remote call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with an XML-RPC fault
    #[error("{message}")]
    Fault { code: i64, message: String },
    /// The endpoint answered, but not with a success status
    #[error("HTTP status {status} from API endpoint")]
    Status { status: u16 },
    #[error("request failed: {0}")]
    Http(String),
    #[error("invalid XML-RPC response: {0}")]
    Codec(#[from] CodecError),
}

/// Session headers attached to every call after login.
///
/// `cookie` is sent as `Cookie: {session_name}={sessid}` and `csrf_token`
/// as `X-CSRF-Token`. The token is absent only between the two halves of
/// the `connect` handshake.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    cookie: String,
    csrf_token: Option<String>,
}

impl Credentials {
    pub fn new(cookie: impl Into<String>, csrf_token: Option<String>) -> Self {
        Self { cookie: cookie.into(), csrf_token }
    }

    /// Build the cookie from the `session_name`/`sessid` pair the server
    /// returns.
    pub fn from_session(session_name: &str, sessid: &str, csrf_token: Option<String>) -> Self {
        Self::new(format!("{}={}", session_name, sessid), csrf_token)
    }

    pub fn cookie(&self) -> &str {
        &self.cookie
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("cookie", &"<redacted>")
            .field("csrf_token", &self.csrf_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Byte window of a download, sent as an HTTP `Range` header.
///
/// A `len` of zero reads to the end of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub len: u64,
}

impl ByteRange {
    pub fn new(start: u64, len: u64) -> Self {
        Self { start, len }
    }

    /// `Range` header value, e.g. `bytes=10-19`
    pub fn header_value(&self) -> String {
        match self.len {
            0 => format!("bytes={}-", self.start),
            len => format!("bytes={}-{}", self.start, self.start.saturating_add(len - 1)),
        }
    }
}

/// Performs remote procedure calls against the API endpoint
#[async_trait]
pub trait Transport: Clone + Send + Sync + 'static {
    /// Call `method` with positional `params`, attaching `credentials` as
    /// session headers when present.
    async fn call(
        &self,
        method: Method,
        params: Vec<Value>,
        credentials: Option<&Credentials>,
    ) -> Result<Value, TransportError>;

    /// Download the document at `url` (job output lives behind a URL the
    /// API hands out). Compressed bodies are decoded.
    async fn fetch(&self, url: &Url, range: Option<ByteRange>) -> Result<String, TransportError>;
}
