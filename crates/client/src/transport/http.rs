// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! XML-RPC over HTTPS using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use boa_wire::{decode_response, encode_call, Method, MethodResponse, Value};
use reqwest::header::{CONTENT_TYPE, COOKIE, RANGE};
use url::Url;

use super::{ByteRange, Credentials, Transport, TransportError};
use crate::{ClientError, Endpoint};

const CSRF_HEADER: &str = "X-CSRF-Token";

/// HTTP transport posting `methodCall` documents to a fixed URL
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
}

impl HttpTransport {
    pub fn new(endpoint: &Endpoint) -> Result<Self, ClientError> {
        Self::with_url(endpoint.url()?, endpoint.timeout())
    }

    /// Post to an explicit URL (any scheme reqwest supports).
    pub fn with_url(url: Url, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("boa-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(
        &self,
        method: Method,
        params: Vec<Value>,
        credentials: Option<&Credentials>,
    ) -> Result<Value, TransportError> {
        let mut request = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "text/xml")
            .body(encode_call(method, &params));
        if let Some(credentials) = credentials {
            request = request.header(COOKIE, credentials.cookie());
            if let Some(token) = credentials.csrf_token() {
                request = request.header(CSRF_HEADER, token);
            }
        }

        tracing::debug!(%method, url = %self.url, "remote call");
        let response = request.send().await.map_err(|e| TransportError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%method, status = status.as_u16(), "remote call rejected");
            return Err(TransportError::Status { status: status.as_u16() });
        }
        let body = response.text().await.map_err(|e| TransportError::Http(e.to_string()))?;

        match decode_response(&body)? {
            MethodResponse::Success(value) => Ok(value),
            MethodResponse::Fault { code, message } => {
                tracing::debug!(%method, code, %message, "remote fault");
                Err(TransportError::Fault { code, message })
            }
        }
    }

    async fn fetch(&self, url: &Url, range: Option<ByteRange>) -> Result<String, TransportError> {
        // reqwest only advertises gzip/deflate when no Range is set, so
        // ranged reads stay byte-accurate.
        let mut request = self.client.get(url.clone());
        if let Some(range) = range {
            request = request.header(RANGE, range.header_value());
        }

        tracing::debug!(%url, ?range, "download");
        let response = request.send().await.map_err(|e| TransportError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "download rejected");
            return Err(TransportError::Status { status: status.as_u16() });
        }
        response.text().await.map_err(|e| TransportError::Http(e.to_string()))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
