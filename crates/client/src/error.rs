// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use boa_wire::ProtocolError;
use thiserror::Error;

use crate::transport::TransportError;

/// Errors surfaced by client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// A session-gated operation was attempted before `login`
    #[error("not logged in to the Boa API")]
    NotLoggedIn,

    /// `login`/`connect` failed; `message` is derived from the server fault
    #[error("{message}")]
    Auth {
        message: String,
        #[source]
        source: TransportError,
    },

    /// Any other transport or server fault
    #[error(transparent)]
    Remote(#[from] TransportError),

    /// The server answered with an unexpected shape
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("invalid configuration: {0}")]
    Config(String),
}
