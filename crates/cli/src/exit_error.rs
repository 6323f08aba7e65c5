// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, so the session is still closed before `main()` exits.

use std::fmt;

use boa_client::ClientError;

/// Exit code for failures without a more specific code
pub const FAILURE: i32 = 1;
/// Missing or rejected credentials
pub const AUTH: i32 = 2;
/// A named dataset or job does not exist
pub const NOT_FOUND: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Map a failed `login` to an exit code
    pub fn login(error: ClientError) -> Self {
        match error {
            ClientError::Auth { message, .. } => Self::new(AUTH, format!("login failed: {}", message)),
            other => Self::new(FAILURE, format!("login failed: {}", other)),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Exit code for an error returned from a command
pub fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(exit) = error.downcast_ref::<ExitError>() {
        return exit.code;
    }
    match error.downcast_ref::<ClientError>() {
        Some(ClientError::NotLoggedIn | ClientError::Auth { .. }) => AUTH,
        _ => FAILURE,
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
