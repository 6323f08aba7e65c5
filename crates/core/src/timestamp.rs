// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Submission timestamps as the server writes them.
//!
//! The server sends `YYYY-MM-DD HH:MM:SS` with no zone; every component is
//! taken as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// Layout of the `submitted` field
pub const SUBMITTED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Byte layout of the `submitted` field; `D` marks an ASCII digit
const SUBMITTED_LAYOUT: &[u8; 19] = b"DDDD-DD-DD DD:DD:DD";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp '{value}': expected YYYY-MM-DD HH:MM:SS")]
pub struct TimestampError {
    pub value: String,
}

/// Parse a fixed-width `YYYY-MM-DD HH:MM:SS` timestamp as UTC.
///
/// Every field must be zero-padded and separated by exactly one `-`, ` `
/// or `:`. Anything else (including a trailing zone name or offset) is
/// rejected rather than guessed at.
pub fn parse_submitted(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    let err = || TimestampError { value: value.to_string() };
    if !matches_layout(value.as_bytes()) {
        return Err(err());
    }
    NaiveDateTime::parse_from_str(value, SUBMITTED_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| err())
}

fn matches_layout(bytes: &[u8]) -> bool {
    bytes.len() == SUBMITTED_LAYOUT.len()
        && bytes.iter().zip(SUBMITTED_LAYOUT).all(|(&byte, &expected)| match expected {
            b'D' => byte.is_ascii_digit(),
            sep => byte == sep,
        })
}

/// Format a timestamp in the same layout the server uses.
pub fn format_submitted(at: &DateTime<Utc>) -> String {
    at.format(SUBMITTED_FORMAT).to_string()
}

/// Format an elapsed duration as a short human string ("5s", "2m", "1h", "3d").
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86_400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86_400)
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
