// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote procedure surface of the Boa API.
//!
//! Wire format: XML-RPC `methodCall` / `methodResponse` documents over HTTP POST

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod codec;
mod method;
mod record;
mod value;

pub use codec::{decode_response, encode_call, encode_response, CodecError, MethodResponse};
pub use method::Method;
pub use record::{
    expect_array, expect_bool, expect_int, expect_member, expect_str, expect_struct, parse_dataset,
    parse_datasets, parse_job, parse_jobs, parse_strings, parse_url, ProtocolError,
};
pub use value::Value;
