// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for client tests.

use boa_core::FakeClock;
use boa_wire::{Method, Value};
use url::Url;

use crate::transport::FakeTransport;
use crate::BoaClient;

pub(crate) type FakeClient = BoaClient<FakeTransport, FakeClock>;

pub(crate) fn dataset_value(id: u32, name: &str) -> Value {
    [("id", Value::from(id.to_string())), ("name", Value::from(name))].into_iter().collect()
}

pub(crate) fn job_value(id: u32, compiler: &str, hadoop: &str) -> Value {
    [
        ("id", Value::from(id.to_string())),
        ("submitted", Value::from("2014-05-23 16:38:49")),
        ("input", dataset_value(2, "2013 May/SF.net")),
        ("compiler_status", Value::from(compiler)),
        ("hadoop_status", Value::from(hadoop)),
    ]
    .into_iter()
    .collect()
}

/// Script `job.output` for job `id` to hand out a download serving `body`
pub(crate) fn serve_output(transport: &FakeTransport, id: u32, body: &str) -> Url {
    let url = output_url(id);
    transport.respond(Method::JobOutput, Value::from(url.as_str()));
    transport.serve(url.clone(), body);
    url
}

pub(crate) fn output_url(id: u32) -> Url {
    Url::parse(&format!("http://boa.cs.iastate.edu/boa/output/{}.txt", id)).unwrap()
}

pub(crate) fn session_value(session_name: &str, sessid: &str) -> Value {
    [("session_name", Value::from(session_name)), ("sessid", Value::from(sessid))]
        .into_iter()
        .collect()
}

pub(crate) fn login_response() -> Value {
    [
        ("session_name", Value::from("SESS1")),
        ("sessid", Value::from("abc")),
        ("token", Value::from("tok-1")),
    ]
    .into_iter()
    .collect()
}

pub(crate) fn client() -> (FakeClient, FakeTransport, FakeClock) {
    let transport = FakeTransport::new();
    let clock = FakeClock::new();
    (BoaClient::with_transport(transport.clone(), clock.clone()), transport, clock)
}

/// Client that has already completed `login("bob", "secret")`
pub(crate) async fn logged_in_client() -> (FakeClient, FakeTransport, FakeClock) {
    let (client, transport, clock) = client();
    transport.respond_once(Method::UserLogin, login_response());
    client.login("bob", "secret").await.unwrap();
    (client, transport, clock)
}
