// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
fn default_endpoint_url() {
    let url = Endpoint::default().url().unwrap();
    assert_eq!(url.as_str(), "https://boa.cs.iastate.edu/boa/?q=boa/api");
}

#[test]
fn custom_endpoint() {
    let endpoint = Endpoint::new("boa.example.org:8443", "/api/xmlrpc").unwrap();
    assert_eq!(endpoint.url().unwrap().as_str(), "https://boa.example.org:8443/api/xmlrpc");
    assert_eq!(endpoint.timeout(), DEFAULT_TIMEOUT);
}

#[yare::parameterized(
    scheme       = { "https://boa.cs.iastate.edu", "/boa/?q=boa/api" },
    host_path    = { "boa.cs.iastate.edu/boa", "/?q=boa/api" },
    empty_host   = { "", "/boa/?q=boa/api" },
    relative     = { "boa.cs.iastate.edu", "boa/?q=boa/api" },
    empty_path   = { "boa.cs.iastate.edu", "" },
    bad_port     = { "boa.cs.iastate.edu:notaport", "/api" },
)]
fn rejects_invalid_endpoint(host: &str, path: &str) {
    assert!(matches!(Endpoint::new(host, path), Err(ClientError::Config(_))));
}

#[test]
#[serial]
fn from_env_applies_overrides() {
    std::env::set_var("BOA_HOST", "localhost");
    std::env::set_var("BOA_PATH", "/xmlrpc");
    std::env::set_var("BOA_TIMEOUT_MS", "1500");
    let endpoint = Endpoint::from_env();
    std::env::remove_var("BOA_HOST");
    std::env::remove_var("BOA_PATH");
    std::env::remove_var("BOA_TIMEOUT_MS");

    let endpoint = endpoint.unwrap();
    assert_eq!(endpoint.host(), "localhost");
    assert_eq!(endpoint.path(), "/xmlrpc");
    assert_eq!(endpoint.timeout(), Duration::from_millis(1500));
}

#[test]
#[serial]
fn from_env_rejects_invalid_host() {
    std::env::set_var("BOA_HOST", "http://localhost");
    let endpoint = Endpoint::from_env();
    std::env::remove_var("BOA_HOST");
    assert!(endpoint.is_err());
}

#[test]
#[serial]
fn from_env_defaults() {
    std::env::remove_var("BOA_HOST");
    std::env::remove_var("BOA_PATH");
    std::env::remove_var("BOA_TIMEOUT_MS");
    assert_eq!(Endpoint::from_env().unwrap(), Endpoint::default());
}
