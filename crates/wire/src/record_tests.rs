// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use boa_core::{format_submitted, CompileStatus, ExecutionStatus};

fn dataset_value(id: &str, name: &str) -> Value {
    [("id", Value::from(id)), ("name", Value::from(name))].into_iter().collect()
}

fn job_value(compiler: &str, hadoop: &str) -> Value {
    [
        ("id", Value::from("1234")),
        ("submitted", Value::from("2014-05-23 16:38:49")),
        ("input", dataset_value("2", "2013 May/SF.net")),
        ("compiler_status", Value::from(compiler)),
        ("hadoop_status", Value::from(hadoop)),
    ]
    .into_iter()
    .collect()
}

fn without(value: &Value, key: &str) -> Value {
    let mut members = value.as_struct().unwrap().clone();
    members.remove(key);
    Value::Struct(members)
}

#[test]
fn dataset_fields_match_input() {
    let dataset = parse_dataset(&dataset_value("17", "2019 October/GitHub")).unwrap();
    assert_eq!(dataset.id().get(), 17);
    assert_eq!(dataset.name(), "2019 October/GitHub");
}

#[test]
fn dataset_accepts_int_id() {
    let value: Value = [("id", Value::Int(9)), ("name", Value::from("x"))].into_iter().collect();
    assert_eq!(parse_dataset(&value).unwrap().id().get(), 9);
}

#[yare::parameterized(
    id   = { "id" },
    name = { "name" },
)]
fn dataset_missing_key(key: &str) {
    let value = without(&dataset_value("1", "a"), key);
    match parse_dataset(&value).unwrap_err() {
        ProtocolError::MissingKey { key: missing } => assert_eq!(missing, key),
        other => panic!("unexpected error: {other}"),
    }
}

#[yare::parameterized(
    word       = { "twelve" },
    negative   = { "-3" },
    empty      = { "" },
    zero       = { "0" },
    minus_zero = { "-0" },
    plus_sign  = { "+5" },
    padded     = { " 5 " },
    too_large  = { "4294967296" },
)]
fn dataset_rejects_bad_id(id: &str) {
    let err = parse_dataset(&dataset_value(id, "a")).unwrap_err();
    assert!(matches!(err, ProtocolError::InvalidNumber { field: "id", .. }), "{err}");
}

#[yare::parameterized(
    zero     = { 0 },
    negative = { -7 },
)]
fn dataset_rejects_non_positive_int_id(id: i64) {
    let value: Value = [("id", Value::Int(id)), ("name", Value::from("a"))].into_iter().collect();
    let err = parse_dataset(&value).unwrap_err();
    assert_eq!(err, ProtocolError::InvalidNumber { field: "id", value: id.to_string() });
}

#[test]
fn dataset_must_be_struct() {
    let err = parse_dataset(&Value::from("3")).unwrap_err();
    assert_eq!(
        err,
        ProtocolError::UnexpectedType { field: "input", expected: "struct", found: "string" }
    );
}

#[test]
fn job_round_trips_fields() {
    let job = parse_job(&job_value("Finished", "Running")).unwrap();
    assert_eq!(job.id.get(), 1234);
    assert_eq!(format_submitted(&job.submitted_at), "2014-05-23 16:38:49");
    assert_eq!(job.dataset.id().get(), 2);
    assert_eq!(job.dataset.name(), "2013 May/SF.net");
    assert_eq!(job.compile_status, CompileStatus::Finished);
    assert_eq!(job.execution_status, ExecutionStatus::Running);
}

#[yare::parameterized(
    id              = { "id" },
    submitted       = { "submitted" },
    input           = { "input" },
    compiler_status = { "compiler_status" },
    hadoop_status   = { "hadoop_status" },
)]
fn job_missing_key(key: &str) {
    let value = without(&job_value("Waiting", "Waiting"), key);
    let err = parse_job(&value).unwrap_err();
    assert_eq!(err.to_string(), format!(
        "invalid response from server: response does not contain key '{key}'"
    ));
}

#[test]
fn job_missing_nested_dataset_key() {
    let mut members = job_value("Waiting", "Waiting").as_struct().unwrap().clone();
    members.insert("input".into(), without(&dataset_value("2", "x"), "name"));
    let err = parse_job(&Value::Struct(members)).unwrap_err();
    assert_eq!(err, ProtocolError::MissingKey { key: "name" });
}

#[test]
fn unknown_compiler_status() {
    let err = parse_job(&job_value("Bogus", "Waiting")).unwrap_err();
    assert_eq!(
        err,
        ProtocolError::UnknownStatus { field: "compiler_status", value: "Bogus".into() }
    );
}

#[test]
fn unknown_execution_status() {
    let err = parse_job(&job_value("Finished", "Killed")).unwrap_err();
    assert_eq!(err.to_string(), "invalid response from server: hadoop_status 'Killed' unknown");
}

#[test]
fn job_rejects_zoned_timestamp() {
    let mut members = job_value("Waiting", "Waiting").as_struct().unwrap().clone();
    members.insert("submitted".into(), Value::from("2014-05-23 16:38:49 CDT"));
    let err = parse_job(&Value::Struct(members)).unwrap_err();
    assert!(matches!(err, ProtocolError::InvalidTimestamp { field: "submitted", .. }));
}

#[test]
fn lists_preserve_order() {
    let list = Value::Array(vec![
        dataset_value("5", "newest"),
        dataset_value("3", "older"),
        dataset_value("4", "oldest"),
    ]);
    let names: Vec<_> =
        parse_datasets(&list).unwrap().iter().map(|d| d.name().to_string()).collect();
    assert_eq!(names, ["newest", "older", "oldest"]);

    let jobs = parse_jobs(&Value::Array(vec![job_value("Error", "Waiting")])).unwrap();
    assert_eq!(jobs[0].compile_status, CompileStatus::Error);
}

#[test]
fn list_fails_on_first_bad_element() {
    let list = Value::Array(vec![dataset_value("1", "ok"), Value::Nil]);
    assert!(matches!(
        parse_datasets(&list).unwrap_err(),
        ProtocolError::UnexpectedType { found: "nil", .. }
    ));
}

#[test]
fn int_accepts_decimal_strings() {
    assert_eq!(expect_int("boa.count", &Value::from("27")).unwrap(), 27);
    assert_eq!(expect_int("boa.count", &Value::Int(3)).unwrap(), 3);
    assert!(matches!(
        expect_int("boa.count", &Value::from("many")).unwrap_err(),
        ProtocolError::InvalidNumber { field: "boa.count", .. }
    ));
}

#[yare::parameterized(
    bool_true = { Value::Bool(true), true },
    bool_false = { Value::Bool(false), false },
    int_one = { Value::Int(1), true },
    int_zero = { Value::Int(0), false },
    int_other = { Value::Int(2), false },
)]
fn bool_accepts_int_flags(value: Value, expected: bool) {
    assert_eq!(expect_bool("job.public", &value).unwrap(), expected);
}

#[test]
fn bool_rejects_strings() {
    assert_eq!(
        expect_bool("job.public", &Value::from("yes")).unwrap_err(),
        ProtocolError::UnexpectedType { field: "job.public", expected: "boolean", found: "string" }
    );
}

#[test]
fn strings_and_urls() {
    let errors = Value::Array(vec![Value::from("line 1: bad"), Value::from("line 2: worse")]);
    assert_eq!(parse_strings("job.compilerErrors", &errors).unwrap().len(), 2);
    assert!(parse_strings("job.compilerErrors", &Value::Array(vec![])).unwrap().is_empty());

    let url = parse_url("job.url", &Value::from("http://boa.cs.iastate.edu/boa/?q=boa/job/7"))
        .unwrap();
    assert_eq!(url.host_str(), Some("boa.cs.iastate.edu"));
    assert!(matches!(
        parse_url("job.url", &Value::from("not a url")).unwrap_err(),
        ProtocolError::InvalidUrl { .. }
    ));
}

#[test]
fn member_lookup() {
    let login: Value = [("token", Value::from("abc"))].into_iter().collect();
    assert_eq!(expect_member("user.token", &login, "token").unwrap(), &Value::from("abc"));
    assert_eq!(
        expect_member("user.token", &login, "sessid").unwrap_err(),
        ProtocolError::MissingKey { key: "sessid" }
    );
    assert!(matches!(
        expect_member("user.token", &Value::Nil, "token").unwrap_err(),
        ProtocolError::UnexpectedType { field: "user.token", .. }
    ));
}
