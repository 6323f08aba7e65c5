// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::timestamp::parse_submitted;

#[yare::parameterized(
    waiting  = { "Waiting", CompileStatus::Waiting },
    running  = { "Running", CompileStatus::Running },
    finished = { "Finished", CompileStatus::Finished },
    error    = { "Error", CompileStatus::Error },
)]
fn compile_status_from_wire(word: &str, expected: CompileStatus) {
    assert_eq!(CompileStatus::from_wire(word), Some(expected));
    assert_eq!(expected.to_string(), word);
}

#[yare::parameterized(
    lowercase = { "finished" },
    bogus     = { "Bogus" },
    padded    = { " Running" },
    empty     = { "" },
)]
fn status_matching_is_exact(word: &str) {
    assert_eq!(CompileStatus::from_wire(word), None);
    assert_eq!(ExecutionStatus::from_wire(word), None);
}

#[test]
fn terminal_states() {
    assert!(ExecutionStatus::Finished.is_terminal());
    assert!(ExecutionStatus::Error.is_terminal());
    assert!(!ExecutionStatus::Running.is_terminal());
    assert!(!CompileStatus::Waiting.is_terminal());
}

#[test]
fn compile_error_makes_job_terminal() {
    let job = JobRecord::builder().compile_status(CompileStatus::Error).build();
    assert!(job.is_terminal());

    let job = JobRecord::builder()
        .compile_status(CompileStatus::Finished)
        .execution_status(ExecutionStatus::Running)
        .build();
    assert!(!job.is_terminal());
}

#[test]
fn display_matches_listing_format() {
    let job = JobRecord::builder()
        .id(JobId::new(42))
        .dataset(Dataset::new(7, "2015 September/GitHub"))
        .submitted_at(parse_submitted("2016-01-02 03:04:05").unwrap())
        .compile_status(CompileStatus::Finished)
        .execution_status(ExecutionStatus::Running)
        .build();
    assert_eq!(
        job.to_string(),
        "42 (2016-01-02 03:04:05) - 7, 2015 September/GitHub - \
         compiler_status(Finished) execution_status(Running)"
    );
}
