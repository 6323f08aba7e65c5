// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use boa_core::{format_elapsed, format_submitted, Clock, Dataset, JobRecord, SystemClock};
use clap::ValueEnum;
use serde::Serialize;

use crate::color;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format a submission time as age relative to `now_ms` (e.g. "5s", "2h")
pub fn format_age(record: &JobRecord, now_ms: u64) -> String {
    let submitted_ms = u64::try_from(record.submitted_at.timestamp_millis()).unwrap_or(0);
    format_elapsed(now_ms.saturating_sub(submitted_ms) / 1000)
}

/// One row of `boa jobs`
pub fn format_job_row(record: &JobRecord, now_ms: u64) -> String {
    format!(
        "{:>8}  {}  {:<8}  {:<8}  {}",
        record.id,
        color::muted(&format!("{:>4} ago", format_age(record, now_ms))),
        color::status(&record.compile_status.to_string()),
        color::status(&record.execution_status.to_string()),
        record.dataset.name()
    )
}

/// One row of `boa datasets`
pub fn format_dataset_row(dataset: &Dataset) -> String {
    format!("{:>4}  {}", dataset.id(), dataset.name())
}

/// Detail view of `boa job show`
pub fn print_job(out: &mut dyn Write, record: &JobRecord, now_ms: u64) -> std::io::Result<()> {
    writeln!(out, "{} {}", color::header("Job:"), record.id)?;
    writeln!(
        out,
        "  {} {} ({} ago)",
        color::context("Submitted:"),
        format_submitted(&record.submitted_at),
        format_age(record, now_ms)
    )?;
    writeln!(out, "  {} {}", color::context("Dataset:"), record.dataset)?;
    writeln!(
        out,
        "  {} {}",
        color::context("Compiler:"),
        color::status(&record.compile_status.to_string())
    )?;
    writeln!(
        out,
        "  {} {}",
        color::context("Execution:"),
        color::status(&record.execution_status.to_string())
    )
}

/// Print `items` as JSON, or render each as a text line.
pub fn print_list<T: Serialize>(
    format: OutputFormat,
    items: &[T],
    empty_msg: &str,
    render_row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
        OutputFormat::Text => {
            if items.is_empty() {
                println!("{}", empty_msg);
            }
            for item in items {
                println!("{}", render_row(item));
            }
        }
    }
    Ok(())
}

/// Print `data` as JSON, or call `text_fn` for the text form.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce() -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => text_fn()?,
    }
    Ok(())
}

/// Current wall-clock time for relative ages
pub fn now_ms() -> u64 {
    SystemClock.epoch_ms()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
