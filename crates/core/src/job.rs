// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identifier, status enums and the job record.

use crate::dataset::Dataset;
use crate::timestamp::format_submitted;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Server-assigned identifier of a submitted job.
    ///
    /// Unique per job. Job-scoped remote calls address the job by this id.
    pub struct JobId;
}

/// Generates a status enum over the four states the server reports,
/// with exact-match parsing from the wire word.
macro_rules! job_status {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            Waiting,
            Running,
            Finished,
            Error,
        }

        impl $name {
            /// Parse the exact wire word (`"Waiting"`, `"Running"`, ...).
            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    "Waiting" => Some(Self::Waiting),
                    "Running" => Some(Self::Running),
                    "Finished" => Some(Self::Finished),
                    "Error" => Some(Self::Error),
                    _ => None,
                }
            }

            /// True once the phase can no longer change on its own.
            pub fn is_terminal(&self) -> bool {
                matches!(self, Self::Finished | Self::Error)
            }
        }

        crate::simple_display! {
            $name {
                Waiting => "Waiting",
                Running => "Running",
                Finished => "Finished",
                Error => "Error",
            }
        }
    };
}

job_status! {
    /// Status of the compile phase (`compiler_status` on the wire).
    CompileStatus
}

job_status! {
    /// Status of the execution phase (`hadoop_status` on the wire).
    ExecutionStatus
}

/// Snapshot of one submitted job as last reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub submitted_at: DateTime<Utc>,
    pub dataset: Dataset,
    pub compile_status: CompileStatus,
    pub execution_status: ExecutionStatus,
}

impl JobRecord {
    /// True when both phases have stopped moving.
    ///
    /// A compile error ends the job even though execution never left
    /// `Waiting`.
    pub fn is_terminal(&self) -> bool {
        self.compile_status == CompileStatus::Error || self.execution_status.is_terminal()
    }
}

impl std::fmt::Display for JobRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - {} - compiler_status({}) execution_status({})",
            self.id,
            format_submitted(&self.submitted_at),
            self.dataset,
            self.compile_status,
            self.execution_status
        )
    }
}

crate::builder! {
    pub struct JobRecordBuilder => JobRecord {
        into {
            id: JobId = JobId::new(1),
            dataset: Dataset = Dataset::new(1, "2013 September/SF.net"),
        }
        set {
            submitted_at: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH,
            compile_status: CompileStatus = CompileStatus::Waiting,
            execution_status: ExecutionStatus = ExecutionStatus::Waiting,
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
