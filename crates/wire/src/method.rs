// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote procedure names exposed by the Boa API endpoint.

/// One remote procedure on the API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    // session
    UserLogin,
    SystemConnect,
    UserToken,
    UserLogout,

    // datasets and job listings
    Datasets,
    Job,
    Jobs,
    JobRange,
    JobCount,
    Submit,

    // job-scoped
    JobStop,
    JobResubmit,
    JobDelete,
    JobSetPublic,
    JobPublic,
    JobUrl,
    JobPublicUrl,
    JobCompilerErrors,
    JobSource,
    JobOutput,
    JobOutputSize,
}

impl Method {
    /// The `methodName` sent on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Method::UserLogin => "user.login",
            Method::SystemConnect => "system.connect",
            Method::UserToken => "user.token",
            Method::UserLogout => "user.logout",
            Method::Datasets => "boa.datasets",
            Method::Job => "boa.job",
            Method::Jobs => "boa.jobs",
            Method::JobRange => "boa.range",
            Method::JobCount => "boa.count",
            Method::Submit => "boa.submit",
            Method::JobStop => "job.stop",
            Method::JobResubmit => "job.resubmit",
            Method::JobDelete => "job.delete",
            Method::JobSetPublic => "job.setpublic",
            Method::JobPublic => "job.public",
            Method::JobUrl => "job.url",
            Method::JobPublicUrl => "job.publicurl",
            Method::JobCompilerErrors => "job.compilerErrors",
            Method::JobSource => "job.source",
            Method::JobOutput => "job.output",
            Method::JobOutputSize => "job.outputsize",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
