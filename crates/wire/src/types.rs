// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Payload shapes carried by a server response.

use serde::{Deserialize, Serialize};

/// Acknowledgment of an accepted job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Request identifier assigned by the server
    #[serde(rename = "request-id", default)]
    pub request_id: String,
    #[serde(default)]
    pub status: String,
    /// Shareable result page
    #[serde(default)]
    pub url: String,
}

/// Coarse job state derived from a snapshot's status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JobStatus {
    Running,
    Done,
    Failed,
    /// Any other status string; treated as terminal.
    Unknown,
}

tc_core::simple_display! {
    JobStatus {
        Running => "Running",
        Done => "Done",
        Failed => "Failed",
        Unknown => "Unknown",
    }
}

impl JobStatus {
    /// Status strings are matched case-insensitively.
    pub fn parse(status: &str) -> Self {
        let status = status.trim();
        if status.eq_ignore_ascii_case("running") {
            JobStatus::Running
        } else if status.eq_ignore_ascii_case("done") {
            JobStatus::Done
        } else if status.eq_ignore_ascii_case("failed") {
            JobStatus::Failed
        } else {
            JobStatus::Unknown
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Running)
    }
}

/// Point-in-time view of a job. Each poll replaces the previous snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSnapshot {
    #[serde(default)]
    pub bundle: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub cmdline: String,
    #[serde(rename = "elapsed-time", default)]
    pub elapsed_time: u64,
    #[serde(rename = "item", default)]
    pub items: Vec<ResultItem>,
}

impl JobSnapshot {
    pub fn job_status(&self) -> JobStatus {
        JobStatus::parse(&self.status)
    }

    pub fn is_running(&self) -> bool {
        self.job_status() == JobStatus::Running
    }
}

pub const INPUT_FILE: &str = "input_file";
pub const SYSTEM_FILE: &str = "system_file";
pub const LOG_FORMAT: &str = "log";

/// One output artifact of a job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Path on the server, relative to the host root
    #[serde(default)]
    pub webpath: String,
    #[serde(default)]
    pub label: String,
    /// e.g. `input_file`, `system_file`
    #[serde(rename = "type", default)]
    pub kind: String,
    /// May contain directory separators
    #[serde(default)]
    pub name: String,
    /// e.g. `log`, `fasta_aln`
    #[serde(default)]
    pub format: String,
}

impl ResultItem {
    pub fn is_input(&self) -> bool {
        self.kind == INPUT_FILE
    }

    pub fn is_log(&self) -> bool {
        self.kind == SYSTEM_FILE && self.format == LOG_FORMAT
    }
}

/// A program exposed by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cite: String,
}

/// Failure reported by the server inside a response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
