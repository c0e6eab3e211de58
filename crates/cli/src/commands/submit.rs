// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw command and named program submissions.

use std::path::PathBuf;

use anyhow::Result;
use tc_core::KeyValue;
use tc_wire::{JobSnapshot, JobStatus, Submission};

use super::{fail, Client};
use crate::exit_error::{ExitError, FAILURE};
use crate::output::{Console, OutputFormat, RunSummary};

pub fn command(
    client: &mut Client,
    cmdline: &str,
    files: &[PathBuf],
    detach: bool,
    console: Console,
) -> Result<()> {
    if detach {
        let submission = client.submit_command(cmdline, files).map_err(fail)?;
        return report_detached(client, &submission, console);
    }
    let result = client.run_command(cmdline, files);
    finish(client, result, console)
}

pub fn program(
    client: &mut Client,
    name: &str,
    params: &[KeyValue],
    detach: bool,
    console: Console,
) -> Result<()> {
    if detach {
        let submission = client.submit_program(name, params).map_err(fail)?;
        return report_detached(client, &submission, console);
    }
    let result = client.run_program(name, params);
    finish(client, result, console)
}

fn report_detached(client: &Client, submission: &Submission, console: Console) -> Result<()> {
    let url = client.request_url();
    match console.format {
        OutputFormat::Json => console.json(&RunSummary {
            request_id: submission.request_id.clone(),
            status: submission.status.clone(),
            url,
            files: Vec::new(),
            log_file: None,
        }),
        OutputFormat::Text => {
            println!("{}", submission.request_id);
            if let Some(url) = url {
                console.status(&format!("You can check the result using the following link {url}"));
            }
            Ok(())
        }
    }
}

/// Echo the log, print the share link and pick the exit code.
pub(super) fn finish(
    client: &Client,
    result: Result<JobSnapshot, tc_client::ClientError>,
    console: Console,
) -> Result<()> {
    let snapshot = result.map_err(fail)?;
    let url = client.request_url();

    if console.format == OutputFormat::Json {
        let request_id = client.submission().map(|s| s.request_id.as_str()).unwrap_or_default();
        console.json(&summary(client, request_id, &snapshot, url.clone()))?;
    } else if snapshot.job_status() == JobStatus::Done {
        if let Some(log) = client.result_log().map_err(fail)? {
            console.status(log.trim_end());
        }
    }

    if console.format == OutputFormat::Text {
        if let Some(url) = &url {
            console.status(&format!("\nYou can share this result using the following link {url}"));
        }
    }

    if snapshot.job_status() != JobStatus::Done {
        let detail = match client.log_file() {
            Some(path) => format!("; for more information check the file '{}'", path.display()),
            None => String::new(),
        };
        return Err(ExitError::new(
            FAILURE,
            format!("your request terminated with status '{}'{detail}", snapshot.status),
        )
        .into());
    }
    Ok(())
}

pub(super) fn summary(
    client: &Client,
    request_id: &str,
    snapshot: &JobSnapshot,
    url: Option<String>,
) -> RunSummary {
    RunSummary {
        request_id: request_id.to_string(),
        status: snapshot.status.clone(),
        url,
        files: client.downloaded().to_vec(),
        log_file: client.log_file().map(PathBuf::from),
    }
}
