// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote job client: submit, wait, download.
//!
//! Every response goes through [`RemoteClient::read_envelope`], which turns an
//! `<err>` record into [`ClientError::Server`] before any caller sees it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tc_core::{Clock, KeyValue, SystemClock};
use tc_wire::{decode, Envelope, JobSnapshot, ServiceDescriptor, Submission};
use url::form_urlencoded::byte_serialize;

use crate::config::ClientConfig;
use crate::download::{file_base_url, file_url, target_path};
use crate::error::ClientError;
use crate::poll::{wait_until_terminal, PollState, Poller};
use crate::transport::{HttpResponse, Transport};

/// Status events for console display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Sending { url: String },
    Accepted { request_id: String },
    Waiting { request_id: String },
    Finished { status: String },
    /// Download-only on a job that has not finished yet.
    StillRunning { status: String },
    Downloading { name: String, target: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingReport {
    pub status: String,
    pub elapsed: Duration,
}

type ProgressFn = Box<dyn FnMut(&Progress)>;

pub struct RemoteClient<T: Transport, C: Clock = SystemClock> {
    config: ClientConfig,
    transport: T,
    clock: C,
    progress: ProgressFn,
    submission: Option<Submission>,
    result: Option<JobSnapshot>,
    downloaded: Vec<PathBuf>,
    log_file: Option<PathBuf>,
}

impl<T: Transport> RemoteClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self::with_clock(config, transport, SystemClock)
    }
}

impl<T: Transport, C: Clock> RemoteClient<T, C> {
    pub fn with_clock(config: ClientConfig, transport: T, clock: C) -> Self {
        Self {
            config,
            transport,
            clock,
            progress: Box::new(|_| {}),
            submission: None,
            result: None,
            downloaded: Vec::new(),
            log_file: None,
        }
    }

    /// Route status events to `f`.
    pub fn on_progress(mut self, f: impl FnMut(&Progress) + 'static) -> Self {
        self.progress = Box::new(f);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `http://<host>/api/<bundle>/<action>`, plus a form-encoded query when
    /// `params` is non-empty. An empty action leaves a trailing slash.
    pub fn url_for(&self, action: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("http://{}/api/{}/{}", self.config.host, self.config.bundle, action);
        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.extend(byte_serialize(value.as_bytes()));
        }
        url
    }

    /// Submit a raw command line, uploading `files` as `file:0`, `file:1`...
    pub fn submit_command(
        &mut self,
        cmdline: &str,
        files: &[PathBuf],
    ) -> Result<Submission, ClientError> {
        let mut pairs = Vec::with_capacity(files.len() + 1);
        pairs.push(KeyValue::text("args", cmdline));
        for (i, file) in files.iter().enumerate() {
            pairs.push(KeyValue::file(format!("file:{i}"), file.clone()));
        }
        let url = self.url_for("run", &[]);
        self.submit(&url, &pairs)
    }

    /// Submit to a named program with already-resolved parameters.
    pub fn submit_program(
        &mut self,
        name: &str,
        params: &[KeyValue],
    ) -> Result<Submission, ClientError> {
        let url = self.url_for("submit", &[("name", name)]);
        self.submit(&url, params)
    }

    fn submit(&mut self, url: &str, pairs: &[KeyValue]) -> Result<Submission, ClientError> {
        for pair in pairs {
            if let Some(path) = pair.value.as_file() {
                if !path.is_file() {
                    return Err(tc_core::ConfigError::FileNotFound { path: path.to_path_buf() }.into());
                }
            }
        }

        self.emit(Progress::Sending { url: url.to_string() });
        let response = self.transport.post(url, pairs)?;
        let submission = Self::read_envelope(url, response)?.into_submission()?;
        tracing::info!(request_id = %submission.request_id, url = %submission.url, "request accepted");

        self.submission = Some(submission.clone());
        self.result = None;
        self.downloaded.clear();
        self.log_file = None;
        self.emit(Progress::Accepted { request_id: submission.request_id.clone() });
        Ok(submission)
    }

    /// One snapshot of the job `request_id`.
    pub fn fetch_result(&self, request_id: &str) -> Result<JobSnapshot, ClientError> {
        let url = self.url_for("result", &[("rid", request_id)]);
        let response = self.transport.get(&url)?;
        Ok(Self::read_envelope(&url, response)?.into_result()?)
    }

    /// Poll until the job leaves `Running` or the poll budget is spent.
    ///
    /// On timeout the last snapshot and the submission are kept, so
    /// [`request_url`](Self::request_url) still works.
    pub fn wait_for_result(&mut self, request_id: &str) -> Result<JobSnapshot, ClientError> {
        self.emit(Progress::Waiting { request_id: request_id.to_string() });

        let mut poller =
            Poller::new(self.clock.clone(), self.config.poll_sleep, self.config.poll_timeout);
        let outcome = wait_until_terminal(&mut poller, || self.fetch_result(request_id))?;
        tracing::debug!(state = %outcome.state, polls = outcome.polls, "wait finished");

        self.result = Some(outcome.snapshot.clone());
        if outcome.state == PollState::TimedOut {
            return Err(ClientError::WaitTimeout {
                timeout: poller.timeout(),
                url: self.request_url(),
            });
        }
        self.emit(Progress::Finished { status: outcome.snapshot.status.clone() });
        Ok(outcome.snapshot)
    }

    /// Download the items of `snapshot`, in order, stopping at the first failure.
    pub fn download_result_items(
        &mut self,
        snapshot: &JobSnapshot,
    ) -> Result<Vec<PathBuf>, ClientError> {
        let output_dir = self.config.output_dir.clone();
        self.downloaded.clear();

        for item in &snapshot.items {
            if item.is_input() && !self.config.include_inputs {
                tracing::debug!(name = %item.name, "skipping input file");
                continue;
            }

            let target = target_path(output_dir.as_deref(), &item.name, self.config.flatten)
                .ok_or_else(|| ClientError::InvalidItemName { name: item.name.clone() })?;
            ensure_parent(&target)?;

            self.emit(Progress::Downloading { name: item.name.clone(), target: target.clone() });
            let url = file_url(&self.config.host, &item.webpath);
            self.transport.download(&url, &target)?;
            tracing::info!(url, target = %target.display(), "downloaded");

            if item.is_log() {
                self.log_file = Some(target.clone());
            }
            self.downloaded.push(target);
        }
        Ok(self.downloaded.clone())
    }

    /// Submit a raw command, wait for it and fetch its outputs.
    pub fn run_command(
        &mut self,
        cmdline: &str,
        files: &[PathBuf],
    ) -> Result<JobSnapshot, ClientError> {
        let submission = self.submit_command(cmdline, files)?;
        self.complete(&submission.request_id)
    }

    /// Submit a named program, wait for it and fetch its outputs.
    pub fn run_program(
        &mut self,
        name: &str,
        params: &[KeyValue],
    ) -> Result<JobSnapshot, ClientError> {
        let submission = self.submit_program(name, params)?;
        self.complete(&submission.request_id)
    }

    fn complete(&mut self, request_id: &str) -> Result<JobSnapshot, ClientError> {
        let snapshot = self.wait_for_result(request_id)?;
        self.download_result_items(&snapshot)?;
        Ok(snapshot)
    }

    /// Download whatever a job has produced so far, without waiting.
    pub fn download(&mut self, request_id: &str) -> Result<JobSnapshot, ClientError> {
        let snapshot = self.fetch_result(request_id)?;
        self.result = Some(snapshot.clone());
        if snapshot.is_running() {
            tracing::warn!(request_id, "job has not finished, downloading available files");
            self.emit(Progress::StillRunning { status: snapshot.status.clone() });
        }
        self.download_result_items(&snapshot)?;
        Ok(snapshot)
    }

    pub fn services(&self) -> Result<Vec<ServiceDescriptor>, ClientError> {
        let url = self.url_for("services", &[]);
        let response = self.transport.get(&url)?;
        Ok(Self::read_envelope(&url, response)?.into_services()?)
    }

    /// Ask the server for its status and time the round trip.
    pub fn ping(&self) -> Result<PingReport, ClientError> {
        let url = self.url_for("ping", &[]);
        let start = self.clock.now();
        let response = self.transport.get(&url)?;
        let elapsed = self.clock.now().saturating_duration_since(start);
        let status = Self::read_envelope(&url, response)?.into_ping()?;
        Ok(PingReport { status, elapsed })
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Latest snapshot seen by a wait or download.
    pub fn result(&self) -> Option<&JobSnapshot> {
        self.result.as_ref()
    }

    /// Files written by the last download pass, in item order.
    pub fn downloaded(&self) -> &[PathBuf] {
        &self.downloaded
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Shareable result page of the current submission. Server-relative
    /// URLs are resolved against the host.
    pub fn request_url(&self) -> Option<String> {
        let url = &self.submission.as_ref()?.url;
        if url.is_empty() {
            None
        } else if url.starts_with('/') {
            Some(format!("{}{}", file_base_url(&self.config.host), url))
        } else {
            Some(url.clone())
        }
    }

    /// Contents of the downloaded log file, if the job produced one.
    pub fn result_log(&self) -> Result<Option<String>, ClientError> {
        let Some(path) = &self.log_file else {
            return Ok(None);
        };
        std::fs::read_to_string(path).map(Some).map_err(ClientError::file(path))
    }

    fn emit(&mut self, event: Progress) {
        (self.progress)(&event);
    }

    /// Decode a response body, surfacing server and HTTP errors.
    ///
    /// An `<err>` record wins over everything, including a non-2xx status.
    fn read_envelope(url: &str, response: HttpResponse) -> Result<Envelope, ClientError> {
        match decode(&response.body) {
            Ok(Envelope::Error(record)) => {
                tracing::debug!(url, code = %record.code, "server reported an error");
                Err(ClientError::Server(record))
            }
            _ if !response.is_success() => {
                Err(ClientError::HttpStatus { url: url.to_string(), status: response.status })
            }
            decoded => Ok(decoded?),
        }
    }
}

fn ensure_parent(target: &Path) -> Result<(), ClientError> {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            std::fs::create_dir_all(parent).map_err(ClientError::file(parent))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
