// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client settings.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ClientError;

pub const DEFAULT_POLL_SLEEP: Duration = Duration::from_secs(5);
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Host name, optionally followed by a path prefix (`example.org/tc`)
    pub host: String,
    pub bundle: String,
    pub poll_sleep: Duration,
    pub poll_timeout: Duration,
    /// Downloads land in the current directory when unset.
    pub output_dir: Option<PathBuf>,
    pub flatten: bool,
    pub include_inputs: bool,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, bundle: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            bundle: bundle.into(),
            poll_sleep: DEFAULT_POLL_SLEEP,
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            output_dir: None,
            flatten: true,
            include_inputs: false,
        }
    }

    tc_core::setters! {
        into { host: String, bundle: String }
        set { poll_sleep: Duration, poll_timeout: Duration, flatten: bool, include_inputs: bool }
        option { output_dir: PathBuf }
    }

    /// Create the output directory if needed.
    ///
    /// Fails if the path exists but is not a directory.
    pub fn prepare_output_dir(&self) -> Result<(), ClientError> {
        let Some(dir) = &self.output_dir else {
            return Ok(());
        };
        if dir.exists() {
            if !dir.is_dir() {
                return Err(ClientError::OutputPath { path: dir.clone(), reason: "not a directory" });
            }
            return Ok(());
        }
        std::fs::create_dir_all(dir).map_err(|_| ClientError::OutputPath {
            path: dir.clone(),
            reason: "cannot be created",
        })?;
        tracing::debug!(dir = %dir.display(), "created output directory");
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
