// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client errors.

use std::path::PathBuf;
use std::time::Duration;

use tc_core::ConfigError;
use tc_wire::{ErrorRecord, WireError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("the output path cannot be used ({reason}): {}", path.display())]
    OutputPath { path: PathBuf, reason: &'static str },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("the server returned an error: HTTP {status} [{url}]")]
    HttpStatus { url: String, status: u16 },

    #[error(transparent)]
    Envelope(#[from] WireError),

    /// The server answered with an `<err>` record.
    #[error("{} [code: {}, type: {}]", .0.message, .0.code, .0.kind)]
    Server(ErrorRecord),

    /// The job was still running when the poll budget ran out. The job itself
    /// may still complete; `url` is where to check on it.
    #[error("the submitted request did not complete within {}s", timeout.as_secs())]
    WaitTimeout { timeout: Duration, url: Option<String> },

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("result item has no usable file name: '{name}'")]
    InvalidItemName { name: String },
}

impl ClientError {
    pub(crate) fn transport(url: &str, err: impl std::fmt::Display) -> Self {
        ClientError::Transport { url: url.to_string(), message: err.to_string() }
    }

    pub(crate) fn file(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ClientError::File { path, source }
    }
}
