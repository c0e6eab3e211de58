// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

use tc_client::ClientError;
use tc_core::ConfigError;

pub const FAILURE: i32 = 1;
pub const TIMEOUT: i32 = 2;
pub const CONFIG: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

impl From<ConfigError> for ExitError {
    fn from(err: ConfigError) -> Self {
        ExitError::new(CONFIG, err.to_string())
    }
}

impl From<ClientError> for ExitError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Config(err) => err.into(),
            ClientError::OutputPath { .. } | ClientError::File { .. } => {
                ExitError::new(CONFIG, err.to_string())
            }
            ClientError::WaitTimeout { url: Some(ref url), .. } => ExitError::new(
                TIMEOUT,
                format!("{err}\nYou can continue to check for it at the following link {url}"),
            ),
            ClientError::WaitTimeout { url: None, .. } => ExitError::new(TIMEOUT, err.to_string()),
            _ => ExitError::new(FAILURE, err.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
