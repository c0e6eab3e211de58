// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration errors raised while resolving options and arguments.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration property '{name}' is missing; try to enter a value on the command line")]
    MissingRequired { name: String },

    #[error("specified file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("unable to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid duration: '{value}'")]
    InvalidDuration { value: String },

    #[error("unable to read properties file {}: {message}", path.display())]
    Properties { path: PathBuf, message: String },
}
