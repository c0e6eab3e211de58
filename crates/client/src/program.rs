// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameters for named-program submissions.

use std::io::ErrorKind;
use std::path::PathBuf;

use tc_core::cli::FILE_MARKER;
use tc_core::{ConfigError, KeyValue, Value};

/// Turn `key=value` arguments into request parameters.
///
/// A bare `key` becomes a parameter with an empty value; empty arguments are
/// dropped. A value of the form `file:<path>` is replaced by the trimmed
/// contents of that file.
pub fn program_params<S: AsRef<str>>(arguments: &[S]) -> Result<Vec<KeyValue>, ConfigError> {
    arguments.iter().filter_map(|arg| KeyValue::parse(arg.as_ref())).map(inline_file).collect()
}

fn inline_file(pair: KeyValue) -> Result<KeyValue, ConfigError> {
    let path = match &pair.value {
        Value::Text(text) => match text.strip_prefix(FILE_MARKER) {
            Some(path) => PathBuf::from(path.trim()),
            None => return Ok(pair),
        },
        Value::File(_) => return Ok(pair),
    };

    let content = std::fs::read_to_string(&path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ConfigError::FileNotFound { path: path.clone() }
        } else {
            ConfigError::FileRead { path: path.clone(), source }
        }
    })?;
    Ok(KeyValue::text(pair.key, content.trim()))
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
