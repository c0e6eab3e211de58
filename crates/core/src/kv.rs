// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key/value pairs used for request parameters and form fields.

use std::fmt;
use std::path::{Path, PathBuf};

/// The value half of a [`KeyValue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    /// A local file, sent as a file part when posted.
    File(PathBuf),
}

impl Value {
    pub fn as_file(&self) -> Option<&Path> {
        match self {
            Value::File(path) => Some(path),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Value,
}

impl KeyValue {
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: Value::Text(value.into()) }
    }

    pub fn file(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { key: key.into(), value: Value::File(path.into()) }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.value, Value::File(_))
    }

    /// Parse `key=value`. Key and value are trimmed; a missing or empty value
    /// becomes empty text. Returns `None` for an empty string.
    pub fn parse(pair: &str) -> Option<Self> {
        if pair.is_empty() {
            return None;
        }
        match pair.split_once('=') {
            Some((key, value)) => Some(Self::text(key.trim(), value.trim())),
            None => Some(Self::text(pair, "")),
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
#[path = "kv_tests.rs"]
mod tests;
