// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The user's properties file: a flat TOML table read once at startup.
//!
//! Lookup order for the file is `$TC_CONFIG`, then `~/.t-client.toml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tc_core::{ConfigError, PropertySource};

pub const CONFIG_ENV: &str = "TC_CONFIG";
const FILE_NAME: &str = ".t-client.toml";

#[derive(Debug, Default)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    pub fn default_path() -> Option<PathBuf> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::home_dir().map(|home| home.join(FILE_NAME)),
        }
    }

    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no properties file");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Properties {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let props = Self::parse(&text).map_err(|message| ConfigError::Properties {
            path: path.to_path_buf(),
            message,
        })?;
        tracing::debug!(path = %path.display(), properties = props.len(), "loaded properties");
        Ok(props)
    }

    /// Scalars are kept as text; nested tables and arrays are ignored.
    pub fn parse(text: &str) -> Result<Self, String> {
        let table: toml::Table = text.parse().map_err(|e: toml::de::Error| e.message().to_string())?;
        let mut values = BTreeMap::new();
        for (key, value) in table {
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => {
                    tracing::debug!(key, "ignoring non-scalar property");
                    continue;
                }
            };
            values.insert(key, text);
        }
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl PropertySource for Properties {
    fn property(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

#[cfg(test)]
#[path = "properties_tests.rs"]
mod tests;
