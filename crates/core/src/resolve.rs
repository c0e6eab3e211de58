// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Three-tier configuration lookup.
//!
//! A value comes from, in order: the command line, the persisted property
//! store, the option's declared default. A required option with no value
//! from any tier is an error.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::cli::CommandLine;
use crate::duration::parse_duration;
use crate::error::ConfigError;

/// Read-only access to persisted properties.
pub trait PropertySource {
    fn property(&self, name: &str) -> Option<String>;
}

impl PropertySource for HashMap<String, String> {
    fn property(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl PropertySource for BTreeMap<String, String> {
    fn property(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// No persisted properties at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProperties;

impl PropertySource for NoProperties {
    fn property(&self, _name: &str) -> Option<String> {
        None
    }
}

pub struct Resolver<'a, P: PropertySource + ?Sized> {
    cmd: &'a CommandLine<'a>,
    props: &'a P,
}

impl<'a, P: PropertySource + ?Sized> Resolver<'a, P> {
    pub fn new(cmd: &'a CommandLine<'a>, props: &'a P) -> Self {
        Self { cmd, props }
    }

    /// Resolve `name` through the command line, the property store and the
    /// declared default.
    pub fn param(&self, name: &str) -> Result<Option<String>, ConfigError> {
        let spec = self.cmd.registry().get(name);

        let value = self
            .cmd
            .has_option(name)
            .then(|| self.cmd.option(name))
            .flatten()
            .map(str::to_string)
            .filter(|v| !v.is_empty())
            .or_else(|| self.props.property(name).filter(|v| !v.is_empty()))
            .or_else(|| spec.and_then(|s| s.default.clone()).filter(|v| !v.is_empty()));

        if value.is_none() && spec.is_some_and(|s| s.required) {
            return Err(ConfigError::MissingRequired { name: name.to_string() });
        }
        Ok(value)
    }

    /// Resolve `name` as a duration; an unparsable value counts as absent.
    pub fn param_as_duration(&self, name: &str) -> Result<Option<Duration>, ConfigError> {
        Ok(self.param(name)?.and_then(|val| match parse_duration(&val) {
            Ok(duration) => Some(duration),
            Err(e) => {
                tracing::debug!(option = name, "{e}");
                None
            }
        }))
    }

    /// Resolve `name` as a boolean: `true` (any case) is true, anything else false.
    pub fn param_as_bool(&self, name: &str) -> Result<Option<bool>, ConfigError> {
        Ok(self.param(name)?.map(|val| val.trim().eq_ignore_ascii_case("true")))
    }

    /// A flag is on when given on the command line or set to `true` in the
    /// property store.
    pub fn flag(&self, name: &str) -> bool {
        self.cmd.has_option(name)
            || self.props.property(name).is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
