// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Option declarations and usage text.

use std::collections::BTreeMap;
use std::fmt::Write;

use super::command_line::CommandLine;

/// A declared `--option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: String,
    pub description: String,
    /// Whether the option expects `--name=value` rather than a bare flag.
    pub takes_value: bool,
    pub default: Option<String>,
    /// Placeholder shown in usage text, e.g. `n` in `--poll-sleep=<n>`.
    pub sample: Option<String>,
    pub required: bool,
}

/// The set of options a program accepts, keyed and sorted by name.
///
/// Built once at startup and never mutated afterwards; parsing borrows it.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    options: BTreeMap<String, OptionSpec>,
    footer: Option<String>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a boolean flag.
    pub fn flag(self, name: &str, description: &str) -> Self {
        self.declare(OptionSpec {
            name: name.to_string(),
            description: description.to_string(),
            takes_value: false,
            default: None,
            sample: None,
            required: false,
        })
    }

    /// Declare an option carrying a value.
    pub fn valued(
        self,
        name: &str,
        description: &str,
        sample: Option<&str>,
        default: Option<&str>,
        required: bool,
    ) -> Self {
        self.declare(OptionSpec {
            name: name.to_string(),
            description: description.to_string(),
            takes_value: true,
            default: default.map(str::to_string),
            sample: sample.map(str::to_string),
            required,
        })
    }

    /// Declare an option. Empty names are ignored; redeclaring a name replaces it.
    pub fn declare(mut self, spec: OptionSpec) -> Self {
        if !spec.name.is_empty() {
            self.options.insert(spec.name.clone(), spec);
        }
        self
    }

    /// Text appended verbatim after the option list in [`Self::usage`].
    pub fn footer(mut self, text: &str) -> Self {
        self.footer = Some(text.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.get(name)
    }

    /// Parse raw tokens against this registry.
    pub fn parse<I, S>(&self, args: I) -> CommandLine<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandLine::parse(self, args)
    }

    /// Render usage text: one line per option, sorted by name and padded to
    /// the longest name.
    pub fn usage(&self, app_bin: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Usage: {} [options] <arguments>", app_bin);

        let width = self.options.keys().map(|name| name.len()).max().unwrap_or(0);
        if !self.options.is_empty() {
            out.push_str("Available options:\n");
        }
        for opt in self.options.values() {
            let _ = write!(out, "--{:<width$}", opt.name, width = width);
            if opt.takes_value {
                let sample = opt.sample.as_deref().filter(|s| !s.is_empty()).unwrap_or("value");
                let _ = write!(out, "=<{}>", sample);
            }
            if !opt.description.is_empty() {
                let _ = write!(out, ": {}", opt.description);
                if let Some(default) = opt.default.as_deref().filter(|d| !d.is_empty()) {
                    let _ = write!(out, " [{}]", default);
                }
            }
            out.push('\n');
        }
        if let Some(footer) = &self.footer {
            out.push_str(footer);
        }
        out
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
