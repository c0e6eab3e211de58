// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse result: client options, pass-through arguments and referenced files.

use std::collections::HashMap;
use std::path::PathBuf;

use super::files::extract_file_reference;
use super::options::OptionRegistry;
use crate::error::ConfigError;

/// A parsed argument list.
///
/// Undeclared `--options` are kept in the option map, but [`has_option`]
/// only ever reports declared ones.
///
/// [`has_option`]: CommandLine::has_option
#[derive(Debug, Clone)]
pub struct CommandLine<'a> {
    registry: &'a OptionRegistry,
    options: HashMap<String, Option<String>>,
    raw_arguments: Vec<String>,
    arguments: Vec<String>,
    files: Vec<PathBuf>,
}

impl<'a> CommandLine<'a> {
    pub fn parse<I, S>(registry: &'a OptionRegistry, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut cmd = Self {
            registry,
            options: HashMap::new(),
            raw_arguments: Vec::new(),
            arguments: Vec::new(),
            files: Vec::new(),
        };

        let mut index = 0;
        while index < tokens.len() {
            let token = &tokens[index];
            if let Some(option) = token.strip_prefix("--") {
                let (name, value) = match option.split_once('=') {
                    Some((name, value)) => (name, Some(value.to_string())),
                    None => match tokens.get(index + 1) {
                        Some(next) if !next.starts_with('-') => {
                            index += 1;
                            (option, Some(next.clone()))
                        }
                        _ => (option, None),
                    },
                };
                cmd.options.insert(name.to_string(), value);
            } else {
                let (text, file) = extract_file_reference(token);
                cmd.raw_arguments.push(token.clone());
                cmd.arguments.push(text);
                cmd.files.extend(file);
            }
            index += 1;
        }

        tracing::debug!(
            options = cmd.options.len(),
            arguments = cmd.arguments.len(),
            files = cmd.files.len(),
            "parsed command line"
        );
        cmd
    }

    pub fn registry(&self) -> &'a OptionRegistry {
        self.registry
    }

    /// True if `name` is declared, was given, and, for options that take a
    /// value, was given a non-empty one.
    pub fn has_option(&self, name: &str) -> bool {
        let Some(value) = self.options.get(name) else {
            return false;
        };
        match self.registry.get(name) {
            Some(spec) if spec.takes_value => value.as_deref().is_some_and(|v| !v.is_empty()),
            Some(_) => true,
            None => false,
        }
    }

    /// Raw value given for `name`, if any.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).and_then(|v| v.as_deref())
    }

    /// Pass-through arguments with `file:` markers rewritten to base names.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Pass-through arguments exactly as given.
    pub fn raw_arguments(&self) -> &[String] {
        &self.raw_arguments
    }

    /// Rewritten arguments joined with single spaces.
    pub fn arguments_string(&self) -> String {
        self.arguments.join(" ")
    }

    /// Files referenced by `file:` markers. Each one must exist.
    pub fn argument_files(&self) -> Result<&[PathBuf], ConfigError> {
        if let Some(missing) = self.files.iter().find(|path| !path.exists()) {
            return Err(ConfigError::FileNotFound { path: missing.clone() });
        }
        Ok(&self.files)
    }
}

#[cfg(test)]
#[path = "command_line_tests.rs"]
mod tests;
