// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolving client settings from the command line and properties file.

use tc_client::ClientConfig;
use tc_core::{ConfigError, PropertySource, Resolver};

use crate::exit_error::{ExitError, CONFIG};
use crate::options::{
    BUNDLE, FLAT_PATH, FORMAT, HOST, INCLUDE_INPUTS, OUT_PATH, POLL_SLEEP, POLL_TIMEOUT,
};
use crate::output::OutputFormat;

fn required<P: PropertySource + ?Sized>(
    resolver: &Resolver<'_, P>,
    name: &str,
) -> Result<String, ConfigError> {
    resolver.param(name)?.ok_or_else(|| ConfigError::MissingRequired { name: name.to_string() })
}

/// Build the client configuration. Unparsable durations fall back to the
/// client defaults.
pub fn client_config<P: PropertySource + ?Sized>(
    resolver: &Resolver<'_, P>,
) -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::new(required(resolver, HOST)?, required(resolver, BUNDLE)?)
        .flatten(resolver.param_as_bool(FLAT_PATH)?.unwrap_or(true))
        .include_inputs(resolver.flag(INCLUDE_INPUTS));

    if let Some(timeout) = resolver.param_as_duration(POLL_TIMEOUT)? {
        config = config.poll_timeout(timeout);
    }
    if let Some(sleep) = resolver.param_as_duration(POLL_SLEEP)? {
        config = config.poll_sleep(sleep);
    }
    if let Some(dir) = resolver.param(OUT_PATH)? {
        config = config.output_dir(dir);
    }
    Ok(config)
}

pub fn output_format<P: PropertySource + ?Sized>(
    resolver: &Resolver<'_, P>,
) -> Result<OutputFormat, ExitError> {
    match resolver.param(FORMAT)? {
        Some(value) => value.parse().map_err(|e: String| ExitError::new(CONFIG, e)),
        None => Ok(OutputFormat::default()),
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
