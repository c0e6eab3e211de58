// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use tracing_subscriber::EnvFilter;

/// Filter directive: `--debug` beats `--quiet`, which beats `RUST_LOG`.
pub fn directive(debug: bool, quiet: bool, env: Option<&str>) -> String {
    if debug {
        "debug".to_string()
    } else if quiet {
        "error".to_string()
    } else {
        env.filter(|e| !e.trim().is_empty()).unwrap_or("warn").to_string()
    }
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(debug: bool, quiet: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = directive(debug, quiet, env.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
