// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! t-client: command-line client for the remote alignment service.

mod commands;
mod exit_error;
mod logging;
mod options;
mod output;
mod properties;

use exit_error::ExitError;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = commands::run(args) {
        let code = err.downcast_ref::<ExitError>().map_or(exit_error::FAILURE, |e| e.code);
        let message = format!("{err:#}");
        if !message.is_empty() {
            eprintln!("Error: {message}");
        }
        std::process::exit(code);
    }
}
