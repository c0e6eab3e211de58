// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tc-client: submits jobs to a remote alignment service, waits for them to
//! finish and downloads their outputs.
//!
//! All calls are blocking and run on the caller's thread.

mod client;
mod config;
mod download;
mod error;
mod poll;
mod program;
mod transport;

#[cfg(test)]
mod test_support;

pub use client::{PingReport, Progress, RemoteClient};
pub use config::{ClientConfig, DEFAULT_POLL_SLEEP, DEFAULT_POLL_TIMEOUT};
pub use download::{file_base_url, target_path};
pub use error::ClientError;
pub use poll::{wait_until_terminal, PollState, Poller, Tick, WaitOutcome};
pub use program::program_params;
pub use transport::{HttpResponse, HttpTransport, Transport};
