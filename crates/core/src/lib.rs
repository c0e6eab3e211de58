// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tc-core: argument parsing, configuration lookup and time handling for the
//! remote alignment client

pub mod macros;

pub mod cli;
pub mod clock;
pub mod duration;
pub mod error;
pub mod kv;
pub mod resolve;

pub use cli::{extract_file_reference, CommandLine, OptionRegistry, OptionSpec};
pub use clock::{Clock, FakeClock, SystemClock};
pub use duration::parse_duration;
pub use error::ConfigError;
pub use kv::{KeyValue, Value};
pub use resolve::{NoProperties, PropertySource, Resolver};
