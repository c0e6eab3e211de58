// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command line handling for the remote client.
//!
//! Tokens with two hyphens (`--name[=value]`) configure the client itself;
//! everything else is passed through to the remote program, with `file:`
//! markers turned into uploads.

mod command_line;
mod files;
mod options;

pub use command_line::CommandLine;
pub use files::{extract_file_reference, is_separator, FILE_MARKER};
pub use options::{OptionRegistry, OptionSpec};
