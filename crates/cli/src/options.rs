// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options understood by `t-client`. Everything else is passed through.

use tc_core::OptionRegistry;

pub const APP_BIN: &str = "t-client";

pub const HOST: &str = "host";
pub const BUNDLE: &str = "bundle";
pub const OUT_PATH: &str = "out-path";
pub const FLAT_PATH: &str = "flat-path";
pub const INCLUDE_INPUTS: &str = "include-inputs";
pub const POLL_TIMEOUT: &str = "poll-timeout";
pub const POLL_SLEEP: &str = "poll-sleep";
pub const FORMAT: &str = "format";
pub const ASYNC: &str = "async";
pub const PING: &str = "ping";
pub const LIST: &str = "list";
pub const PROGRAM: &str = "program";
pub const DOWNLOAD: &str = "download";
pub const HELP: &str = "help";
pub const VER: &str = "ver";
pub const QUIET: &str = "quiet";
pub const DEBUG: &str = "debug";

pub const DEFAULT_HOST: &str = "tcoffee.crg.cat";
pub const DEFAULT_BUNDLE: &str = "tcoffee";

const USAGE_FOOTER: &str = "\
Arguments:
  Any argument accepted by the remote program.
  Local files must be given with the 'file:' prefix to be uploaded.
Example:
  t-client --out-path=/some/path -in=file:sequences.fa -mode=expresso
";

pub fn registry() -> OptionRegistry {
    OptionRegistry::new()
        .valued(HOST, "The remote host to which connect", None, Some(DEFAULT_HOST), true)
        .valued(BUNDLE, "The remote bundle serving the request", None, Some(DEFAULT_BUNDLE), true)
        .valued(OUT_PATH, "The path where to save the output files", Some("dir"), None, false)
        .valued(
            FLAT_PATH,
            "Save every output file directly under the output path",
            Some("true|false"),
            Some("true"),
            false,
        )
        .flag(INCLUDE_INPUTS, "Download the input files along with the results")
        .valued(
            POLL_TIMEOUT,
            "Max time to wait for the request completion",
            Some("duration"),
            Some("1h"),
            false,
        )
        .valued(POLL_SLEEP, "Time to sleep between each poll request", Some("duration"), Some("5s"), false)
        .valued(FORMAT, "Output format", Some("text|json"), Some("text"), false)
        .flag(ASYNC, "Submit the request and exit without waiting for the result")
        .flag(PING, "Ping the server to verify service integrity")
        .flag(LIST, "Print the list of the available services")
        .valued(PROGRAM, "Run the named program with key=value arguments", Some("name"), None, false)
        .valued(DOWNLOAD, "Download the result files of a previous request", Some("request id"), None, false)
        .flag(HELP, "Print this help")
        .flag(VER, "Print the client version number")
        .flag(QUIET, "Run quietly without any console output")
        .flag(DEBUG, "Run showing debug information")
        .footer(USAGE_FOOTER)
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
