// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level dispatch for `t-client`.

mod download;
mod info;
mod settings;
mod submit;

use anyhow::Result;
use tc_client::{ClientError, HttpTransport, RemoteClient};
use tc_core::{CommandLine, Resolver};

use crate::exit_error::ExitError;
use crate::options::{self, APP_BIN};
use crate::output::Console;
use crate::properties::Properties;

pub type Client = RemoteClient<HttpTransport>;

pub fn run(args: Vec<String>) -> Result<()> {
    let registry = options::registry();
    let cmd = registry.parse(args);

    let quiet = cmd.has_option(options::QUIET);
    crate::logging::init(cmd.has_option(options::DEBUG), quiet);

    if cmd.has_option(options::VER) {
        info::version();
        return Ok(());
    }
    if cmd.has_option(options::HELP) || (cmd.arguments().is_empty() && !has_action(&cmd)) {
        print!("{}", registry.usage(APP_BIN));
        return Ok(());
    }

    let props = Properties::load_default().map_err(ExitError::from)?;
    let resolver = Resolver::new(&cmd, &props);
    let console = Console::new(quiet, settings::output_format(&resolver)?);
    let config = settings::client_config(&resolver).map_err(ExitError::from)?;
    tracing::debug!(host = %config.host, bundle = %config.bundle, "client configured");

    let transport = HttpTransport::new().map_err(ExitError::from)?;
    let mut client = RemoteClient::new(config, transport).on_progress(console.progress_sink());

    if cmd.has_option(options::PING) {
        return info::ping(&client, console);
    }
    if cmd.has_option(options::LIST) {
        return info::list(&client, console);
    }

    client.config().prepare_output_dir().map_err(ExitError::from)?;

    if let Some(request_id) = value(&cmd, options::DOWNLOAD) {
        return download::run(&mut client, request_id, console);
    }

    let detach = resolver.flag(options::ASYNC);
    if let Some(name) = value(&cmd, options::PROGRAM) {
        let params = tc_client::program_params(cmd.raw_arguments()).map_err(ExitError::from)?;
        return submit::program(&mut client, name, &params, detach, console);
    }

    let files = cmd.argument_files().map_err(ExitError::from)?;
    submit::command(&mut client, &cmd.arguments_string(), files, detach, console)
}

/// Actions that run without any pass-through arguments.
const ACTIONS: [&str; 4] = [options::PING, options::LIST, options::DOWNLOAD, options::PROGRAM];

fn has_action(cmd: &CommandLine<'_>) -> bool {
    ACTIONS.iter().any(|name| cmd.has_option(name))
}

/// Value of an option given with a non-empty value.
fn value<'c>(cmd: &'c CommandLine<'_>, name: &str) -> Option<&'c str> {
    cmd.has_option(name).then(|| cmd.option(name)).flatten()
}

/// Exit-code aware conversion for client failures.
fn fail(err: ClientError) -> anyhow::Error {
    ExitError::from(err).into()
}
