// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;

use super::{fail, Client};
use crate::output::{format_services, Console, OutputFormat, PingSummary};

pub fn version() {
    println!("t-client {} ({})", env!("CARGO_PKG_VERSION"), env!("TC_BUILD_HASH"));
}

pub fn ping(client: &Client, console: Console) -> Result<()> {
    let report = client.ping().map_err(fail)?;
    match console.format {
        OutputFormat::Json => console.json(&PingSummary {
            status: report.status,
            elapsed_ms: report.elapsed.as_millis() as u64,
        }),
        OutputFormat::Text => {
            if !console.quiet {
                println!("{} ({} ms)", report.status, report.elapsed.as_millis());
            }
            Ok(())
        }
    }
}

pub fn list(client: &Client, console: Console) -> Result<()> {
    let services = client.services().map_err(fail)?;
    match console.format {
        OutputFormat::Json => console.json(&services),
        OutputFormat::Text => {
            print!("{}", format_services(&services));
            Ok(())
        }
    }
}
