// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;

use super::submit::summary;
use super::{fail, Client};
use crate::output::{Console, OutputFormat};

/// Download what a previous request has produced so far.
pub fn run(client: &mut Client, request_id: &str, console: Console) -> Result<()> {
    let snapshot = client.download(request_id).map_err(fail)?;
    match console.format {
        OutputFormat::Json => console.json(&summary(client, request_id, &snapshot, None)),
        OutputFormat::Text => {
            console.status(&format!(
                "Downloaded {} file(s) of request {request_id} (status: {})",
                client.downloaded().len(),
                snapshot.status
            ));
            Ok(())
        }
    }
}
