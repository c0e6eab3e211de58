// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console output: progress lines, listings and result summaries.

use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use tc_client::Progress;
use tc_wire::ServiceDescriptor;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

tc_core::simple_display! {
    OutputFormat {
        Text => "text",
        Json => "json",
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

/// Where status text goes. Quiet mode and JSON mode print no progress.
#[derive(Clone, Copy, Debug)]
pub struct Console {
    pub quiet: bool,
    pub format: OutputFormat,
}

impl Console {
    pub fn new(quiet: bool, format: OutputFormat) -> Self {
        Self { quiet, format }
    }

    fn chatty(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }

    pub fn status(&self, line: &str) {
        if self.chatty() {
            println!("{line}");
        }
    }

    /// Progress sink for [`tc_client::RemoteClient::on_progress`].
    pub fn progress_sink(self) -> impl FnMut(&Progress) + 'static {
        move |event| self.status(&describe(event))
    }

    pub fn json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

pub fn describe(event: &Progress) -> String {
    match event {
        Progress::Sending { url } => format!("Sending request to {url}"),
        Progress::Accepted { request_id } => format!("Request accepted: {request_id}"),
        Progress::Waiting { .. } => "Waiting for result ...".to_string(),
        Progress::Finished { status } => format!("Request completed with status: {status}"),
        Progress::StillRunning { status } => {
            format!("The request has not finished yet (status: {status}); downloading the files available so far")
        }
        Progress::Downloading { name, target } => {
            format!("Downloading file: {name} -> {}", target.display())
        }
    }
}

/// One line per service: name, title and group in aligned columns.
pub fn format_services(services: &[ServiceDescriptor]) -> String {
    if services.is_empty() {
        return "No services available\n".to_string();
    }
    let name_width = services.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let title_width = services.iter().map(|s| s.title.len()).max().unwrap_or(0);
    let mut out = String::new();
    for service in services {
        let line = format!(
            "{:<name_width$}  {:<title_width$}  {}",
            service.name, service.title, service.group
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Outcome of a run or download, as printed in JSON mode.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub request_id: String,
    pub status: String,
    pub url: Option<String>,
    pub files: Vec<PathBuf>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct PingSummary {
    pub status: String,
    pub elapsed_ms: u64,
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
