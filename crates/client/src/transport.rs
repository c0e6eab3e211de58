// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP transport used by the remote client.
//!
//! Text responses are returned whatever their status so the caller can read
//! an error envelope off a 4xx body; downloads fail on any non-2xx status.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::multipart::Form;
use reqwest::blocking::Client;
use tc_core::{KeyValue, Value};

use crate::error::ClientError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Status and body of a text response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, ClientError>;

    /// POST `pairs` as multipart form data: file values as file parts,
    /// everything else as text parts.
    fn post(&self, url: &str, pairs: &[KeyValue]) -> Result<HttpResponse, ClientError>;

    /// Stream the body at `url` into `target`, replacing any existing file.
    fn download(&self, url: &str, target: &Path) -> Result<(), ClientError>;
}

/// Blocking reqwest transport. One connection pool, reused for every call.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(concat!("t-client/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(None)
            .build()
            .map_err(|e| ClientError::transport("(client setup)", e))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, ClientError> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().map_err(|e| ClientError::transport(url, e))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| ClientError::transport(url, e))?;
        Ok(HttpResponse { status, body })
    }

    fn post(&self, url: &str, pairs: &[KeyValue]) -> Result<HttpResponse, ClientError> {
        tracing::debug!(url, parts = pairs.len(), "POST");
        let mut form = Form::new();
        for pair in pairs {
            form = match &pair.value {
                Value::Text(text) => form.text(pair.key.clone(), text.clone()),
                Value::File(path) => {
                    form.file(pair.key.clone(), path).map_err(ClientError::file(path))?
                }
            };
        }
        let response =
            self.client.post(url).multipart(form).send().map_err(|e| ClientError::transport(url, e))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| ClientError::transport(url, e))?;
        Ok(HttpResponse { status, body })
    }

    fn download(&self, url: &str, target: &Path) -> Result<(), ClientError> {
        tracing::debug!(url, target = %target.display(), "download");
        let mut response =
            self.client.get(url).send().map_err(|e| ClientError::transport(url, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }

        let file = File::create(target).map_err(ClientError::file(target))?;
        let mut out = BufWriter::new(file);
        let written = response
            .copy_to(&mut out)
            .map_err(|e| ClientError::transport(url, e))
            .and_then(|_| out.flush().map_err(ClientError::file(target)));
        if let Err(e) = written {
            drop(out);
            if let Err(remove) = std::fs::remove_file(target) {
                tracing::warn!(target = %target.display(), "failed to remove partial download: {remove}");
            }
            return Err(e);
        }
        Ok(())
    }
}
