// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! XML response envelope.
//!
//! Every server response is a `<response>` document holding one payload.
//! An `<err>` element wins over anything else in the document.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use thiserror::Error;

use crate::types::{ErrorRecord, JobSnapshot, ServiceDescriptor, Submission};

const ROOT: &str = "response";

#[derive(Debug, Error)]
pub enum WireError {
    #[error("invalid server response: {message}\n{raw}")]
    Malformed { message: String, raw: String },

    #[error("unexpected server response: expected {expected}, got {found}")]
    UnexpectedPayload { expected: &'static str, found: &'static str },
}

/// A decoded response: exactly one payload kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Submission(Submission),
    Result(JobSnapshot),
    Services(Vec<ServiceDescriptor>),
    Ping(String),
    Error(ErrorRecord),
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    submit: Option<Submission>,
    #[serde(default)]
    result: Option<JobSnapshot>,
    #[serde(rename = "service", default)]
    services: Vec<ServiceDescriptor>,
    #[serde(default)]
    err: Option<ErrorRecord>,
}

/// Only the error record; every sibling element is skipped unparsed.
#[derive(Debug, Deserialize)]
struct ErrorOnly {
    #[serde(default)]
    err: Option<ErrorRecord>,
}

impl From<RawResponse> for Envelope {
    fn from(raw: RawResponse) -> Self {
        if let Some(err) = raw.err {
            return Envelope::Error(err);
        }
        if let Some(submit) = raw.submit {
            return Envelope::Submission(submit);
        }
        if let Some(result) = raw.result {
            return Envelope::Result(result);
        }
        if !raw.services.is_empty() {
            return Envelope::Services(raw.services);
        }
        match raw.status {
            Some(status) => Envelope::Ping(status),
            None => Envelope::Services(Vec::new()),
        }
    }
}

/// Decode a response document.
pub fn decode(text: &str) -> Result<Envelope, WireError> {
    let malformed = |message: String| WireError::Malformed { message, raw: text.to_string() };

    match root_element(text) {
        Ok(name) if name == ROOT => {}
        Ok(name) => return Err(malformed(format!("expected <{ROOT}> root element, found <{name}>"))),
        Err(message) => return Err(malformed(message)),
    }

    if let Ok(ErrorOnly { err: Some(err) }) = quick_xml::de::from_str(text) {
        return Ok(Envelope::Error(err));
    }

    let raw: RawResponse = quick_xml::de::from_str(text).map_err(|e| malformed(e.to_string()))?;
    Ok(raw.into())
}

/// Name of the first element in the document.
fn root_element(text: &str) -> Result<String, String> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Text(t)) if !t.iter().all(u8::is_ascii_whitespace) => {
                return Err("text found before the root element".to_string());
            }
            Ok(Event::Eof) => return Err("empty document".to_string()),
            Ok(_) => {}
            Err(e) => return Err(e.to_string()),
        }
    }
}

impl Envelope {
    /// Short name of the payload kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Envelope::Submission(_) => "submission",
            Envelope::Result(_) => "result",
            Envelope::Services(_) => "services",
            Envelope::Ping(_) => "ping",
            Envelope::Error(_) => "error",
        }
    }

    pub fn into_submission(self) -> Result<Submission, WireError> {
        match self {
            Envelope::Submission(submission) => Ok(submission),
            other => Err(other.unexpected("submission")),
        }
    }

    pub fn into_result(self) -> Result<JobSnapshot, WireError> {
        match self {
            Envelope::Result(snapshot) => Ok(snapshot),
            other => Err(other.unexpected("result")),
        }
    }

    pub fn into_services(self) -> Result<Vec<ServiceDescriptor>, WireError> {
        match self {
            Envelope::Services(services) => Ok(services),
            other => Err(other.unexpected("services")),
        }
    }

    pub fn into_ping(self) -> Result<String, WireError> {
        match self {
            Envelope::Ping(status) => Ok(status),
            other => Err(other.unexpected("ping")),
        }
    }

    fn unexpected(&self, expected: &'static str) -> WireError {
        WireError::UnexpectedPayload { expected, found: self.kind() }
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
