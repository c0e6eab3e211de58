// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted in-memory transport.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tc_core::KeyValue;

use crate::error::ClientError;
use crate::transport::{HttpResponse, Transport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Get { url: String },
    Post { url: String, pairs: Vec<KeyValue> },
    Download { url: String, target: PathBuf },
}

impl Request {
    pub fn url(&self) -> &str {
        match self {
            Request::Get { url } | Request::Post { url, .. } | Request::Download { url, .. } => url,
        }
    }
}

#[derive(Default)]
struct State {
    gets: VecDeque<HttpResponse>,
    fallback_get: Option<HttpResponse>,
    posts: VecDeque<HttpResponse>,
    files: HashMap<String, String>,
    requests: Vec<Request>,
}

/// Transport answering from queued responses.
///
/// Clones share state, so a test can keep a handle after moving one into a
/// client. An empty queue yields a transport error.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<State>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_get(&self, body: impl Into<String>) -> &Self {
        self.state.lock().gets.push_back(HttpResponse::ok(body));
        self
    }

    pub fn push_get_status(&self, status: u16, body: impl Into<String>) -> &Self {
        self.state.lock().gets.push_back(HttpResponse { status, body: body.into() });
        self
    }

    /// Answer every GET with `body` once the queue is empty.
    pub fn repeat_get(&self, body: impl Into<String>) -> &Self {
        self.state.lock().fallback_get = Some(HttpResponse::ok(body));
        self
    }

    pub fn push_post(&self, body: impl Into<String>) -> &Self {
        self.state.lock().posts.push_back(HttpResponse::ok(body));
        self
    }

    pub fn push_post_status(&self, status: u16, body: impl Into<String>) -> &Self {
        self.state.lock().posts.push_back(HttpResponse { status, body: body.into() });
        self
    }

    /// Serve `content` for downloads of `url`.
    pub fn serve_file(&self, url: impl Into<String>, content: impl Into<String>) -> &Self {
        self.state.lock().files.insert(url.into(), content.into());
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().requests.clone()
    }

    pub fn downloads(&self) -> Vec<Request> {
        self.requests().into_iter().filter(|r| matches!(r, Request::Download { .. })).collect()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, ClientError> {
        let mut state = self.state.lock();
        state.requests.push(Request::Get { url: url.to_string() });
        match state.gets.pop_front().or_else(|| state.fallback_get.clone()) {
            Some(response) => Ok(response),
            None => Err(ClientError::transport(url, "no scripted response")),
        }
    }

    fn post(&self, url: &str, pairs: &[KeyValue]) -> Result<HttpResponse, ClientError> {
        let mut state = self.state.lock();
        state.requests.push(Request::Post { url: url.to_string(), pairs: pairs.to_vec() });
        state.posts.pop_front().ok_or_else(|| ClientError::transport(url, "no scripted response"))
    }

    fn download(&self, url: &str, target: &Path) -> Result<(), ClientError> {
        let mut state = self.state.lock();
        state.requests.push(Request::Download { url: url.to_string(), target: target.to_path_buf() });
        let Some(content) = state.files.get(url) else {
            return Err(ClientError::HttpStatus { url: url.to_string(), status: 404 });
        };
        std::fs::write(target, content).map_err(ClientError::file(target))
    }
}
