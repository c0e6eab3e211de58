// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness: a sandboxed `t-client` invocation and a canned HTTP server.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;

use assert_cmd::Command;
use tempfile::TempDir;

/// `t-client` run inside a scratch directory with its own properties file.
pub struct Cli {
    dir: TempDir,
    args: Vec<String>,
}

pub fn cli() -> Cli {
    Cli { dir: tempfile::tempdir().unwrap(), args: Vec::new() }
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    /// Contents of the properties file.
    pub fn props(self, toml: &str) -> Self {
        std::fs::write(self.props_path(), toml).unwrap();
        self
    }

    /// Create a file relative to the working directory.
    pub fn file(self, path: &str, content: &str) -> Self {
        let path = self.dir.path().join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    fn props_path(&self) -> PathBuf {
        self.dir.path().join("props.toml")
    }

    pub fn run(self) -> Outcome {
        let output = Command::cargo_bin("t-client")
            .unwrap()
            .args(&self.args)
            .current_dir(self.dir.path())
            .env("TC_CONFIG", self.props_path())
            .env_remove("RUST_LOG")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .env_remove("ALL_PROXY")
            .env_remove("all_proxy")
            .output()
            .unwrap();
        Outcome {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            dir: self.dir,
        }
    }

    pub fn passes(self) -> Outcome {
        self.exits(0)
    }

    pub fn exits(self, code: i32) -> Outcome {
        let outcome = self.run();
        assert_eq!(
            outcome.code,
            Some(code),
            "unexpected exit code\n--- stdout\n{}\n--- stderr\n{}",
            outcome.stdout,
            outcome.stderr
        );
        outcome
    }
}

pub struct Outcome {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    dir: TempDir,
}

impl Outcome {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout lacks {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr lacks {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(path)).unwrap()
    }
}

/// A request seen by [`CannedServer`].
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// HTTP server answering fixed bodies by path (including query).
pub struct CannedServer {
    host: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl CannedServer {
    pub fn start(routes: &[(&str, u16, &str)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let host = listener.local_addr().unwrap().to_string();
        let routes: HashMap<String, (u16, String)> =
            routes.iter().map(|(p, s, b)| (p.to_string(), (*s, b.to_string()))).collect();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                answer(stream, &routes, &log);
            }
        });
        Self { host, seen }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn host_arg(&self) -> String {
        format!("--host={}", self.host)
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

fn answer(mut stream: TcpStream, routes: &HashMap<String, (u16, String)>, log: &Mutex<Vec<Seen>>) {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut content_length = 0;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).is_err() || line == "\r\n" || line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }
    let mut body = vec![0; content_length];
    let _ = reader.read_exact(&mut body);

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or("/").to_string();
    log.lock().unwrap().push(Seen {
        method,
        path: path.clone(),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let (status, body) = routes.get(&path).cloned().unwrap_or((404, "not found".to_string()));
    let response = format!(
        "HTTP/1.1 {status} X\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}

pub fn submit_xml(request_id: &str) -> String {
    format!(
        "<response><submit><request-id>{request_id}</request-id><status>Running</status>\
         <url>/apps/tcoffee/{request_id}.html</url></submit></response>"
    )
}

/// Result envelope; items are (webpath, type, name, format).
pub fn result_xml(status: &str, items: &[(&str, &str, &str, &str)]) -> String {
    let mut xml = format!("<response><result><status>{status}</status>");
    for (webpath, kind, name, format) in items {
        xml.push_str(&format!(
            "<item><webpath>{webpath}</webpath><type>{kind}</type>\
             <name>{name}</name><format>{format}</format></item>"
        ));
    }
    xml.push_str("</result></response>");
    xml
}
