// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `file:` markers inside pass-through arguments.

use std::path::{Path, PathBuf};

pub const FILE_MARKER: &str = "file:";

const SEPARATORS: &str = "/\\?%*|\"<>.:=+-[] ";

/// Characters that may directly precede an embedded `file:` marker.
pub fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(ch)
}

/// Split a pass-through argument into the text sent to the remote program and
/// the local file it references, if any.
///
/// - `file:/some/file.txt` → (`file.txt`, `/some/file.txt`)
/// - `-input=file:/some/file.txt` → (`-input=file.txt`, `/some/file.txt`)
/// - `filefile:/some/file.txt` → unchanged, no file
///
/// Only the first occurrence of the marker is considered.
pub fn extract_file_reference(arg: &str) -> (String, Option<PathBuf>) {
    let Some(pos) = arg.find(FILE_MARKER) else {
        return (arg.to_string(), None);
    };

    let path = &arg[pos + FILE_MARKER.len()..];
    if pos == 0 {
        return (base_name(path), Some(PathBuf::from(path)));
    }

    match arg[..pos].chars().next_back() {
        Some(ch) if is_separator(ch) => {
            let rewritten = format!("{}{}", &arg[..pos], base_name(path));
            (rewritten, Some(PathBuf::from(path)))
        }
        _ => (arg.to_string(), None),
    }
}

fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
