// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping result item names onto local paths.

use std::path::{Path, PathBuf};

fn segments(name: &str) -> impl Iterator<Item = &str> {
    name.split(['/', '\\']).filter(|s| !s.is_empty() && *s != "." && *s != "..")
}

/// Local path for a result item called `name`.
///
/// With `flatten`, only the base name is kept, so items sharing a base name
/// overwrite each other. Otherwise the relative structure is preserved with
/// root and parent components dropped so a name can never escape `output_dir`.
/// Returns `None` when the name has no usable component.
pub fn target_path(output_dir: Option<&Path>, name: &str, flatten: bool) -> Option<PathBuf> {
    let mut target = output_dir.map(Path::to_path_buf).unwrap_or_default();
    if flatten {
        target.push(segments(name).last()?);
    } else {
        let before = target.as_os_str().len();
        target.extend(segments(name));
        if target.as_os_str().len() == before {
            return None;
        }
    }
    Some(target)
}

/// `http://` plus everything in `host` before the first `/`.
pub fn file_base_url(host: &str) -> String {
    let authority = host.split('/').next().unwrap_or(host);
    format!("http://{authority}")
}

/// Absolute URL of a server path, joining with a single `/`.
pub fn file_url(host: &str, webpath: &str) -> String {
    let base = file_base_url(host);
    if webpath.starts_with('/') {
        format!("{base}{webpath}")
    } else {
        format!("{base}/{webpath}")
    }
}

#[cfg(test)]
#[path = "download_tests.rs"]
mod tests;
