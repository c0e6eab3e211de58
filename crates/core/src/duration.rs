// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human duration strings: `90`, `90s`, `5m`, `1h`, `1h30m`.

use std::time::Duration;

use crate::error::ConfigError;

/// Parse a duration string. A bare number is seconds.
pub fn parse_duration(s: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidDuration { value: s.to_string() };
    let s = s.trim();
    if s.is_empty() {
        return Err(invalid());
    }

    let mut total_secs: u64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
            continue;
        }
        let n: u64 = current_num.parse().map_err(|_| invalid())?;
        current_num.clear();
        let unit = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(invalid()),
        };
        total_secs = n
            .checked_mul(unit)
            .and_then(|secs| total_secs.checked_add(secs))
            .ok_or_else(invalid)?;
    }
    // Bare number → seconds
    if !current_num.is_empty() {
        let n: u64 = current_num.parse().map_err(|_| invalid())?;
        total_secs = total_secs.checked_add(n).ok_or_else(invalid)?;
    }
    Ok(Duration::from_secs(total_secs))
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
