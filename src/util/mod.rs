//
//  antarctica-cli
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Formatting helpers for CLI output.
//!
//! ```rust
//! use antarctica_cli::util::{format_size, truncate};
//!
//! assert_eq!(format_size(1536), "1.5 KB");
//! assert_eq!(truncate("https://example.org/very/long", 12), "https://e...");
//! ```

use chrono::{DateTime, Local, Utc};

/// Formats a timestamp in the local timezone as `YYYY-MM-DD HH:MM:SS`.
///
/// The Unix epoch, which stands in for a missing timestamp, prints as `-`.
pub fn format_time(time: &DateTime<Utc>) -> String {
    if *time == DateTime::UNIX_EPOCH {
        return "-".to_string();
    }
    let local: DateTime<Local> = (*time).into();
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Formats a byte count with binary units.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Shortens `s` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string", 8), "a lon...");
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("ééééé", 4), "é...");
    }

    #[test]
    fn test_epoch_prints_as_dash() {
        assert_eq!(format_time(&DateTime::UNIX_EPOCH), "-");
        assert_ne!(format_time(&Utc::now()), "-");
    }
}
