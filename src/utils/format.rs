//! Formatting utilities for human-readable output
//!
//! Pure presentation helpers for catalog fields. No I/O and no locale
//! negotiation; callers that need localized output wrap these.

use chrono::{DateTime, Utc};

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with binary units and one decimal place
/// (e.g. "1.5 KB", "512.0 B"). Zero formats as "0 B"; sizes past the
/// gigabyte range stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut exponent = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && exponent < UNITS.len() - 1 {
        scaled /= 1024;
        exponent += 1;
    }

    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    format!("{:.1} {}", value, UNITS[exponent])
}

/// Format a catalog timestamp as a short human date (e.g. "Jan 21, 2026")
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Map a wire channel string to its display label. Known channels have
/// fixed labels; anything else is shown with its first letter capitalized.
pub fn channel_display_name(channel: &str) -> String {
    match channel {
        "release" => "Official".to_string(),
        "beta" | "beta-public" => "Beta".to_string(),
        "alpha" => "Alpha".to_string(),
        other => capitalize_first(other),
    }
}

/// Format a rollout probability as a whole percentage, clamped to 0..=100
pub fn format_probability(probability: f64) -> String {
    let percent = (probability * 100.0).clamp(0.0, 100.0);
    format!("{:.0}%", percent)
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
