//! Formatting utilities for CLI outputs.

use chrono::{DateTime, Local, Utc};

/// Aggregate values are always shown with two decimals, exactly as returned.
pub fn stat(value: f64) -> String {
    format!("{:.2}", value)
}

/// Display an upload timestamp in local time.
pub fn timestamp(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Percentage of `part` over `total`, one decimal. Zero totals yield 0.0%.
pub fn percent(part: i64, total: i64) -> String {
    if total <= 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}
