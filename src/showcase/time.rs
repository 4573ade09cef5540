use chrono::{DateTime, Utc};

/// "today", "yesterday", "N days ago", ... from whole days elapsed.
///
/// Timestamps in the future count as today.
pub fn format_relative(time: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let days = now.signed_duration_since(*time).num_days().max(0);
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => format!("{} weeks ago", days / 7),
        30..=364 => format!("{} months ago", days / 30),
        _ => format!("{} years ago", days / 365),
    }
}
