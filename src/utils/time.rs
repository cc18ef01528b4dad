//! Timestamp helpers shared by the activity and cost reports

use chrono::{DateTime, TimeZone, Utc};

/// Convert an epoch-milliseconds value (the session listing's `updatedAt`
/// encoding) into a UTC timestamp. Out-of-range values map to the epoch.
pub fn from_epoch_millis(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Humanize the distance between two instants the way the dashboard
/// renders it: "just now", "5m ago", "3h ago", "2d ago".
///
/// Deltas under a minute (including clock skew into the future) read
/// "just now".
pub fn time_ago(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3_600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3_600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}

/// Calendar-day bucket key (`YYYY-MM-DD`, UTC) used by the daily cost trend.
pub fn day_key(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}
