//! Wall-clock helpers shared by all subsystems.

use chrono::Utc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Current Unix timestamp in seconds.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Today's date as `YYYY-MM-DD` (UTC).
pub fn today_ymd() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
