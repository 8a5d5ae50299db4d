//! Timestamp helpers. All timestamps in Hiroba are Unix milliseconds in JST.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    let jst_offset = FixedOffset::east_opt(9 * 3600).unwrap(); // JST is UTC+9
    let now_utc = Utc::now();
    let now_jst: DateTime<FixedOffset> = now_utc.with_timezone(&jst_offset);
    now_jst.timestamp_millis()
}

/// Convert a JST millisecond timestamp into an RFC 3339 string
pub fn timestamp_to_jst_rfc3339(timestamp_millis: i64) -> String {
    let jst_offset = FixedOffset::east_opt(9 * 3600).unwrap();
    match jst_offset.timestamp_millis_opt(timestamp_millis) {
        chrono::LocalResult::Single(dt) => dt.to_rfc3339(),
        _ => String::from("invalid-timestamp"),
    }
}
