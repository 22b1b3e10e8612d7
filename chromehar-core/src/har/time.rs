use chrono::{DateTime, TimeZone, Utc};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Converts fractional seconds since the UNIX epoch into a timestamp.
pub fn wall_time_to_datetime(seconds: f64) -> DateTime<Utc> {
    Utc.timestamp_nanos((seconds * NANOS_PER_SECOND) as i64)
}

/// Milliseconds between two monotonic timestamps given in seconds.
pub fn elapsed_ms(start: f64, end: f64) -> f64 {
    (end - start) * 1000.0
}
