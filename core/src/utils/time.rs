use chrono::{DateTime, SecondsFormat, Utc};

/// Number of 100 nanosecond intervals in one second
const FILETIME_TICKS_PER_SECOND: u64 = 10000000;
/// Seconds between 1601-01-01 and 1970-01-01
const FILETIME_TO_UNIX_SECONDS: i64 = 11644473600;

/// Convert a Windows `FILETIME` value to a UTC timestamp. Callers decide what a zero value means
pub(crate) fn filetime_to_datetime(filetime: u64) -> DateTime<Utc> {
    // u64::MAX / 10^7 fits in i64
    let seconds = (filetime / FILETIME_TICKS_PER_SECOND) as i64 - FILETIME_TO_UNIX_SECONDS;
    let nanos = ((filetime % FILETIME_TICKS_PER_SECOND) * 100) as u32;

    DateTime::from_timestamp(seconds, nanos).unwrap_or_default()
}

/// Render a timestamp as ISO8601 with millisecond precision
pub(crate) fn datetime_to_iso(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
