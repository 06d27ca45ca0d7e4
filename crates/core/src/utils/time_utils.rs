use chrono::Utc;

/// Current instant as nanoseconds since the Unix epoch.
///
/// This is the single source of truth for creation timestamps. The wire
/// and storage encodings both use this unit. `timestamp_nanos_opt` only
/// fails past the year 2262; fall back to a millisecond-derived value
/// rather than panic.
pub fn now_nanos() -> i64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_millis().saturating_mul(1_000_000))
}
