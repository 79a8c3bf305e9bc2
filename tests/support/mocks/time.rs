// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic "now" for every test double.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// `fixed_now` shifted back by `minutes`, for seeding older rows.
pub fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    *FIXED_NOW - Duration::minutes(minutes)
}
