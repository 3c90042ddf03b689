//! Turns the date-like values found in item feeds into UTC instants.
//!
//! Accepted shapes, checked in this order:
//!
//! 1. absent sentinels (`null`, `0`, `"0"`, empty) → `None`
//! 2. an already-resolved [`DateValue::Instant`] → itself
//! 3. a number, or a string of ASCII digits → epoch count (see
//!    [`EPOCH_SECONDS_CUTOFF`])
//! 4. `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY.MM.DD`, `YYYY-MM` (first of the
//!    month), plus ISO 8601 / RFC 3339 date-times
//! 5. a single-element array wrapping one of the above
//!
//! Anything else is `None`. Nothing in this module panics or returns an
//! error. Civil dates and date-times without an offset are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde_json::Value;
use shared::models::DateValue;
use tracing::trace;

/// Epoch counts up to and including this magnitude are seconds; larger ones
/// are milliseconds. The boundary is a heuristic, not calendar math, and is
/// kept exactly as-is for compatibility with existing feeds.
pub const EPOCH_SECONDS_CUTOFF: f64 = 1e11;

const MILLIS_PER_DAY: i64 = 86_400_000;

const DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Normalize a feed date value. `None` means absent or unparseable.
pub fn normalize(input: &DateValue) -> Option<DateTime<Utc>> {
    let instant = match input {
        DateValue::Absent => return None,
        DateValue::Instant(dt) => Some(*dt),
        DateValue::Epoch(n) if *n == 0.0 => None,
        DateValue::Epoch(n) => from_epoch(*n),
        DateValue::Text(s) => normalize_text(s),
        DateValue::Other(value) => normalize_other(value),
    };
    if instant.is_none() {
        trace!(?input, "date value degraded to absent");
    }
    instant
}

/// Interpret an epoch count, choosing seconds or milliseconds by magnitude.
/// Fractional milliseconds are truncated.
pub fn from_epoch(n: f64) -> Option<DateTime<Utc>> {
    if !n.is_finite() {
        return None;
    }
    let millis = if n > EPOCH_SECONDS_CUTOFF { n } else { n * 1000.0 };
    // `as` saturates, and out-of-range millis come back as None
    DateTime::from_timestamp_millis(millis.trunc() as i64)
}

/// Whole days between two instants, rounded up. Negative spans round
/// toward zero, so anything under a day before `to` is `0`.
pub fn ceil_days(delta: TimeDelta) -> i64 {
    let millis = delta.num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

fn normalize_text(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "0" {
        return None;
    }

    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed.parse::<f64>().ok().and_then(from_epoch);
    }

    let dashed = trimmed.replace(['.', '/'], "-");
    let normalized = if dashed.split('-').count() == 2 {
        format!("{}-01", dashed)
    } else {
        dashed
    };

    parse_calendar_date(&normalized)
        .or_else(|| parse_datetime(&normalized))
        .or_else(|| parse_datetime(&format!("{}T00:00:00", normalized)))
}

fn normalize_other(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Array(values) if values.len() == 1 => normalize(&DateValue::from(values[0].clone())),
        _ => None,
    }
}

fn parse_calendar_date(s: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}
