//! Unix-timestamp conversions.
//!
//! The `beatdowns` table stores Slack message timestamps as strings of Unix
//! seconds; everything here converts between those and UTC datetimes.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};

/// Parse a stored Unix timestamp into a UTC datetime.
///
/// Accepts fractional seconds (Slack timestamps carry them). Returns `None`
/// for malformed or out-of-range input rather than failing the caller.
pub fn from_unix_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let seconds = raw.trim().parse::<f64>().ok()?;
    if !seconds.is_finite() {
        return None;
    }

    let whole = seconds.trunc() as i64;
    let nanos = (seconds.fract().abs() * 1e9) as u32;
    DateTime::from_timestamp(whole, nanos)
}

/// Unix seconds for a UTC datetime, as stored in the database.
pub fn to_unix_timestamp(moment: DateTime<Utc>) -> i64 {
    moment.timestamp()
}

/// Monday-to-Monday bounds of the week containing the given moment:
/// Monday 00:00 UTC inclusive through the following Monday 00:00 exclusive.
pub fn week_bounds(date_in_week: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let days_since_monday = i64::from(date_in_week.weekday().num_days_from_monday());
    let monday = date_in_week.date_naive() - Duration::days(days_since_monday);
    let week_start = monday.and_time(NaiveTime::MIN).and_utc();
    let week_end = week_start + Duration::days(7);
    (week_start, week_end)
}
