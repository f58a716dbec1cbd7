//! Epoch arithmetic shared by the temporal coercions.
//!
//! Dates are stored as days since 1970-01-01, times as nanoseconds since
//! midnight, durations and datetimes as a count of [`TimeUnit`]s. These helpers
//! convert between those physical forms and chrono's calendar types. Every
//! conversion that can leave the representable range returns `None`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::types::TimeUnit;

/// `NaiveDate::num_days_from_ce` of 1970-01-01
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Nanoseconds in one day; valid times lie in `0..NANOS_PER_DAY`
pub const NANOS_PER_DAY: i64 = 86_400_000_000_000;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

pub fn date_from_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(EPOCH_DAYS_FROM_CE)?)
}

pub fn days_from_date(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - EPOCH_DAYS_FROM_CE
}

/// Day index for an arbitrary `i64`, rejecting anything outside `i32`
pub fn days_from_i64(days: i64) -> Option<i32> {
    i32::try_from(days).ok()
}

pub fn time_from_nanos(nanos: i64) -> Option<NaiveTime> {
    if !(0..NANOS_PER_DAY).contains(&nanos) {
        return None;
    }
    let secs = (nanos / NANOS_PER_SECOND) as u32;
    let frac = (nanos % NANOS_PER_SECOND) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, frac)
}

pub fn nanos_from_time(time: NaiveTime) -> i64 {
    // Leap-second representations (nanosecond >= 1e9) fold into the last second.
    let frac = i64::from(time.nanosecond().min(999_999_999));
    i64::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND + frac
}

/// Nanoseconds since midnight, if `nanos` is a valid time of day
pub fn checked_time_of_day(nanos: i64) -> Option<i64> {
    (0..NANOS_PER_DAY).contains(&nanos).then_some(nanos)
}

/// Calendar day a timestamp falls on (floor division, so pre-epoch
/// timestamps land on the preceding day)
pub fn datetime_to_days(value: i64, unit: TimeUnit) -> Option<i32> {
    days_from_i64(value.div_euclid(unit.per_day()))
}

/// Nanoseconds since midnight of a timestamp
pub fn datetime_to_time_of_day(value: i64, unit: TimeUnit) -> i64 {
    value.rem_euclid(unit.per_day()) * unit.nanos_per_unit()
}

/// Timestamp of midnight on the given day
pub fn days_to_datetime(days: i32, unit: TimeUnit) -> Option<i64> {
    i64::from(days).checked_mul(unit.per_day())
}

pub fn naive_datetime_from_timestamp(value: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let secs = value.div_euclid(unit.per_second());
    let nanos = value.rem_euclid(unit.per_second()) * unit.nanos_per_unit();
    DateTime::from_timestamp(secs, nanos as u32).map(|dt| dt.naive_utc())
}

pub fn timestamp_from_naive_datetime(dt: NaiveDateTime, unit: TimeUnit) -> Option<i64> {
    let utc = dt.and_utc();
    match unit {
        TimeUnit::Milliseconds => Some(utc.timestamp_millis()),
        TimeUnit::Microseconds => Some(utc.timestamp_micros()),
        TimeUnit::Nanoseconds => utc.timestamp_nanos_opt(),
    }
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`) into a day index
pub fn parse_date(text: &str) -> Option<i32> {
    text.parse::<NaiveDate>().ok().map(days_from_date)
}

/// Parse `HH:MM:SS` with an optional fractional second into nanoseconds
pub fn parse_time(text: &str) -> Option<i64> {
    NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
        .ok()
        .map(nanos_from_time)
}

/// Parse `YYYY-MM-DD HH:MM:SS[.f]` (space or `T` separated) or a bare date
pub fn parse_datetime(text: &str, unit: TimeUnit) -> Option<i64> {
    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            text.parse::<NaiveDate>()
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })?;
    timestamp_from_naive_datetime(parsed, unit)
}
