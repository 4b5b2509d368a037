//! Time utilities: parsing event time tokens, minute arithmetic, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime, NaiveTime};

const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%H.%M"];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

/// Absolute distance between two times of day, ignoring the date
pub fn minutes_apart(a: NaiveTime, b: NaiveTime) -> i64 {
    (a - b).num_minutes().abs()
}

/// `base + minutes`, reporting overflow instead of panicking
pub fn add_minutes(base: NaiveDateTime, minutes: i64) -> AppResult<NaiveDateTime> {
    add_seconds(base, minutes.saturating_mul(60))
}

pub fn add_seconds(base: NaiveDateTime, seconds: i64) -> AppResult<NaiveDateTime> {
    Duration::try_seconds(seconds)
        .and_then(|d| base.checked_add_signed(d))
        .ok_or_else(|| AppError::Computation(format!("date overflow adding {seconds}s to {base}")))
}
