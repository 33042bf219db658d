//! Calendar fixtures — panicking constructors for known-good test values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Builds a `NaiveDateTime` from literal components.
///
/// # Panics
///
/// Panics when the components do not form a valid calendar date and time.
#[must_use]
pub fn datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("fixture components must form a valid timestamp")
}

/// Builds a `NaiveTime` from literal components.
///
/// # Panics
///
/// Panics when the components do not form a valid time-of-day.
#[must_use]
pub fn time(hour: u32, minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, second)
        .expect("fixture components must form a valid time")
}
