//! Fixed working-calendar predicates.
//!
//! The calendar is Monday–Friday, 9:00–17:00, inclusive of both window
//! bounds. It is not configurable and knows nothing about public holidays:
//! any in-window weekday moment counts as working.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};

fn work_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("09:00:00 is a valid time")
}

fn work_end() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).expect("17:00:00 is a valid time")
}

/// Returns true for Saturday and Sunday.
#[must_use]
pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Returns true when `time` lies within [09:00:00, 17:00:00], inclusive of
/// both bounds.
#[must_use]
pub fn within_working_hours(time: NaiveTime) -> bool {
    time >= work_start() && time <= work_end()
}

/// Returns true when `at` falls on a weekday inside the working window.
#[must_use]
pub fn is_working_moment(at: NaiveDateTime) -> bool {
    !is_weekend(at.weekday()) && within_working_hours(at.time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use duedate_test_support::{datetime, time};

    #[test]
    fn test_saturday_and_sunday_are_weekend() {
        assert!(is_weekend(Weekday::Sat));
        assert!(is_weekend(Weekday::Sun));
    }

    #[test]
    fn test_monday_through_friday_are_not_weekend() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ] {
            assert!(!is_weekend(day));
        }
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        assert!(within_working_hours(time(9, 0, 0)));
        assert!(within_working_hours(time(17, 0, 0)));
    }

    #[test]
    fn test_moments_just_outside_the_window_are_excluded() {
        assert!(!within_working_hours(time(8, 59, 59)));
        assert!(!within_working_hours(time(17, 0, 1)));
    }

    #[test]
    fn test_working_moment_requires_both_weekday_and_window() {
        // Monday noon is working.
        assert!(is_working_moment(datetime(2020, 8, 3, 12, 0, 0)));
        // Monday night is not.
        assert!(!is_working_moment(datetime(2020, 8, 3, 22, 0, 0)));
        // Saturday noon is not.
        assert!(!is_working_moment(datetime(2020, 8, 1, 12, 0, 0)));
    }
}
