//! The due date calculator.

use chrono::{Datelike, Duration, NaiveDateTime};
use tracing::debug;

use crate::calendar;
use crate::error::InvalidArgument;
use crate::turnaround::TurnaroundHours;

/// Computes due dates against the fixed working calendar.
///
/// Stateless; a single instance may be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DueDateCalculator;

impl DueDateCalculator {
    /// Creates a new calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes the due date for `submission` after `turnaround` working
    /// hours have elapsed.
    ///
    /// Preconditions are checked in a fixed order before any computation:
    /// presence, weekday, working-hours window, then turnaround positivity.
    /// The first failing check wins.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] when the submission is absent, falls on a
    /// weekend, lies outside the 9:00–17:00 window, or the turnaround is not
    /// positive.
    #[allow(clippy::unused_self)]
    pub fn calculate_due_date(
        &self,
        submission: Option<NaiveDateTime>,
        turnaround: TurnaroundHours,
    ) -> Result<NaiveDateTime, InvalidArgument> {
        let submission = validate_submission(submission)?;
        validate_turnaround(turnaround)?;

        let due = add_working_hours(submission, turnaround);
        debug!(%submission, %turnaround, %due, "due date computed");
        Ok(due)
    }
}

fn validate_submission(
    submission: Option<NaiveDateTime>,
) -> Result<NaiveDateTime, InvalidArgument> {
    let submission = submission.ok_or(InvalidArgument::MissingSubmission)?;
    if calendar::is_weekend(submission.weekday()) {
        return Err(InvalidArgument::WeekendSubmission);
    }
    if !calendar::within_working_hours(submission.time()) {
        return Err(InvalidArgument::OutsideWorkingHours);
    }
    Ok(submission)
}

fn validate_turnaround(turnaround: TurnaroundHours) -> Result<(), InvalidArgument> {
    if turnaround.is_positive() {
        Ok(())
    } else {
        Err(InvalidArgument::NonPositiveTurnaround)
    }
}

/// Steps the cursor one hour at a time, counting only working moments.
///
/// Deliberately literal: nights and weekends are crossed hour-by-hour rather
/// than skipped in bulk, so a step landing exactly on the inclusive 17:00
/// bound is counted exactly as the window predicate sees it.
fn add_working_hours(submission: NaiveDateTime, turnaround: TurnaroundHours) -> NaiveDateTime {
    let mut cursor = submission;
    let mut counted = 0_i64;
    while counted < turnaround.get() {
        cursor += Duration::hours(1);
        if calendar::is_working_moment(cursor) {
            counted += 1;
        }
    }
    cursor
}
