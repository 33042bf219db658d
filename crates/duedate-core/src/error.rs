//! Domain error types.

use thiserror::Error;

/// Invalid-argument error raised by due date calculation.
///
/// One error kind with four distinguishable causes, all surfaced before any
/// computation begins. There is no recovery path; the caller must not have
/// called with invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// No submission timestamp was supplied.
    #[error("submission date can not be null")]
    MissingSubmission,

    /// The submission falls on a Saturday or Sunday.
    #[error("submission date must fall on the weekdays")]
    WeekendSubmission,

    /// The submission time-of-day lies outside the working window.
    #[error("submission hour must be between 9 AM and 5 PM")]
    OutsideWorkingHours,

    /// The requested turnaround is zero or negative.
    #[error("turnaround time must be greater than 0")]
    NonPositiveTurnaround,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(
            InvalidArgument::MissingSubmission.to_string(),
            "submission date can not be null"
        );
        assert_eq!(
            InvalidArgument::WeekendSubmission.to_string(),
            "submission date must fall on the weekdays"
        );
        assert_eq!(
            InvalidArgument::OutsideWorkingHours.to_string(),
            "submission hour must be between 9 AM and 5 PM"
        );
        assert_eq!(
            InvalidArgument::NonPositiveTurnaround.to_string(),
            "turnaround time must be greater than 0"
        );
    }
}
