//! Due Date Engine — working-hours calculation domain.
//!
//! This crate computes the due date for a submission given a turnaround
//! expressed in working hours, against a fixed Monday–Friday, 9:00–17:00
//! working calendar. It is a pure calculation library: no persistence, no
//! I/O, no infrastructure code.

pub mod calculator;
pub mod calendar;
pub mod error;
pub mod turnaround;

pub use calculator::DueDateCalculator;
pub use error::InvalidArgument;
pub use turnaround::TurnaroundHours;
