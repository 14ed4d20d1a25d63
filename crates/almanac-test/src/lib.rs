//! Integration test support for the almanac workspace.
//!
//! Holds the harness that checks expressions against RFC 5545 recurrence
//! rules expanded by the `rrule` crate.

pub mod recurrence;

pub use recurrence::{RecurrenceCase, assert_case};
