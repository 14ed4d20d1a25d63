//! Integration tests covering expressions, schedules, shorthand and
//! configuration together, plus RFC 5545 cross-checks.

mod helpers;
mod rfc5545;
mod scenarios;
mod schedule;
mod settings;
