//! Temporal expressions over precision-tagged timestamps.
//!
//! ## Summary
//! [`Timestamp`] and [`DateRange`] describe points and spans of time at an
//! explicit [`Precision`]. [`Expression`] trees combine calendar rules and
//! answer whether a point matches, or which points of a range match.

pub mod error;
pub mod expr;
pub mod point;
pub mod range;
pub mod timestamp;

pub use almanac_core::Precision;
pub use error::{TemporalError, TemporalResult};
pub use expr::{Collection, Expression, Occurrences, Predicate};
pub use point::Point;
pub use range::{DateRange, Steps};
pub use timestamp::Timestamp;
