//! Convenience layer over the expression algebra: a fluent builder and
//! shorthand names such as `last_friday` or `daily_8_45am_to_2_00pm`.

pub mod builder;
pub mod error;
mod names;
pub mod shorthand;

use almanac_temporal::{Expression, Timestamp};

pub use builder::ExpressionBuilder;
pub use error::{SugarError, SugarResult};

/// Points after `anchor`, or on it when `inclusive`.
#[must_use]
pub const fn after(anchor: Timestamp, inclusive: bool) -> Expression {
    Expression::after(anchor, inclusive)
}

/// Points before `anchor`, or on it when `inclusive`.
#[must_use]
pub const fn before(anchor: Timestamp, inclusive: bool) -> Expression {
    Expression::before(anchor, inclusive)
}
