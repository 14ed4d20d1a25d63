//! Fluent construction of expression trees.

use almanac_temporal::Expression;

use crate::error::{SugarError, SugarResult};

/// ## Summary
/// Folds expressions together left to right.
///
/// The first expression added becomes the starting point whatever method
/// adds it. Each later call combines the running expression with the new
/// one: `on`, `every` and `occurs` intersect, `possibly` and `maybe` unite,
/// and `except` subtracts.
///
/// ```
/// use almanac_sugar::{ExpressionBuilder, shorthand};
///
/// # fn main() -> Result<(), almanac_sugar::SugarError> {
/// let expr = ExpressionBuilder::new()
///     .occurs(shorthand::parse("daily_8_30am_to_9_45am")?)
///     .on(shorthand::parse("tuesday")?)
///     .possibly(shorthand::parse("wednesday")?)
///     .build()?;
/// assert_eq!(expr.kind(), "union");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExpressionBuilder {
    current: Option<Expression>,
}

impl ExpressionBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    #[must_use]
    pub fn on(self, expression: Expression) -> Self {
        self.fold(expression, |current, next| current & next)
    }

    #[must_use]
    pub fn every(self, expression: Expression) -> Self {
        self.on(expression)
    }

    #[must_use]
    pub fn occurs(self, expression: Expression) -> Self {
        self.on(expression)
    }

    #[must_use]
    pub fn possibly(self, expression: Expression) -> Self {
        self.fold(expression, |current, next| current | next)
    }

    #[must_use]
    pub fn maybe(self, expression: Expression) -> Self {
        self.possibly(expression)
    }

    #[must_use]
    pub fn except(self, expression: Expression) -> Self {
        self.fold(expression, |current, next| current - next)
    }

    /// ## Errors
    /// Returns `EmptyBuilder` if no expression was added.
    pub fn build(self) -> SugarResult<Expression> {
        self.current.ok_or(SugarError::EmptyBuilder)
    }

    fn fold(self, expression: Expression, combine: fn(Expression, Expression) -> Expression) -> Self {
        let current = match self.current {
            Some(current) => combine(current, expression),
            None => expression,
        };
        Self {
            current: Some(current),
        }
    }
}
