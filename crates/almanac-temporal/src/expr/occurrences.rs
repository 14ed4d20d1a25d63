use std::iter::FusedIterator;

use super::Expression;
use crate::range::Steps;
use crate::timestamp::Timestamp;

/// ## Summary
/// Lazy iterator over the points of a range that an expression includes.
///
/// Candidates are produced by stepping the range at its start's precision.
/// Cloning yields an independent iterator from the same position.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    expression: &'a Expression,
    steps: Steps,
    remaining: Option<usize>,
}

impl<'a> Occurrences<'a> {
    pub(crate) fn new(expression: &'a Expression, steps: Steps, limit: usize) -> Self {
        Self {
            expression,
            steps,
            remaining: (limit > 0).then_some(limit),
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Timestamp;

    fn next(&mut self) -> Option<Timestamp> {
        if self.remaining == Some(0) {
            return None;
        }
        let expression = self.expression;
        let found = self.steps.find(|candidate| expression.includes(candidate))?;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        tracing::trace!(at = %found, kind = expression.kind(), "Occurrence found");
        Some(found)
    }
}

impl FusedIterator for Occurrences<'_> {}
