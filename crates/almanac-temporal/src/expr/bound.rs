//! Open-ended rules bounded by a single timestamp.

use std::cmp::Ordering;

use super::Predicate;
use crate::range::DateRange;
use crate::timestamp::Timestamp;

fn within(ordering: Ordering, wanted: Ordering, inclusive: bool) -> bool {
    ordering == wanted || (inclusive && ordering == Ordering::Equal)
}

/// Matches points before the anchor, optionally including the anchor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Before {
    anchor: Timestamp,
    inclusive: bool,
}

impl Before {
    #[must_use]
    pub const fn new(anchor: Timestamp) -> Self {
        Self {
            anchor,
            inclusive: false,
        }
    }

    #[must_use]
    pub const fn inclusive(anchor: Timestamp) -> Self {
        Self {
            anchor,
            inclusive: true,
        }
    }

    /// A span is before the anchor when its end is.
    pub(crate) fn includes_span(&self, span: &DateRange) -> bool {
        self.includes(&span.end())
    }
}

impl Predicate for Before {
    fn includes(&self, at: &Timestamp) -> bool {
        within(at.compare(&self.anchor), Ordering::Less, self.inclusive)
    }
}

/// Matches points after the anchor, optionally including the anchor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct After {
    anchor: Timestamp,
    inclusive: bool,
}

impl After {
    #[must_use]
    pub const fn new(anchor: Timestamp) -> Self {
        Self {
            anchor,
            inclusive: false,
        }
    }

    #[must_use]
    pub const fn inclusive(anchor: Timestamp) -> Self {
        Self {
            anchor,
            inclusive: true,
        }
    }

    /// A span is after the anchor when its start is.
    pub(crate) fn includes_span(&self, span: &DateRange) -> bool {
        self.includes(&span.start())
    }
}

impl Predicate for After {
    fn includes(&self, at: &Timestamp) -> bool {
        within(at.compare(&self.anchor), Ordering::Greater, self.inclusive)
    }
}
