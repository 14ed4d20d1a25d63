use crate::range::DateRange;
use crate::timestamp::Timestamp;

/// Something an expression can be asked about: a single timestamp or a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Point {
    Instant(Timestamp),
    Span(DateRange),
}

impl From<Timestamp> for Point {
    fn from(at: Timestamp) -> Self {
        Self::Instant(at)
    }
}

impl From<DateRange> for Point {
    fn from(range: DateRange) -> Self {
        Self::Span(range)
    }
}
