//! Event registry.
//!
//! ## Summary
//! A [`Schedule`] binds each event to one [`Expression`]. It answers which
//! events fall on a timestamp and when an event occurs inside a range.
//!
//! The registry holds no lock. Share it across threads behind your own
//! `RwLock` if it is mutated while being queried.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use almanac_core::Precision;
use almanac_core::config::Settings;
use almanac_temporal::{DateRange, Expression, Timestamp};
use chrono::NaiveDateTime;

use crate::event::Event;

/// Maps events to the expressions describing when they occur.
#[derive(Debug, Clone)]
pub struct Schedule<E = Event> {
    events: HashMap<E, Expression>,
    occurrence_limit: usize,
    default_precision: Precision,
}

impl<E> Default for Schedule<E> {
    fn default() -> Self {
        Self {
            events: HashMap::new(),
            occurrence_limit: 0,
            default_precision: Precision::DEFAULT,
        }
    }
}

impl<E: Eq + Hash + Debug> Schedule<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Builds an empty schedule using the configured occurrence limit and
    /// default precision.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            events: HashMap::new(),
            occurrence_limit: settings.schedule.occurrence_limit,
            default_precision: settings.defaults.precision,
        }
    }

    /// Caps how many occurrences are enumerated per event; `0` removes the cap.
    #[must_use]
    pub fn with_occurrence_limit(mut self, limit: usize) -> Self {
        self.occurrence_limit = limit;
        self
    }

    #[must_use]
    pub const fn occurrence_limit(&self) -> usize {
        self.occurrence_limit
    }

    /// Converts a bare date-time at this schedule's default precision.
    #[must_use]
    pub fn timestamp(&self, datetime: NaiveDateTime) -> Timestamp {
        Timestamp::at(datetime, self.default_precision)
    }

    /// ## Summary
    /// Associates `expression` with `event`, returning the expression it
    /// replaces, if any.
    pub fn add(&mut self, event: E, expression: Expression) -> Option<Expression> {
        tracing::debug!(event = ?event, kind = expression.kind(), "Scheduling event");
        let previous = self.events.insert(event, expression);
        if previous.is_some() {
            tracing::debug!("Replaced existing expression");
        }
        previous
    }

    /// Removes `event`, returning its expression.
    pub fn remove<Q>(&mut self, event: &Q) -> Option<Expression>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        tracing::debug!(event = ?event, "Removing event");
        self.events.remove(event)
    }

    #[must_use]
    pub fn expression<Q>(&self, event: &Q) -> Option<&Expression>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.events.get(event)
    }

    /// Returns `true` if `event` is scheduled and its expression includes `at`.
    #[must_use]
    pub fn includes<Q>(&self, event: &Q, at: &Timestamp) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.events
            .get(event)
            .is_some_and(|expression| expression.includes(at))
    }

    /// Every event whose expression includes `at`, in no particular order.
    #[must_use]
    pub fn events(&self, at: &Timestamp) -> Vec<&E> {
        self.events
            .iter()
            .filter(|(_, expression)| expression.includes(at))
            .map(|(event, _)| event)
            .collect()
    }

    /// ## Summary
    /// Lazily enumerates the points of `range` on which `event` occurs.
    ///
    /// Unknown events yield nothing. The schedule's occurrence limit applies.
    pub fn dates<'a, Q>(
        &'a self,
        event: &Q,
        range: &DateRange,
    ) -> impl Iterator<Item = Timestamp> + use<'a, E, Q>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let range = *range;
        let limit = self.occurrence_limit;
        self.events
            .get(event)
            .into_iter()
            .flat_map(move |expression| expression.dates(&range, limit))
    }

    /// ## Summary
    /// Every point of `range` on which any event occurs, sorted and without
    /// duplicates.
    #[must_use]
    pub fn scheduled_dates(&self, range: &DateRange) -> Vec<Timestamp> {
        let mut dates: Vec<Timestamp> = self
            .events
            .values()
            .flat_map(|expression| expression.dates(range, self.occurrence_limit))
            .collect();
        dates.sort_by(|a, b| {
            a.datetime()
                .cmp(&b.datetime())
                .then(a.precision().cmp(&b.precision()))
        });
        dates.dedup();
        tracing::debug!(range = %range, count = dates.len(), "Collected scheduled dates");
        dates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
