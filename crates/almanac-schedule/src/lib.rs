//! Registry of named events and the temporal expressions that say when they happen.

pub mod event;
pub mod schedule;

pub use event::Event;
pub use schedule::Schedule;
