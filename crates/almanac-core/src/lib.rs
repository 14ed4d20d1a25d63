//! Shared foundations for the almanac workspace: precision levels, calendar
//! constants, the core error type, configuration and tracing setup.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod precision;

pub use constants::Weekday;
pub use error::{CoreError, CoreResult};
pub use precision::Precision;
