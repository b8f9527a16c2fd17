//! Domain models for the weather window scheduler.
//!
//! Raw forecast observations and hourly aggregates live in [`forecast`];
//! operational tasks and their analysis constraints live in [`task`].

pub mod forecast;
pub mod task;

pub use forecast::{floor_hour, format_utc, GeoLocation, HourlyPoint, LocationParseError, Sample};
pub use task::{parse_hours, ConstraintError, Task, TaskConstraint, TaskStatus};
