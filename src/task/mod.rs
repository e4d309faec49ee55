//! Task management module
//!
//! This module provides the three task variants behind a tagged enum:
//! - Todo: description only
//! - Deadline: due date-time
//! - Event: date plus a start-end time range
//!
//! Dates are carried as typed chrono fields; rendering and parsing never
//! round-trip through display strings.

pub mod codec;
pub mod model;

pub use codec::TaskParseError;
pub use model::{parse_deadline_date, parse_event_schedule, DateInputError, Task, TaskKind};
