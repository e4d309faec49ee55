//! Task data model

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::DisplayConfig;

pub const DEADLINE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const EVENT_TIME_FORMAT: &str = "%H:%M:%S";

/// Rejected date/time input. The display text doubles as the format hint
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateInputError {
    #[error("Date Time has to be in YYYY-MM-DD HH:mm:ss format")]
    Deadline,
    #[error("Date Time has to be in YYYY-MM-DD HH:mm:ss-HH:mm:ss format")]
    Event,
}

/// Task variant discriminator with the variant-specific date fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    Todo,
    Deadline {
        by: NaiveDateTime,
    },
    Event {
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    },
}

/// A task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task description
    pub description: String,

    /// Completion flag
    pub done: bool,

    /// Variant and its date fields
    #[serde(flatten)]
    pub kind: TaskKind,
}

impl Task {
    /// Create a new todo
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    /// Create a new deadline
    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { by },
        }
    }

    /// Create a new event
    pub fn event(
        description: impl Into<String>,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { date, start, end },
        }
    }

    /// Single-letter tag used in list output and the tasks file
    pub fn type_tag(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// Keyword search over the description
    pub fn matches(&self, keyword: &str) -> bool {
        self.description.contains(keyword)
    }

    /// Single-line list format, e.g. `[D][X] return book (by: 2019-10-21 23:59:59)`
    pub fn list_format(&self, display: &DisplayConfig) -> String {
        let marker = if self.done {
            &display.done_marker
        } else {
            &display.pending_marker
        };
        let prefix = format!("[{}][{}] {}", self.type_tag(), marker, self.description);
        match &self.kind {
            TaskKind::Todo => prefix,
            TaskKind::Deadline { by } => {
                format!("{} (by: {})", prefix, by.format(DEADLINE_DATE_FORMAT))
            }
            TaskKind::Event { date, start, end } => format!(
                "{} (at: {} {}-{})",
                prefix,
                date.format(EVENT_DATE_FORMAT),
                start.format(EVENT_TIME_FORMAT),
                end.format(EVENT_TIME_FORMAT)
            ),
        }
    }
}

/// Parse a deadline date, e.g. `2019-10-21 23:59:59`
pub fn parse_deadline_date(input: &str) -> Result<NaiveDateTime, DateInputError> {
    NaiveDateTime::parse_from_str(input.trim(), DEADLINE_DATE_FORMAT)
        .map_err(|_| DateInputError::Deadline)
}

/// Parse an event schedule, e.g. `2019-10-21 14:00:00-16:00:00`
pub fn parse_event_schedule(
    input: &str,
) -> Result<(NaiveDate, NaiveTime, NaiveTime), DateInputError> {
    let re = Regex::new(r"^(\d{4}-\d{2}-\d{2}) (\d{2}:\d{2}:\d{2})-(\d{2}:\d{2}:\d{2})$").unwrap();
    let caps = re.captures(input.trim()).ok_or(DateInputError::Event)?;

    let date =
        NaiveDate::parse_from_str(&caps[1], EVENT_DATE_FORMAT).map_err(|_| DateInputError::Event)?;
    let start = NaiveTime::parse_from_str(&caps[2], EVENT_TIME_FORMAT)
        .map_err(|_| DateInputError::Event)?;
    let end =
        NaiveTime::parse_from_str(&caps[3], EVENT_TIME_FORMAT).map_err(|_| DateInputError::Event)?;

    Ok((date, start, end))
}
