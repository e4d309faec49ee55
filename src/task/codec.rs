//! Tasks file line codec
//!
//! One record per line, `|`-delimited:
//! - `T|{0|1}|{description}`
//! - `D|{0|1}|{description}|{Y-m-d H:M:S}`
//! - `E|{0|1}|{description}|{Y-m-d}|{H:M:S}|{H:M:S}`
//!
//! Descriptions must not contain `|`; the session layer rejects them at
//! input time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use super::model::{
    Task, TaskKind, DEADLINE_DATE_FORMAT, EVENT_DATE_FORMAT, EVENT_TIME_FORMAT,
};

#[derive(Debug, Error)]
pub enum TaskParseError {
    #[error("unrecognized task record: {0}")]
    Malformed(String),

    #[error("unrecognized task type tag '{tag}' in record: {line}")]
    UnknownTag { tag: String, line: String },

    #[error("invalid done flag in task record: {0}")]
    BadDoneFlag(String),

    #[error("invalid date in task record: {0}")]
    BadDate(String),
}

/// Format one task as a file line
pub fn format_line(task: &Task) -> String {
    let done = if task.done { '1' } else { '0' };
    match &task.kind {
        TaskKind::Todo => format!("T|{}|{}", done, task.description),
        TaskKind::Deadline { by } => format!(
            "D|{}|{}|{}",
            done,
            task.description,
            by.format(DEADLINE_DATE_FORMAT)
        ),
        TaskKind::Event { date, start, end } => format!(
            "E|{}|{}|{}|{}|{}",
            done,
            task.description,
            date.format(EVENT_DATE_FORMAT),
            start.format(EVENT_TIME_FORMAT),
            end.format(EVENT_TIME_FORMAT)
        ),
    }
}

/// Parse one file line into a task
pub fn parse_line(line: &str) -> Result<Task, TaskParseError> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 3 {
        return Err(TaskParseError::Malformed(line.to_string()));
    }

    let done = match fields[1] {
        "0" => false,
        "1" => true,
        _ => return Err(TaskParseError::BadDoneFlag(line.to_string())),
    };
    let description = fields[2].to_string();

    let kind = match fields[0] {
        "T" => {
            if fields.len() != 3 {
                return Err(TaskParseError::Malformed(line.to_string()));
            }
            TaskKind::Todo
        }
        "D" => {
            if fields.len() != 4 {
                return Err(TaskParseError::Malformed(line.to_string()));
            }
            let by = NaiveDateTime::parse_from_str(fields[3], DEADLINE_DATE_FORMAT)
                .map_err(|_| TaskParseError::BadDate(line.to_string()))?;
            TaskKind::Deadline { by }
        }
        "E" => {
            if fields.len() != 6 {
                return Err(TaskParseError::Malformed(line.to_string()));
            }
            let date = NaiveDate::parse_from_str(fields[3], EVENT_DATE_FORMAT)
                .map_err(|_| TaskParseError::BadDate(line.to_string()))?;
            let start = NaiveTime::parse_from_str(fields[4], EVENT_TIME_FORMAT)
                .map_err(|_| TaskParseError::BadDate(line.to_string()))?;
            let end = NaiveTime::parse_from_str(fields[5], EVENT_TIME_FORMAT)
                .map_err(|_| TaskParseError::BadDate(line.to_string()))?;
            TaskKind::Event { date, start, end }
        }
        tag => {
            return Err(TaskParseError::UnknownTag {
                tag: tag.to_string(),
                line: line.to_string(),
            })
        }
    };

    Ok(Task {
        description,
        done,
        kind,
    })
}

/// Parse a whole tasks file, skipping blank lines
pub fn parse_lines(lines: &[String]) -> Result<Vec<Task>, TaskParseError> {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_line(line))
        .collect()
}

/// Serialize a task list to file lines, preserving list order
pub fn to_lines(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(format_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::model::{parse_deadline_date, parse_event_schedule};

    #[test]
    fn test_format_todo_line() {
        let mut task = Task::todo("read book");
        assert_eq!(format_line(&task), "T|0|read book");
        task.done = true;
        assert_eq!(format_line(&task), "T|1|read book");
    }

    #[test]
    fn test_format_deadline_line() {
        let by = parse_deadline_date("2019-10-21 23:59:59").unwrap();
        let task = Task::deadline("return book", by);
        assert_eq!(format_line(&task), "D|0|return book|2019-10-21 23:59:59");
    }

    #[test]
    fn test_format_event_line() {
        let (date, start, end) = parse_event_schedule("2019-10-21 14:00:00-16:00:00").unwrap();
        let task = Task::event("meeting", date, start, end);
        assert_eq!(
            format_line(&task),
            "E|0|meeting|2019-10-21|14:00:00|16:00:00"
        );
    }

    #[test]
    fn test_parse_line_roundtrip() {
        let by = parse_deadline_date("2019-10-21 23:59:59").unwrap();
        let (date, start, end) = parse_event_schedule("2019-10-21 14:00:00-16:00:00").unwrap();
        let tasks = vec![
            Task::todo("read book"),
            Task::deadline("return book", by),
            Task::event("meeting", date, start, end),
        ];

        let lines = to_lines(&tasks);
        let parsed = parse_lines(&lines).unwrap();
        assert_eq!(parsed, tasks);
    }

    #[test]
    fn test_parse_lines_skips_blank_lines() {
        let lines = vec![
            "T|0|read book".to_string(),
            String::new(),
            "   ".to_string(),
            "T|1|sell book".to_string(),
        ];
        let parsed = parse_lines(&lines).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_line_rejects_unknown_tag() {
        let err = parse_line("Z|0|mystery").unwrap_err();
        assert!(matches!(err, TaskParseError::UnknownTag { .. }));
        assert!(err.to_string().contains("Z"));
    }

    #[test]
    fn test_parse_line_rejects_bad_done_flag() {
        let err = parse_line("T|yes|read book").unwrap_err();
        assert!(matches!(err, TaskParseError::BadDoneFlag(_)));
    }

    #[test]
    fn test_parse_line_rejects_bad_date() {
        let err = parse_line("D|0|return book|not a date").unwrap_err();
        assert!(matches!(err, TaskParseError::BadDate(_)));
        assert!(err.to_string().contains("return book"));
    }

    #[test]
    fn test_parse_line_rejects_wrong_field_count() {
        assert!(parse_line("T|0").is_err());
        assert!(parse_line("D|0|missing date").is_err());
        assert!(parse_line("E|0|event|2019-10-21|14:00:00").is_err());
    }
}
