//! Upcoming-task view - a sorted, read-only projection of the task list
//!
//! Incomplete deadlines and events are collected off the typed `kind`
//! fields; the underlying list is never reordered.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::task::model::{DEADLINE_DATE_FORMAT, EVENT_DATE_FORMAT, EVENT_TIME_FORMAT};
use crate::task::{Task, TaskKind};

/// Render the two numbered sections. Empty sections print just the header.
pub fn render(tasks: &[Task]) -> String {
    let mut deadlines: Vec<(NaiveDateTime, &str)> = Vec::new();
    let mut events: Vec<((NaiveDate, NaiveTime, NaiveTime), &str)> = Vec::new();

    for task in tasks {
        if task.done {
            continue;
        }
        match &task.kind {
            TaskKind::Deadline { by } => deadlines.push((*by, task.description.as_str())),
            TaskKind::Event { date, start, end } => {
                events.push(((*date, *start, *end), task.description.as_str()))
            }
            TaskKind::Todo => {}
        }
    }

    deadlines.sort_by_key(|(by, _)| *by);
    events.sort_by_key(|((date, start, _), _)| (*date, *start));

    let mut out = String::from("Upcoming deadlines:");
    for (i, (by, description)) in deadlines.iter().enumerate() {
        out.push_str(&format!(
            "\n{}.{} (by: {})",
            i + 1,
            description,
            by.format(DEADLINE_DATE_FORMAT)
        ));
    }
    out.push_str("\nUpcoming events:");
    for (i, ((date, start, end), description)) in events.iter().enumerate() {
        out.push_str(&format!(
            "\n{}.{} (at: {} {}-{})",
            i + 1,
            description,
            date.format(EVENT_DATE_FORMAT),
            start.format(EVENT_TIME_FORMAT),
            end.format(EVENT_TIME_FORMAT)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{parse_deadline_date, parse_event_schedule};

    fn deadline(description: &str, by: &str) -> Task {
        Task::deadline(description, parse_deadline_date(by).unwrap())
    }

    fn event(description: &str, schedule: &str) -> Task {
        let (date, start, end) = parse_event_schedule(schedule).unwrap();
        Task::event(description, date, start, end)
    }

    #[test]
    fn test_empty_list_prints_headers_only() {
        assert_eq!(render(&[]), "Upcoming deadlines:\nUpcoming events:");
    }

    #[test]
    fn test_deadlines_sorted_ascending_by_date() {
        let tasks = vec![
            deadline("later", "2019-12-01 10:00:00"),
            deadline("sooner", "2019-10-01 10:00:00"),
        ];
        let rendered = render(&tasks);
        assert_eq!(
            rendered,
            "Upcoming deadlines:\n\
             1.sooner (by: 2019-10-01 10:00:00)\n\
             2.later (by: 2019-12-01 10:00:00)\n\
             Upcoming events:"
        );
    }

    #[test]
    fn test_events_sorted_ascending_by_date_then_start() {
        let tasks = vec![
            event("afternoon", "2019-10-21 14:00:00-16:00:00"),
            event("morning", "2019-10-21 09:00:00-10:00:00"),
            event("earlier day", "2019-10-20 18:00:00-19:00:00"),
        ];
        let rendered = render(&tasks);
        assert_eq!(
            rendered,
            "Upcoming deadlines:\n\
             Upcoming events:\n\
             1.earlier day (at: 2019-10-20 18:00:00-19:00:00)\n\
             2.morning (at: 2019-10-21 09:00:00-10:00:00)\n\
             3.afternoon (at: 2019-10-21 14:00:00-16:00:00)"
        );
    }

    #[test]
    fn test_done_and_todo_tasks_are_excluded() {
        let mut finished = deadline("finished", "2019-10-01 10:00:00");
        finished.done = true;
        let tasks = vec![finished, Task::todo("no date")];
        assert_eq!(render(&tasks), "Upcoming deadlines:\nUpcoming events:");
    }

    #[test]
    fn test_source_list_is_not_reordered() {
        let tasks = vec![
            deadline("later", "2019-12-01 10:00:00"),
            deadline("sooner", "2019-10-01 10:00:00"),
        ];
        render(&tasks);
        assert_eq!(tasks[0].description, "later");
    }
}
