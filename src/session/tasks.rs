//! `tasks` category sub-loop

use anyhow::Result;
use std::io::{BufRead, Write};

use super::{contains_reserved, parse_index, split_command, LoopEnd};
use crate::config::DisplayConfig;
use crate::console::{messages, progress, upcoming, Console};
use crate::task::{parse_deadline_date, parse_event_schedule, Task};

const COMMANDS: &str = "tasks: todo <description> | deadline <description> by <date> | \
event <description> at <schedule> | list | mark <n> | unmark <n> | delete <n> | \
find <keyword> | upcoming | progress | back";

pub fn run<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    tasks: &mut Vec<Task>,
    display: &DisplayConfig,
) -> Result<LoopEnd> {
    console.show(COMMANDS)?;

    loop {
        let line = console.read_command()?;
        let (keyword, rest) = split_command(&line);

        match keyword {
            "back" => return Ok(LoopEnd::Back),
            "bye" => return Ok(LoopEnd::Bye),
            "todo" => add_todo(console, tasks, rest, display)?,
            "deadline" => add_deadline(console, tasks, rest, display)?,
            "event" => add_event(console, tasks, rest, display)?,
            "list" => show_list(console, tasks, display)?,
            "mark" => set_done(console, tasks, rest, display, true)?,
            "unmark" => set_done(console, tasks, rest, display, false)?,
            "delete" => delete(console, tasks, rest, display)?,
            "find" => find(console, tasks, rest, display)?,
            "upcoming" => console.show(upcoming::render(tasks))?,
            "progress" => console.show(progress::render(tasks))?,
            "" => {}
            _ => console.show(messages::unknown_command())?,
        }
    }
}

fn check_description<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    description: &str,
) -> Result<bool> {
    if description.is_empty() {
        console.show(messages::incorrect_format())?;
        return Ok(false);
    }
    if contains_reserved(description) {
        console.show(messages::reserved_character())?;
        return Ok(false);
    }
    Ok(true)
}

fn add_todo<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    tasks: &mut Vec<Task>,
    rest: &str,
    display: &DisplayConfig,
) -> Result<()> {
    if !check_description(console, rest)? {
        return Ok(());
    }
    let task = Task::todo(rest);
    console.show(format!("Added: {}", task.list_format(display)))?;
    tasks.push(task);
    Ok(())
}

fn add_deadline<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    tasks: &mut Vec<Task>,
    rest: &str,
    display: &DisplayConfig,
) -> Result<()> {
    let Some((description, date_text)) = rest.rsplit_once(" by ") else {
        console.show(messages::incorrect_format())?;
        return Ok(());
    };
    let description = description.trim();
    if !check_description(console, description)? {
        return Ok(());
    }

    let by = match parse_deadline_date(date_text) {
        Ok(by) => by,
        Err(hint) => {
            console.show(hint.to_string())?;
            return Ok(());
        }
    };

    let task = Task::deadline(description, by);
    console.show(format!("Added: {}", task.list_format(display)))?;
    tasks.push(task);
    Ok(())
}

fn add_event<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    tasks: &mut Vec<Task>,
    rest: &str,
    display: &DisplayConfig,
) -> Result<()> {
    let Some((description, schedule_text)) = rest.rsplit_once(" at ") else {
        console.show(messages::incorrect_format())?;
        return Ok(());
    };
    let description = description.trim();
    if !check_description(console, description)? {
        return Ok(());
    }

    let (date, start, end) = match parse_event_schedule(schedule_text) {
        Ok(schedule) => schedule,
        Err(hint) => {
            console.show(hint.to_string())?;
            return Ok(());
        }
    };

    let task = Task::event(description, date, start, end);
    console.show(format!("Added: {}", task.list_format(display)))?;
    tasks.push(task);
    Ok(())
}

fn show_list<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    tasks: &[Task],
    display: &DisplayConfig,
) -> Result<()> {
    if tasks.is_empty() {
        console.show("There are no tasks in your list.")?;
        return Ok(());
    }
    for (i, task) in tasks.iter().enumerate() {
        console.show(format!("{}.{}", i + 1, task.list_format(display)))?;
    }
    Ok(())
}

fn set_done<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    tasks: &mut [Task],
    rest: &str,
    display: &DisplayConfig,
    done: bool,
) -> Result<()> {
    let Some(index) = parse_index(rest, tasks.len()) else {
        console.show(messages::no_such_index())?;
        return Ok(());
    };

    tasks[index].done = done;
    let verb = if done { "done" } else { "not done yet" };
    console.show(format!(
        "Marked as {}: {}",
        verb,
        tasks[index].list_format(display)
    ))?;
    Ok(())
}

fn delete<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    tasks: &mut Vec<Task>,
    rest: &str,
    display: &DisplayConfig,
) -> Result<()> {
    let Some(index) = parse_index(rest, tasks.len()) else {
        console.show(messages::no_such_index())?;
        return Ok(());
    };

    let removed = tasks.remove(index);
    console.show(format!("Removed: {}", removed.list_format(display)))?;
    Ok(())
}

fn find<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    tasks: &[Task],
    rest: &str,
    display: &DisplayConfig,
) -> Result<()> {
    if rest.is_empty() {
        console.show(messages::incorrect_format())?;
        return Ok(());
    }

    let matches: Vec<&Task> = tasks.iter().filter(|t| t.matches(rest)).collect();
    if matches.is_empty() {
        console.show("No matching tasks found.")?;
        return Ok(());
    }

    console.show("Matching tasks:")?;
    for (i, task) in matches.iter().enumerate() {
        console.show(format!("{}.{}", i + 1, task.list_format(display)))?;
    }
    Ok(())
}
