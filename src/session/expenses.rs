//! `expenses` category sub-loop

use anyhow::Result;
use std::io::{BufRead, Write};

use super::{contains_reserved, parse_index, split_command, LoopEnd};
use crate::console::{messages, Console};
use crate::expense::{self, Expense};

const COMMANDS: &str =
    "expenses: add <description>,<amount>,<YYYY-MM-DD> | delete <n> | list | total | back";

pub fn run<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    expenses: &mut Vec<Expense>,
) -> Result<LoopEnd> {
    console.show(COMMANDS)?;

    loop {
        let line = console.read_command()?;
        let (keyword, rest) = split_command(&line);

        match keyword {
            "back" => return Ok(LoopEnd::Back),
            "bye" => return Ok(LoopEnd::Bye),
            "add" => add(console, expenses, rest)?,
            "delete" => delete(console, expenses, rest)?,
            "list" => list(console, expenses)?,
            "total" => {
                console.show(format!("Total spent: ${:.2}", expense::total(expenses)))?;
            }
            "" => {}
            _ => console.show(messages::unknown_command())?,
        }
    }
}

fn add<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    expenses: &mut Vec<Expense>,
    rest: &str,
) -> Result<()> {
    if contains_reserved(rest) {
        console.show(messages::reserved_character())?;
        return Ok(());
    }

    match expense::parse_input(rest) {
        Ok(expense) => {
            console.show(format!("Added: {}", expense.list_format()))?;
            expenses.push(expense);
        }
        Err(hint) => console.show(hint.to_string())?,
    }
    Ok(())
}

fn delete<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    expenses: &mut Vec<Expense>,
    rest: &str,
) -> Result<()> {
    let Some(index) = parse_index(rest, expenses.len()) else {
        console.show(messages::no_such_index())?;
        return Ok(());
    };

    let removed = expenses.remove(index);
    console.show(format!("Removed: {}", removed.list_format()))?;
    Ok(())
}

fn list<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    expenses: &[Expense],
) -> Result<()> {
    if expenses.is_empty() {
        console.show("There are no expenses in your list.")?;
        return Ok(());
    }
    for (i, expense) in expenses.iter().enumerate() {
        console.show(format!("{}.{}", i + 1, expense.list_format()))?;
    }
    Ok(())
}
