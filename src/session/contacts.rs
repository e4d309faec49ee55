//! `contacts` category sub-loop

use anyhow::Result;
use std::io::{BufRead, Write};

use super::{contains_reserved, split_command, LoopEnd};
use crate::console::{messages, Console};
use crate::contact::{self, ContactBook};

const COMMANDS: &str = "contacts: add <name>,<phone> | delete <name> | find <name> | list | back";

pub fn run<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    contacts: &mut ContactBook,
) -> Result<LoopEnd> {
    console.show(COMMANDS)?;

    loop {
        let line = console.read_command()?;
        let (keyword, rest) = split_command(&line);

        match keyword {
            "back" => return Ok(LoopEnd::Back),
            "bye" => return Ok(LoopEnd::Bye),
            "add" => add(console, contacts, rest)?,
            "delete" => delete(console, contacts, rest)?,
            "find" => find(console, contacts, rest)?,
            "list" => list(console, contacts)?,
            "" => {}
            _ => console.show(messages::unknown_command())?,
        }
    }
}

fn add<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    contacts: &mut ContactBook,
    rest: &str,
) -> Result<()> {
    let Some((name, phone)) = rest.split_once(',') else {
        console.show(messages::incorrect_format())?;
        return Ok(());
    };
    let name = name.trim();
    let phone = phone.trim();
    if name.is_empty() || phone.is_empty() {
        console.show(messages::incorrect_format())?;
        return Ok(());
    }
    if contains_reserved(name) || contains_reserved(phone) {
        console.show(messages::reserved_character())?;
        return Ok(());
    }

    let replaced = contacts.insert(name, phone);
    if replaced.is_some() {
        console.show(format!("Updated {}: {}", name, phone))?;
    } else {
        console.show(format!("Added {}: {}", name, phone))?;
    }
    Ok(())
}

fn delete<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    contacts: &mut ContactBook,
    rest: &str,
) -> Result<()> {
    if rest.is_empty() {
        console.show(messages::incorrect_format())?;
        return Ok(());
    }
    if contacts.remove(rest).is_some() {
        console.show(format!("Deleted {}.", rest))?;
    } else {
        console.show(messages::contact_not_found(rest))?;
    }
    Ok(())
}

fn find<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    contacts: &ContactBook,
    rest: &str,
) -> Result<()> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() != 1 {
        console.show(messages::incorrect_format())?;
        return Ok(());
    }

    let name = tokens[0];
    match contacts.phone(name) {
        Some(phone) => console.show(contact::render_found_block(name, phone))?,
        None => console.show(messages::contact_not_found(name))?,
    }
    Ok(())
}

fn list<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    contacts: &ContactBook,
) -> Result<()> {
    if contacts.is_empty() {
        console.show("There are no contacts in your list.")?;
        return Ok(());
    }

    console.show(contact::render_header())?;
    console.show(contact::separator())?;
    for (name, phone) in contacts.iter() {
        console.show(contact::render_row(name, phone))?;
    }
    console.show(contact::separator())?;
    Ok(())
}
