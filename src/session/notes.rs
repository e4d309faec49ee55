//! `notes` category sub-loop

use anyhow::Result;
use std::io::{BufRead, Write};

use super::{parse_index, split_command, LoopEnd};
use crate::console::{messages, Console};
use crate::note::Note;

const COMMANDS: &str = "notes: add <text> | delete <n> | list | back";

pub fn run<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    notes: &mut Vec<Note>,
) -> Result<LoopEnd> {
    console.show(COMMANDS)?;

    loop {
        let line = console.read_command()?;
        let (keyword, rest) = split_command(&line);

        match keyword {
            "back" => return Ok(LoopEnd::Back),
            "bye" => return Ok(LoopEnd::Bye),
            "add" => {
                if rest.is_empty() {
                    console.show(messages::incorrect_format())?;
                } else {
                    console.show(format!("Added: {}", rest))?;
                    notes.push(Note::new(rest));
                }
            }
            "delete" => match parse_index(rest, notes.len()) {
                Some(index) => {
                    let removed = notes.remove(index);
                    console.show(format!("Removed: {}", removed.text))?;
                }
                None => console.show(messages::no_such_index())?,
            },
            "list" => list(console, notes)?,
            "" => {}
            _ => console.show(messages::unknown_command())?,
        }
    }
}

fn list<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    notes: &[Note],
) -> Result<()> {
    if notes.is_empty() {
        console.show("There are no notes in your list.")?;
        return Ok(());
    }
    for (i, note) in notes.iter().enumerate() {
        console.show(format!("{}.{}", i + 1, note.text))?;
    }
    Ok(())
}
