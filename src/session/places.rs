//! `places` category sub-loop

use anyhow::Result;
use std::io::{BufRead, Write};

use super::{parse_index, split_command, LoopEnd};
use crate::console::{messages, Console};
use crate::place::Place;

const COMMANDS: &str = "places: add <name> | delete <n> | find <keyword> | list | back";

pub fn run<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    places: &mut Vec<Place>,
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
                    places.push(Place::new(rest));
                }
            }
            "delete" => match parse_index(rest, places.len()) {
                Some(index) => {
                    let removed = places.remove(index);
                    console.show(format!("Removed: {}", removed.name))?;
                }
                None => console.show(messages::no_such_index())?,
            },
            "find" => find(console, places, rest)?,
            "list" => list(console, places)?,
            "" => {}
            _ => console.show(messages::unknown_command())?,
        }
    }
}

fn find<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    places: &[Place],
    rest: &str,
) -> Result<()> {
    if rest.is_empty() {
        console.show(messages::incorrect_format())?;
        return Ok(());
    }

    let matches: Vec<&Place> = places.iter().filter(|p| p.matches(rest)).collect();
    if matches.is_empty() {
        console.show("No matching places found.")?;
        return Ok(());
    }

    console.show("Matching places:")?;
    for (i, place) in matches.iter().enumerate() {
        console.show(format!("{}.{}", i + 1, place.name))?;
    }
    Ok(())
}

fn list<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    places: &[Place],
) -> Result<()> {
    if places.is_empty() {
        console.show("There are no places in your list.")?;
        return Ok(());
    }
    for (i, place) in places.iter().enumerate() {
        console.show(format!("{}.{}", i + 1, place.name))?;
    }
    Ok(())
}
