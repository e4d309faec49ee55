//! Interactive session - login gate, category menu, and command dispatch
//!
//! One command is fully read, processed, and rendered before the next is
//! read. Collections are flushed back to storage when a category loop ends
//! and on exit.

pub mod contacts;
pub mod expenses;
pub mod help;
pub mod login;
pub mod notes;
pub mod places;
pub mod tasks;

use anyhow::Result;
use std::io::{self, BufRead, ErrorKind, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::console::{menu, messages, Console};
use crate::contact::ContactBook;
use crate::expense::Expense;
use crate::note::Note;
use crate::place::Place;
use crate::storage::Storage;
use crate::task::Task;

pub const DEFAULT_PASSWORD: &str = "admin";

/// How a category sub-loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEnd {
    /// `back` - return to the category menu
    Back,
    /// `bye` - save and exit the whole session
    Bye,
}

/// Split one command line into its keyword and the remaining argument text
pub fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    }
}

/// Parse a 1-based entry index against a list length
pub(crate) fn parse_index(arg: &str, len: usize) -> Option<usize> {
    arg.parse::<usize>()
        .ok()
        .filter(|&n| n >= 1 && n <= len)
        .map(|n| n - 1)
}

/// `|` is the field separator of the flat files and cannot appear in input
pub(crate) fn contains_reserved(text: &str) -> bool {
    text.contains('|')
}

/// Run the interactive session against the resolved data directory
pub fn run_interactive(data_dir: Option<PathBuf>) -> Result<()> {
    let storage = Storage::open(data_dir)?;
    let mut session = Session::load(storage)?;
    let mut console = Console::stdio();
    session.run(&mut console)
}

pub struct Session {
    storage: Storage,
    config: Config,
    passwords: Vec<String>,
    tasks: Vec<Task>,
    contacts: ContactBook,
    expenses: Vec<Expense>,
    places: Vec<Place>,
    notes: Vec<Note>,
}

impl Session {
    /// Load every collection from storage. Seeds the default password on a
    /// fresh install so the login gate can be passed.
    pub fn load(storage: Storage) -> Result<Self> {
        let config = Config::load(storage.data_dir())?;
        let mut passwords = storage.load_passwords()?;
        if passwords.is_empty() {
            passwords.push(DEFAULT_PASSWORD.to_string());
            storage.save_passwords(&passwords)?;
        }

        Ok(Self {
            tasks: storage.load_tasks()?,
            contacts: storage.load_contacts()?,
            expenses: storage.load_expenses()?,
            places: storage.load_places()?,
            notes: storage.load_notes()?,
            config,
            passwords,
            storage,
        })
    }

    /// Run the session to completion. Abrupt end of input terminates the
    /// session cleanly after a save; other errors are surfaced on the error
    /// stream.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        console: &mut Console<R, W, E>,
    ) -> Result<()> {
        match self.drive(console) {
            Ok(()) => Ok(()),
            Err(err) if is_end_of_input(&err) => {
                console.show_err(messages::termination())?;
                self.save_all(console)?;
                Ok(())
            }
            Err(err) => {
                console.show_err(messages::io_error(&err))?;
                Err(err)
            }
        }
    }

    fn drive<R: BufRead, W: Write, E: Write>(
        &mut self,
        console: &mut Console<R, W, E>,
    ) -> Result<()> {
        login::gate(console, &self.passwords)?;

        loop {
            console.show(menu::render())?;
            let line = console.read_command()?;
            debug!("dispatching command: {}", line);

            let end = match line.as_str() {
                "" => continue,
                "bye" => LoopEnd::Bye,
                "help" => {
                    console.show(help::render())?;
                    LoopEnd::Back
                }
                "contacts" => contacts::run(console, &mut self.contacts)?,
                "expenses" => expenses::run(console, &mut self.expenses)?,
                "places" => places::run(console, &mut self.places)?,
                "tasks" => tasks::run(console, &mut self.tasks, &self.config.display)?,
                "notes" => notes::run(console, &mut self.notes)?,
                "change password" => {
                    login::change_password(console, &mut self.passwords)?;
                    LoopEnd::Back
                }
                _ => {
                    console.show(messages::unknown_command())?;
                    continue;
                }
            };

            self.save_all(console)?;

            if end == LoopEnd::Bye {
                console.show(messages::goodbye())?;
                return Ok(());
            }
        }
    }

    /// Flush every collection. A failed save is reported on the error
    /// stream and the session continues.
    fn save_all<R: BufRead, W: Write, E: Write>(
        &self,
        console: &mut Console<R, W, E>,
    ) -> Result<()> {
        if let Err(err) = self.try_save_all() {
            console.show_err(messages::io_error(&err))?;
        }
        Ok(())
    }

    fn try_save_all(&self) -> Result<()> {
        self.storage.save_tasks(&self.tasks)?;
        self.storage.save_contacts(&self.contacts)?;
        self.storage.save_expenses(&self.expenses)?;
        self.storage.save_places(&self.places)?;
        self.storage.save_notes(&self.notes)?;
        self.storage.save_passwords(&self.passwords)?;
        Ok(())
    }
}

fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .map(|io_err| io_err.kind() == ErrorKind::UnexpectedEof)
        .unwrap_or(false)
}
