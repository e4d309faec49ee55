//! `daybook export` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::contact::ContactBook;
use crate::expense::Expense;
use crate::note::Note;
use crate::place::Place;
use crate::storage::Storage;
use crate::task::Task;

#[derive(Args)]
pub struct ExportArgs {
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Everything except the password file.
#[derive(Serialize)]
struct ExportJson {
    tasks: Vec<Task>,
    contacts: ContactBook,
    expenses: Vec<Expense>,
    places: Vec<Place>,
    notes: Vec<Note>,
}

pub fn run(data_dir: Option<PathBuf>, args: ExportArgs) -> Result<()> {
    let storage = Storage::open_unlocked(data_dir)?;

    let export = ExportJson {
        tasks: storage.load_tasks()?,
        contacts: storage.load_contacts()?,
        expenses: storage.load_expenses()?,
        places: storage.load_places()?,
        notes: storage.load_notes()?,
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&export)?
    } else {
        serde_json::to_string(&export)?
    };
    println!("{}", json);

    Ok(())
}
