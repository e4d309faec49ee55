//! `daybook paths` command implementation

use anyhow::Result;
use std::path::PathBuf;

use crate::storage::{Storage, DATA_FILES};

pub fn run(data_dir: Option<PathBuf>) -> Result<()> {
    let storage = Storage::open_unlocked(data_dir)?;

    println!("Data directory: {}", storage.data_dir().display());
    for name in DATA_FILES {
        let path = storage.data_dir().join(name);
        let state = if path.exists() { "present" } else { "missing" };
        println!("  {:<14} {}", name, state);
    }

    Ok(())
}
