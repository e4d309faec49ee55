//! Note records

use serde::{Deserialize, Serialize};

/// A free-form note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One note per line, blank lines skipped
pub fn from_lines(lines: &[String]) -> Vec<Note> {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(Note::new)
        .collect()
}

pub fn to_lines(notes: &[Note]) -> Vec<String> {
    notes.iter().map(|n| n.text.clone()).collect()
}
