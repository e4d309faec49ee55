//! Contact book - sorted name-to-phone mapping with fixed-width rendering

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Display width of the name column in table output
pub const NAME_COLUMN_WIDTH: usize = 30;

const SEPARATOR_WIDTH: usize = 42;

#[derive(Debug, Error)]
#[error("unrecognized contact record: {0}")]
pub struct ContactParseError(pub String);

/// Contacts keyed by name. BTreeMap keeps iteration sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContactBook {
    entries: BTreeMap<String, String>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a contact, returning the previous phone number if any
    pub fn insert(&mut self, name: impl Into<String>, phone: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), phone.into())
    }

    /// Remove a contact by name, returning its phone number if it existed
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    /// Exact-name lookup
    pub fn phone(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `{name}|{phone}` file lines, skipping blank lines
    pub fn from_lines(lines: &[String]) -> Result<Self, ContactParseError> {
        let mut book = Self::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let (name, phone) = line
                .split_once('|')
                .ok_or_else(|| ContactParseError(line.clone()))?;
            book.insert(name, phone);
        }
        Ok(book)
    }

    /// Serialize to `{name}|{phone}` file lines, sorted by name
    pub fn to_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, phone)| format!("{}|{}", name, phone))
            .collect()
    }
}

fn pad_name(name: &str) -> String {
    let width = UnicodeWidthStr::width(name);
    if width >= NAME_COLUMN_WIDTH {
        name.to_string()
    } else {
        format!("{}{}", name, " ".repeat(NAME_COLUMN_WIDTH - width))
    }
}

/// Table header: name column padded to [`NAME_COLUMN_WIDTH`]
pub fn render_header() -> String {
    format!("{}| Number:", pad_name("Name:"))
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// One table row: name padded to [`NAME_COLUMN_WIDTH`]
pub fn render_row(name: &str, phone: &str) -> String {
    format!("{}| {}", pad_name(name), phone)
}

/// Full table block for a found contact: header, separator, row, separator
pub fn render_found_block(name: &str, phone: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        render_header(),
        separator(),
        render_row(name, phone),
        separator()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> ContactBook {
        let mut book = ContactBook::new();
        book.insert("janel", "9625 1722");
        book.insert("jason", "9825 1822");
        book
    }

    #[test]
    fn test_insert_and_lookup() {
        let book = sample_book();
        assert_eq!(book.phone("jason"), Some("9825 1822"));
        assert_eq!(book.phone("jay"), None);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut book = sample_book();
        let previous = book.insert("jason", "8000 0000");
        assert_eq!(previous, Some("9825 1822".to_string()));
        assert_eq!(book.phone("jason"), Some("8000 0000"));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut book = sample_book();
        assert_eq!(book.remove("janel"), Some("9625 1722".to_string()));
        assert_eq!(book.remove("janel"), None);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_iteration_is_sorted_by_name() {
        let mut book = ContactBook::new();
        book.insert("zoe", "1");
        book.insert("amy", "2");
        book.insert("mia", "3");

        let names: Vec<&String> = book.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["amy", "mia", "zoe"]);
    }

    #[test]
    fn test_lines_roundtrip() {
        let book = sample_book();
        let lines = book.to_lines();
        assert_eq!(lines, ["janel|9625 1722", "jason|9825 1822"]);

        let parsed = ContactBook::from_lines(&lines).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn test_from_lines_rejects_missing_separator() {
        let lines = vec!["janel 9625 1722".to_string()];
        let err = ContactBook::from_lines(&lines).unwrap_err();
        assert!(err.to_string().contains("janel 9625 1722"));
    }

    #[test]
    fn test_from_lines_skips_blank_lines() {
        let lines = vec![
            "janel|9625 1722".to_string(),
            String::new(),
            "jason|9825 1822".to_string(),
        ];
        let book = ContactBook::from_lines(&lines).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_render_header_exact() {
        assert_eq!(
            render_header(),
            "Name:                         | Number:"
        );
    }

    #[test]
    fn test_render_row_exact() {
        assert_eq!(
            render_row("jason", "9825 1822"),
            "jason                         | 9825 1822"
        );
    }

    #[test]
    fn test_separator_is_42_dashes() {
        assert_eq!(separator(), "-".repeat(42));
    }

    #[test]
    fn test_render_found_block_exact() {
        let separator = "------------------------------------------";
        assert_eq!(
            render_found_block("jason", "9825 1822"),
            format!(
                "Name:                         | Number:\n{}\njason                         | 9825 1822\n{}",
                separator, separator
            )
        );
    }

    #[test]
    fn test_pad_name_leaves_wide_names_unpadded() {
        let long = "a".repeat(40);
        assert_eq!(pad_name(&long), long);
    }
}
