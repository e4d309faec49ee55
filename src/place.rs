//! Place records

use serde::{Deserialize, Serialize};

/// A remembered place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
}

impl Place {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Keyword search over the name
    pub fn matches(&self, keyword: &str) -> bool {
        self.name.contains(keyword)
    }
}

/// One place per line, blank lines skipped
pub fn from_lines(lines: &[String]) -> Vec<Place> {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(Place::new)
        .collect()
}

pub fn to_lines(places: &[Place]) -> Vec<String> {
    places.iter().map(|p| p.name.clone()).collect()
}
