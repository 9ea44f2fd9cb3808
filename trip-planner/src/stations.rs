//! Station name list.
//!
//! A static list of valid station display names, used to filter
//! origin/destination input before it ever reaches the API. Loaded from a
//! plain text file with one name per line.

use std::io;
use std::path::Path;

/// In-memory list of station display names.
#[derive(Debug, Clone, Default)]
pub struct StationList {
    names: Vec<String>,
}

impl StationList {
    /// Build a list from already-loaded names.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load the list from a text file, one name per line.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let names = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Ok(Self { names })
    }

    /// Returns all names in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names containing `term`, case-insensitively.
    ///
    /// An empty term matches everything.
    pub fn filter(&self, term: &str) -> Vec<&str> {
        let needle = term.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Case-insensitive exact-match check.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }
}
