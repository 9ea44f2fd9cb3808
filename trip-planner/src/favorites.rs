//! Favorite trip storage.
//!
//! A flat list of saved (origin, destination) station pairs, persisted as
//! one comma-separated pair per line. The file is loaded once at startup
//! and rewritten in full on every change; there are no partial updates.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

/// A saved origin/destination pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteTrip {
    pub origin: String,
    pub destination: String,
}

impl fmt::Display for FavoriteTrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.origin, self.destination)
    }
}

/// File-backed list of favorite trips.
#[derive(Debug)]
pub struct FavoriteStore {
    path: PathBuf,
    trips: Vec<FavoriteTrip>,
}

impl FavoriteStore {
    /// Load saved trips from `path`.
    ///
    /// A missing file is treated as an empty list; it will be created on
    /// the first change. Lines without a comma are skipped.
    pub fn load(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let trips = match fs::read_to_string(&path) {
            Ok(contents) => parse_lines(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e),
        };
        Ok(Self { path, trips })
    }

    /// Returns all saved trips in file order.
    pub fn trips(&self) -> &[FavoriteTrip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Append a trip and rewrite the file.
    pub fn add(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> io::Result<()> {
        self.trips.push(FavoriteTrip {
            origin: origin.into(),
            destination: destination.into(),
        });
        self.save()
    }

    /// Remove the trip at `index` and rewrite the file.
    ///
    /// Returns whether anything was removed; an out-of-range index leaves
    /// the list and the file untouched.
    pub fn remove(&mut self, index: usize) -> io::Result<bool> {
        if index >= self.trips.len() {
            return Ok(false);
        }
        self.trips.remove(index);
        self.save()?;
        Ok(true)
    }

    fn save(&self) -> io::Result<()> {
        let mut contents = String::new();
        for trip in &self.trips {
            contents.push_str(&trip.origin);
            contents.push(',');
            contents.push_str(&trip.destination);
            contents.push('\n');
        }
        fs::write(&self.path, contents)
    }
}

fn parse_lines(contents: &str) -> Vec<FavoriteTrip> {
    contents
        .lines()
        .filter_map(|line| {
            let (origin, destination) = line.split_once(',')?;
            Some(FavoriteTrip {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trips.txt");
        (dir, path)
    }

    #[test]
    fn missing_file_is_empty() {
        let (_dir, path) = temp_path();
        let store = FavoriteStore::load(&path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn add_then_reload_roundtrip() {
        let (_dir, path) = temp_path();

        let mut store = FavoriteStore::load(&path).unwrap();
        store.add("Hornsby", "Central").unwrap();
        store.add("Gosford", "Hornsby").unwrap();

        let reloaded = FavoriteStore::load(&path).unwrap();
        assert_eq!(reloaded.trips(), store.trips());
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.trips()[0].origin, "Hornsby");
        assert_eq!(reloaded.trips()[1].destination, "Hornsby");
    }

    #[test]
    fn remove_persists() {
        let (_dir, path) = temp_path();

        let mut store = FavoriteStore::load(&path).unwrap();
        store.add("Hornsby", "Central").unwrap();
        store.add("Gosford", "Hornsby").unwrap();

        assert!(store.remove(0).unwrap());

        let reloaded = FavoriteStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.trips()[0].origin, "Gosford");
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let (_dir, path) = temp_path();

        let mut store = FavoriteStore::load(&path).unwrap();
        store.add("Hornsby", "Central").unwrap();

        assert!(!store.remove(5).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn lines_without_comma_are_skipped() {
        let (_dir, path) = temp_path();
        fs::write(&path, "Hornsby,Central\nnot a pair\nGosford,Hornsby\n").unwrap();

        let store = FavoriteStore::load(&path).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.trips()[1].origin, "Gosford");
    }

    #[test]
    fn names_may_contain_further_commas() {
        // Only the first comma splits; the rest belongs to the destination.
        let (_dir, path) = temp_path();
        fs::write(&path, "Hornsby,Central, Platform 16\n").unwrap();

        let store = FavoriteStore::load(&path).unwrap();

        assert_eq!(store.trips()[0].destination, "Central, Platform 16");
    }

    #[test]
    fn display_format() {
        let trip = FavoriteTrip {
            origin: "Hornsby".to_string(),
            destination: "Central".to_string(),
        };
        assert_eq!(trip.to_string(), "Hornsby to Central");
    }
}
