//! Local storage of puzzle inputs

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// File-backed puzzle inputs
///
/// Directory structure: `{root}/{year}_day{day:02}.txt`
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.root.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if an input file is present
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Load the input text for a specific year/day
    pub fn load(&self, year: u16, day: u8) -> io::Result<String> {
        fs::read_to_string(self.input_path(year, day))
    }
}

/// Read pasted puzzle input from stdin until EOF
pub fn read_stdin() -> io::Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));

        let path = store.input_path(2024, 1);
        assert!(path.to_string_lossy().ends_with("2024_day01.txt"));

        let path = store.input_path(2024, 25);
        assert!(path.to_string_lossy().ends_with("2024_day25.txt"));
    }

    #[test]
    fn load_reads_the_stored_file() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2024, 5));
        assert!(store.load(2024, 5).is_err());

        let text = "47|53\n\n47,53\n";
        fs::write(store.input_path(2024, 5), text).unwrap();

        assert!(store.contains(2024, 5));
        assert_eq!(store.load(2024, 5).unwrap(), text);
    }
}
