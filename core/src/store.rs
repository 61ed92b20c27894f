//! High-score persistence.
//!
//! The best score is a single decimal integer in a text file. Stores report
//! I/O problems as `io::Result`; [`ScoreTracker`](crate::score::ScoreTracker)
//! decides what to do with them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the best score lives between runs.
pub trait HighScoreStore {
    /// Read the stored best score.
    fn load(&mut self) -> io::Result<u32>;

    /// Replace the stored best score.
    fn save(&mut self, value: u32) -> io::Result<()>;
}

/// A high score kept in a text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn load(&mut self) -> io::Result<u32> {
        let contents = fs::read_to_string(&self.path)?;
        parse_score(&contents).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("no integer in {}", self.path.display()),
            )
        })
    }

    fn save(&mut self, value: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value.to_string())
    }
}

/// An in-memory store that remembers every save.
///
/// Useful for headless sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u32>,
    saves: Vec<u32>,
}

impl MemoryStore {
    /// A store that already holds `value`.
    pub fn with_value(value: u32) -> Self {
        MemoryStore {
            value: Some(value),
            saves: Vec::new(),
        }
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    /// Every value passed to `save`, oldest first.
    pub fn saves(&self) -> &[u32] {
        &self.saves
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> io::Result<u32> {
        self.value
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no high score stored"))
    }

    fn save(&mut self, value: u32) -> io::Result<()> {
        self.value = Some(value);
        self.saves.push(value);
        Ok(())
    }
}

/// Parse the first integer token: leading whitespace is skipped, then the
/// leading run of digits is read.
fn parse_score(contents: &str) -> Option<u32> {
    let trimmed = contents.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scratch_path(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        env::temp_dir()
            .join(format!("term2048-store-{}-{}", process::id(), n))
            .join(name)
    }

    // -------------------------------------------------------------------------
    // Parsing
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse_score("1234"), Some(1234));
    }

    #[test]
    fn test_parse_skips_whitespace_and_trailing_text() {
        assert_eq!(parse_score("  \n 56\n"), Some(56));
        assert_eq!(parse_score("78 pts"), Some(78));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("abc"), None);
        assert_eq!(parse_score("-5"), None);
        assert_eq!(parse_score("99999999999999999999"), None);
    }

    // -------------------------------------------------------------------------
    // File store
    // -------------------------------------------------------------------------

    #[test]
    fn test_file_store_round_trip_creates_parent() {
        let path = scratch_path("nested/highscore");
        let mut store = FileStore::new(&path);
        store.save(2048).expect("save into temp dir");
        assert_eq!(fs::read_to_string(&path).unwrap(), "2048");
        assert_eq!(store.load().unwrap(), 2048);
        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn test_file_store_save_truncates() {
        let path = scratch_path("highscore");
        let mut store = FileStore::new(&path);
        store.save(123456).unwrap();
        store.save(7).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "7");
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_file_store_missing_file_is_error() {
        let mut store = FileStore::new(scratch_path("missing"));
        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_file_store_corrupt_file_is_invalid_data() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not a number").unwrap();
        let err = FileStore::new(&path).load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    // -------------------------------------------------------------------------
    // Memory store
    // -------------------------------------------------------------------------

    #[test]
    fn test_memory_store_records_saves() {
        let mut store = MemoryStore::default();
        assert!(store.load().is_err());
        store.save(4).unwrap();
        store.save(12).unwrap();
        assert_eq!(store.load().unwrap(), 12);
        assert_eq!(store.saves(), &[4, 12]);
    }
}
