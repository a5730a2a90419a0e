use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;

const FILE_NAME: &str = "leaderboard.json";
const NAME_LEN: usize = 12;
pub const DEFAULT_NAME: &str = "Player";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Ranked high scores backed by a JSON file.
///
/// The in-memory list is the source of truth for the running game; the file
/// is rewritten after every recorded score.
#[derive(Clone, Debug)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    path: PathBuf,
    capacity: usize,
}

impl Leaderboard {
    /// Load from `path`. A missing or unreadable file gives an empty board.
    pub fn load(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        let entries = match Self::read_file(&path) {
            Ok(Some(mut entries)) => {
                entries.sort_by(|a, b| b.score.cmp(&a.score));
                entries.truncate(capacity);
                info!("Loaded {} leaderboard entries from {}", entries.len(), path.display());
                entries
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Ignoring leaderboard at {}: {}", path.display(), e);
                Vec::new()
            }
        };
        Leaderboard { entries, path, capacity }
    }

    pub fn default_path() -> PathBuf {
        // Store next to the executable
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join(FILE_NAME);
            }
        }
        PathBuf::from(FILE_NAME)
    }

    fn read_file(path: &Path) -> Result<Option<Vec<LeaderboardEntry>>, PersistenceError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&data)?))
    }

    /// Write to a sibling temp file, then rename it over the real one so a
    /// crash mid-write never leaves a truncated leaderboard behind.
    fn write_file(&self) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// Insert a score, keep the list ranked and capped, and persist it.
    ///
    /// The entry is kept in memory even if the write fails.
    pub fn record(&mut self, name: &str, score: u32) -> Result<(), PersistenceError> {
        let name = Self::clean_name(name);
        self.entries.push(LeaderboardEntry { name, score });
        // Stable sort: equal scores stay in the order they were set
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.capacity);

        match self.write_file() {
            Ok(()) => {
                info!("Recorded score {} to {}", score, self.path.display());
                Ok(())
            }
            Err(e) => {
                warn!("Could not save leaderboard to {}: {}", self.path.display(), e);
                Err(e)
            }
        }
    }

    fn clean_name(name: &str) -> String {
        let trimmed: String = name.trim().chars().take(NAME_LEN).collect();
        if trimmed.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            trimmed
        }
    }

    /// 1-based rank a score would take, or `None` if it would not make the cut.
    pub fn rank_of(&self, score: u32) -> Option<usize> {
        let ahead = self.entries.iter().filter(|e| e.score >= score).count();
        if ahead < self.capacity {
            Some(ahead + 1)
        } else {
            None
        }
    }

    pub fn top_n(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(board: &Leaderboard) -> Vec<(&str, u32)> {
        board.entries().iter().map(|e| (e.name.as_str(), e.score)).collect()
    }

    #[test]
    fn records_are_ranked_descending() {
        let dir = tempdir().unwrap();
        let mut board = Leaderboard::load(dir.path().join(FILE_NAME), 10);
        board.record("A", 50).unwrap();
        board.record("B", 80).unwrap();
        board.record("C", 10).unwrap();
        assert_eq!(names(&board), vec![("B", 80), ("A", 50), ("C", 10)]);
    }

    #[test]
    fn capacity_drops_lowest() {
        let dir = tempdir().unwrap();
        let mut board = Leaderboard::load(dir.path().join(FILE_NAME), 3);
        for (name, score) in [("A", 5), ("B", 9), ("C", 1), ("D", 7)] {
            board.record(name, score).unwrap();
        }
        assert_eq!(names(&board), vec![("B", 9), ("D", 7), ("A", 5)]);
    }

    #[test]
    fn ties_keep_older_entry_first() {
        let dir = tempdir().unwrap();
        let mut board = Leaderboard::load(dir.path().join(FILE_NAME), 10);
        board.record("first", 20).unwrap();
        board.record("second", 20).unwrap();
        assert_eq!(names(&board), vec![("first", 20), ("second", 20)]);
    }

    #[test]
    fn persisted_board_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        let mut board = Leaderboard::load(&path, 10);
        board.record("Mallard", 31).unwrap();
        board.record("Teal", 44).unwrap();

        let reloaded = Leaderboard::load(&path, 10);
        assert_eq!(reloaded.entries(), board.entries());
        assert!(!dir.path().join("leaderboard.json.tmp").exists());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let board = Leaderboard::load(dir.path().join("nope.json"), 10);
        assert!(board.entries().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "{ not json ]").unwrap();
        assert!(Leaderboard::load(&path, 10).entries().is_empty());

        fs::write(&path, r#"{"name": "A", "score": 3}"#).unwrap();
        assert!(Leaderboard::load(&path, 10).entries().is_empty());
    }

    #[test]
    fn blank_name_becomes_default() {
        let dir = tempdir().unwrap();
        let mut board = Leaderboard::load(dir.path().join(FILE_NAME), 10);
        board.record("   ", 3).unwrap();
        assert_eq!(board.entries()[0].name, DEFAULT_NAME);
    }

    #[test]
    fn failed_write_keeps_entry_in_memory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join(FILE_NAME);
        let mut board = Leaderboard::load(&path, 10);
        assert!(board.record("Ghost", 12).is_err());
        assert_eq!(names(&board), vec![("Ghost", 12)]);
    }

    #[test]
    fn top_n_and_rank() {
        let dir = tempdir().unwrap();
        let mut board = Leaderboard::load(dir.path().join(FILE_NAME), 2);
        board.record("A", 10).unwrap();
        assert_eq!(board.top_n(5).len(), 1);
        assert_eq!(board.rank_of(11), Some(1));
        board.record("B", 20).unwrap();
        assert_eq!(board.top_n(1)[0].name, "B");
        assert_eq!(board.rank_of(5), None);
        assert_eq!(board.rank_of(15), Some(2));
    }
}
