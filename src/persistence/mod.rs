//! Best-score persistence
//!
//! The controller never touches the storage medium directly; it goes
//! through the `ScoreStore` capability handed to it at construction.
//! Storage failures degrade to in-memory behavior for the session and
//! never block play.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Fixed identifier under which the best score is stored
pub const STORAGE_KEY: &str = "math_blitz_best_score";

/// Injected persistence capability for the single best-score value
pub trait ScoreStore {
    /// Previously persisted best score; 0 if none or unreadable
    fn load_best(&self) -> u32;
    /// Persist a new best score; failures are logged, never surfaced
    fn save_best(&mut self, score: u32);
}

/// Lets tests and drivers keep a handle on a store they hand to the
/// controller.
impl<S: ScoreStore> ScoreStore for Rc<RefCell<S>> {
    fn load_best(&self) -> u32 {
        self.borrow().load_best()
    }

    fn save_best(&mut self, score: u32) {
        self.borrow_mut().save_best(score);
    }
}

/// On-disk JSON record
#[derive(Debug, Serialize, Deserialize)]
struct BestScoreRecord {
    best_score: u32,
}

/// Durable store backed by a small JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `$HOME/.<STORAGE_KEY>.json`, falling back to
    /// the current directory when `HOME` is unset
    pub fn default_path() -> PathBuf {
        let mut path = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
        path.push(format!(".{STORAGE_KEY}.json"));
        path
    }
}

impl ScoreStore for FileStore {
    fn load_best(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<BestScoreRecord>(&json) {
                Ok(record) => {
                    log::info!("Loaded best score {}", record.best_score);
                    record.best_score
                }
                Err(err) => {
                    log::warn!("Best score file unreadable ({err}), starting at 0");
                    0
                }
            },
            Err(_) => {
                log::info!("No best score found, starting fresh");
                0
            }
        }
    }

    fn save_best(&mut self, score: u32) {
        let record = BestScoreRecord { best_score: score };
        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Failed to encode best score: {err}");
                return;
            }
        };
        match fs::write(&self.path, json) {
            Ok(()) => log::info!("Best score saved ({score})"),
            Err(err) => log::warn!("Failed to save best score: {err}"),
        }
    }
}

/// In-memory store; the test fake and the fallback when no durable
/// storage is wanted
#[derive(Debug, Default)]
pub struct MemoryStore {
    best: u32,
    saves: u32,
}

impl MemoryStore {
    /// Store pre-seeded with an existing best score
    pub fn with_best(best: u32) -> Self {
        Self { best, saves: 0 }
    }

    /// Number of times `save_best` has been called
    pub fn save_count(&self) -> u32 {
        self.saves
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> u32 {
        self.best
    }

    fn save_best(&mut self, score: u32) {
        self.best = score;
        self.saves += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileStore {
        let mut path = std::env::temp_dir();
        path.push(format!("{STORAGE_KEY}_test_{}_{name}.json", std::process::id()));
        let _ = fs::remove_file(&path);
        FileStore::new(path)
    }

    #[test]
    fn test_file_store_round_trip() {
        let mut store = temp_store("round_trip");
        assert_eq!(store.load_best(), 0);

        store.save_best(17);
        assert_eq!(store.load_best(), 17);

        store.save_best(23);
        assert_eq!(store.load_best(), 23);

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = temp_store("missing");
        assert_eq!(store.load_best(), 0);
    }

    #[test]
    fn test_corrupt_file_loads_zero() {
        let store = temp_store("corrupt");
        fs::write(&store.path, "not json at all").unwrap();
        assert_eq!(store.load_best(), 0);
        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryStore::with_best(4);
        assert_eq!(store.load_best(), 4);
        store.save_best(9);
        assert_eq!(store.load_best(), 9);
        assert_eq!(store.save_count(), 1);
    }
}
