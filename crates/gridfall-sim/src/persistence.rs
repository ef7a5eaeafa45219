//! High score persistence.
//!
//! The engine talks to a `HighScoreStore` trait object so tests run
//! against the in-memory store and the shipped game uses a JSON file.
//! Store failures are absorbed: a broken disk must never break a match.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the best score ever lives between matches.
pub trait HighScoreStore {
    fn load(&self) -> u32;
    fn save(&mut self, score: u32);
}

/// Volatile store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: u32,
}

impl MemoryStore {
    pub fn with_value(value: u32) -> Self {
        Self { value }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.value
    }

    fn save(&mut self, score: u32) {
        self.value = score;
    }
}

/// On-disk JSON payload.
#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// JSON file store. A missing file reads as zero; read/write errors are
/// logged and swallowed.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> u32 {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(_) => return 0,
        };
        match serde_json::from_str::<HighScoreFile>(&json) {
            Ok(file) => file.high_score,
            Err(e) => {
                log::warn!("unreadable high score file {}: {e}", self.path.display());
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        if let Some(dir) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(dir) {
                log::warn!("failed to create high score directory: {e}");
                return;
            }
        }
        let file = HighScoreFile { high_score: score };
        let json = match serde_json::to_string_pretty(&file) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("failed to serialize high score: {e}");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            log::warn!("failed to write high score file: {e}");
        }
    }
}
