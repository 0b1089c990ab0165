use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store key under which the high score lives.
pub const HIGH_SCORE_KEY: &str = "snake-highscore";

const APP_DIR_NAME: &str = "gridsnake";
const STORE_FILE_NAME: &str = "store.json";

/// Failure to write a value through a [`ScoreStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] io::Error),
    #[error("store encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value persistence injected into the runtime.
///
/// Reads swallow their failures: a value that cannot be produced is
/// simply absent, matching a store that was never written to.
pub trait ScoreStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Reads the persisted high score, defaulting to zero.
///
/// Anything that does not parse as a base-10 `u32` counts as absent.
#[must_use]
pub fn load_high_score(store: &dyn ScoreStore) -> u32 {
    store
        .read(HIGH_SCORE_KEY)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0)
}

/// Writes `score` as a base-10 string under [`HIGH_SCORE_KEY`].
pub fn save_high_score(store: &mut dyn ScoreStore, score: u32) -> Result<(), StoreError> {
    store.write(HIGH_SCORE_KEY, &score.to_string())
}

/// In-memory store for tests and the `--no-persist` mode.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    entries: HashMap<String, String>,
}

/// JSON-file store kept in the platform data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens the store at the platform-correct default path.
    #[must_use]
    pub fn at_default_path() -> Self {
        Self {
            path: default_store_path(),
        }
    }

    /// Opens the store at an explicit path.
    #[must_use]
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Option<StoreFile> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }
}

impl ScoreStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.read_entries()?.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = self.read_entries().unwrap_or_default();
        file.entries.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Returns the platform-correct store file path.
#[must_use]
pub fn default_store_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(STORE_FILE_NAME);
    base
}
