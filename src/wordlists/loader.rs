//! Word pool loading
//!
//! Resolves where a board's words come from: a published config document,
//! the list an admin stored locally, or the embedded defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::DEFAULT_WORDS;
use crate::core::{BOARD_CELLS, WordPool};
use crate::store::{BOARD_NAME_KEY, Storage, StoreError, WORDS_KEY};

/// Published board configuration
///
/// `{ "boardName": "...", "words": ["...", ...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    #[serde(default)]
    pub board_name: Option<String>,
    pub words: Vec<String>,
}

impl ConfigDocument {
    /// Document describing an existing pool
    #[must_use]
    pub fn from_pool(pool: &WordPool) -> Self {
        Self {
            board_name: pool.name().map(str::to_string),
            words: pool.words().to_vec(),
        }
    }

    /// Convert into a pool, requiring enough unique words for a board
    ///
    /// # Errors
    /// Returns `ConfigLoadError::InsufficientWords` if fewer than 25 unique
    /// words remain after deduplication.
    pub fn into_pool(self) -> Result<WordPool, ConfigLoadError> {
        let pool = WordPool::new(self.words, self.board_name.as_deref());
        if pool.can_fill_board() {
            Ok(pool)
        } else {
            Err(ConfigLoadError::InsufficientWords {
                required: BOARD_CELLS,
                available: pool.len(),
            })
        }
    }
}

/// Failure to obtain a usable word pool from a configured source
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Word list has {available} unique words, need at least {required}")]
    InsufficientWords { required: usize, available: usize },

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Where the active word pool came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolSource {
    /// A config document on disk
    ConfigFile(PathBuf),
    /// The admin-stored list in local storage
    Stored,
    /// The embedded fallback list
    Default,
}

impl fmt::Display for PoolSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigFile(path) => write!(f, "config {}", path.display()),
            Self::Stored => write!(f, "saved word list"),
            Self::Default => write!(f, "default word list"),
        }
    }
}

/// The embedded fallback pool, with no board name
#[must_use]
pub fn default_pool() -> WordPool {
    WordPool::new(DEFAULT_WORDS.iter().copied(), None)
}

/// Parse a config document from JSON text
///
/// # Errors
/// Returns an error if the JSON is malformed or holds too few words.
///
/// # Examples
/// ```
/// use bingo_board::wordlists::loader::parse_config_document;
///
/// let words: Vec<String> = (0..25).map(|i| format!("\"w{i}\"")).collect();
/// let json = format!(r#"{{"boardName": "Demo", "words": [{}]}}"#, words.join(","));
/// let pool = parse_config_document(&json).unwrap();
/// assert_eq!(pool.display_name(), "Demo");
/// ```
pub fn parse_config_document(json: &str) -> Result<WordPool, ConfigLoadError> {
    let document: ConfigDocument = serde_json::from_str(json)?;
    document.into_pool()
}

/// Load a config document from a file
///
/// # Errors
/// Returns an error if the file cannot be read, is not a valid config
/// document, or holds too few words.
pub fn load_config_document<P: AsRef<Path>>(path: P) -> Result<WordPool, ConfigLoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_document(&content)
}

/// Load the admin-stored word list, `Ok(None)` if none has been saved
///
/// # Errors
/// Returns an error if the stored entries cannot be read or parsed, or the
/// stored list holds too few words.
pub fn load_stored_pool<B: Storage>(storage: &B) -> Result<Option<WordPool>, ConfigLoadError> {
    let Some(json) = storage.get(WORDS_KEY)? else {
        return Ok(None);
    };
    let words: Vec<String> = serde_json::from_str(&json)?;
    let board_name = storage.get(BOARD_NAME_KEY)?;

    ConfigDocument { board_name, words }.into_pool().map(Some)
}

/// Pick the word pool for this session
///
/// An explicit config document wins, then the admin-stored list, then the
/// embedded defaults. A failing source is logged and skipped; this never
/// fails.
pub fn resolve_pool<B: Storage>(config: Option<&Path>, storage: &B) -> (WordPool, PoolSource) {
    if let Some(path) = config {
        match load_config_document(path) {
            Ok(pool) => {
                info!(path = %path.display(), words = pool.len(), "Loaded board config");
                return (pool, PoolSource::ConfigFile(path.to_path_buf()));
            }
            Err(e) => warn!(error = %e, "Config load failed, using default words"),
        }
        return (default_pool(), PoolSource::Default);
    }

    match load_stored_pool(storage) {
        Ok(Some(pool)) => {
            info!(words = pool.len(), "Loaded saved word list");
            return (pool, PoolSource::Stored);
        }
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Saved word list unusable, using default words"),
    }

    (default_pool(), PoolSource::Default)
}
