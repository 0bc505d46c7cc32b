//! Word-list editor
//!
//! Turns free-form admin input into a validated word pool and stores it
//! where the player side picks it up, or renders it as a config document
//! for publishing.

use thiserror::Error;
use tracing::info;

use crate::core::{BOARD_CELLS, WordPool};
use crate::store::{BOARD_NAME_KEY, Storage, StoreError, WORDS_KEY};
use crate::wordlists::ConfigDocument;

/// Validation and storage failures shown to the admin
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("No words provided.")]
    NoWords,

    #[error("You must provide at least {required} words.")]
    InsufficientWords { required: usize, available: usize },

    #[error("Failed to save: {0}")]
    Storage(#[from] StoreError),

    #[error("Failed to encode word list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Split admin input on newlines or commas, trimming and deduplicating
///
/// # Examples
/// ```
/// use bingo_board::admin::parse_word_list;
///
/// let words = parse_word_list("Red Car, Bridge\n\n  River ,Bridge");
/// assert_eq!(words, ["Red Car", "Bridge", "River"]);
/// ```
#[must_use]
pub fn parse_word_list(text: &str) -> Vec<String> {
    let entries = text
        .split(['\n', ',', '\r'])
        .map(str::trim)
        .filter(|w| !w.is_empty());
    WordPool::new(entries, None).words().to_vec()
}

/// Parse and validate admin input into a pool
///
/// # Errors
/// Returns `AdminError::NoWords` for blank input and
/// `AdminError::InsufficientWords` for fewer than 25 unique words.
pub fn build_pool(text: &str, board_name: &str) -> Result<WordPool, AdminError> {
    if text.trim().is_empty() {
        return Err(AdminError::NoWords);
    }

    let pool = WordPool::new(parse_word_list(text), Some(board_name));
    if !pool.can_fill_board() {
        return Err(AdminError::InsufficientWords {
            required: BOARD_CELLS,
            available: pool.len(),
        });
    }
    Ok(pool)
}

/// Render admin input as a pretty-printed config document
///
/// # Errors
/// Returns the same validation errors as [`build_pool`].
pub fn export_config(text: &str, board_name: &str) -> Result<String, AdminError> {
    let pool = build_pool(text, board_name)?;
    Ok(serde_json::to_string_pretty(&ConfigDocument::from_pool(&pool))?)
}

/// Reads and writes the admin-authored word list in local storage
pub struct AdminEditor<B: Storage> {
    storage: B,
}

impl<B: Storage> AdminEditor<B> {
    pub const fn new(storage: B) -> Self {
        Self { storage }
    }

    pub fn into_inner(self) -> B {
        self.storage
    }

    /// Currently stored words and board name, for pre-filling the editor
    ///
    /// Unparseable stored words read as an empty list.
    ///
    /// # Errors
    /// Returns an error if storage cannot be read.
    pub fn load(&self) -> Result<ConfigDocument, AdminError> {
        let words: Vec<String> = self
            .storage
            .get(WORDS_KEY)?
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();
        let board_name = self.storage.get(BOARD_NAME_KEY)?;
        Ok(ConfigDocument { board_name, words })
    }

    /// Validate and store a new word list and board name
    ///
    /// Nothing is written when validation fails.
    ///
    /// # Errors
    /// Returns a validation error, or a storage error if writing fails.
    pub fn save(&mut self, text: &str, board_name: &str) -> Result<WordPool, AdminError> {
        let pool = build_pool(text, board_name)?;

        self.storage
            .set(WORDS_KEY, &serde_json::to_string(pool.words())?)?;
        self.storage
            .set(BOARD_NAME_KEY, pool.name().unwrap_or_default())?;

        info!(words = pool.len(), name = pool.display_name(), "Saved word list");
        Ok(pool)
    }
}
