//! Word-list admin commands
//!
//! Save a new word list for the player side, show the stored one, or emit
//! a config document for publishing.

use crate::admin::{AdminEditor, AdminError, export_config};
use crate::core::FALLBACK_BOARD_NAME;
use crate::store::Storage;

/// Outcome of an admin save, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSaveResult {
    pub word_count: usize,
    pub board_name: String,
}

/// Validate and store a word list and board name
///
/// # Errors
///
/// Returns the validation message ("No words provided.", "You must provide
/// at least 25 words.") or a storage failure.
pub fn save_word_list<B: Storage>(
    storage: B,
    text: &str,
    board_name: &str,
) -> Result<AdminSaveResult, AdminError> {
    let mut editor = AdminEditor::new(storage);
    let pool = editor.save(text, board_name)?;
    Ok(AdminSaveResult {
        word_count: pool.len(),
        board_name: pool.display_name().to_string(),
    })
}

/// Stored word list as editor text (one word per line) and board name
///
/// # Errors
///
/// Returns an error if storage cannot be read.
pub fn stored_word_list<B: Storage>(storage: B) -> Result<(String, String), AdminError> {
    let document = AdminEditor::new(storage).load()?;
    let name = document
        .board_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_BOARD_NAME.to_string());
    Ok((document.words.join("\n"), name))
}

/// Config document JSON for the given word list
///
/// # Errors
///
/// Returns the same validation errors as [`save_word_list`].
pub fn export_word_list(text: &str, board_name: &str) -> Result<String, AdminError> {
    export_config(text, board_name)
}
