//! Board save/restore
//!
//! Boards are stored as a JSON array of exactly 25 `{ "text", "marked" }`
//! objects in row-major order under [`STATE_KEY`].

use tracing::{debug, warn};

use super::backend::Storage;
use super::error::StoreError;
use crate::core::{BOARD_CELLS, Board, Cell};

/// Key holding the serialized board
pub const STATE_KEY: &str = "bingoState";

/// Key holding the admin-authored word list (JSON string array)
pub const WORDS_KEY: &str = "bingoWords";

/// Key holding the admin-authored board name (plain string)
pub const BOARD_NAME_KEY: &str = "bingoBoardName";

/// Saves and restores boards through a key-value medium
///
/// Holds no copy of the board; every call reads or writes the medium.
#[derive(Debug)]
pub struct StateStore<B: Storage> {
    storage: B,
}

impl<B: Storage> StateStore<B> {
    pub const fn new(storage: B) -> Self {
        Self { storage }
    }

    /// The underlying medium
    pub const fn storage(&self) -> &B {
        &self.storage
    }

    pub const fn storage_mut(&mut self) -> &mut B {
        &mut self.storage
    }

    /// Persist every cell of the board
    ///
    /// Best effort: failures are logged and otherwise ignored, since the
    /// live board is still held in memory.
    pub fn save(&mut self, board: &Board) {
        match self.try_save(board) {
            Ok(()) => debug!(marked = board.marked_count(), "Saved board state"),
            Err(e) => warn!(error = %e, "Failed to save board state"),
        }
    }

    /// Persist every cell of the board, reporting failures
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn try_save(&mut self, board: &Board) -> Result<(), StoreError> {
        let json = serde_json::to_string(board.cells())?;
        self.storage.set(STATE_KEY, &json)
    }

    /// Load the saved board, if there is a usable one
    ///
    /// Missing, unreadable, unparseable, or wrong-length state all come back
    /// as `None`.
    pub fn restore(&self) -> Option<Board> {
        match self.try_restore() {
            Ok(board) => board,
            Err(e) => {
                warn!(error = %e, "Ignoring saved board state");
                None
            }
        }
    }

    /// Load the saved board, distinguishing "nothing saved" from bad data
    ///
    /// # Errors
    /// Returns `StoreError::CorruptState` for wrong-length data, or the
    /// underlying read/parse error.
    pub fn try_restore(&self) -> Result<Option<Board>, StoreError> {
        let Some(json) = self.storage.get(STATE_KEY)? else {
            return Ok(None);
        };

        let cells: Vec<Cell> = serde_json::from_str(&json)?;
        if cells.len() != BOARD_CELLS {
            return Err(StoreError::CorruptState(format!(
                "expected {BOARD_CELLS} cells, found {}",
                cells.len()
            )));
        }

        Board::from_cells(cells)
            .map(Some)
            .map_err(|e| StoreError::CorruptState(e.to_string()))
    }

    /// Forget the saved board
    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove(STATE_KEY) {
            warn!(error = %e, "Failed to clear board state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    /// Medium that refuses every write
    struct ReadOnly;

    impl Storage for ReadOnly {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("read-only")))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("read-only")))
        }
    }

    fn sample_board() -> Board {
        let cells = (0..BOARD_CELLS)
            .map(|i| Cell {
                text: format!("Word \"{i}\""),
                marked: i % 3 == 0,
            })
            .collect();
        Board::from_cells(cells).unwrap()
    }

    fn store_with(json: &str) -> StateStore<MemoryStorage> {
        let mut storage = MemoryStorage::new();
        storage.set(STATE_KEY, json).unwrap();
        StateStore::new(storage)
    }

    #[test]
    fn restore_returns_what_was_saved() {
        let mut store = StateStore::new(MemoryStorage::new());
        let board = sample_board();
        store.save(&board);
        assert_eq!(store.restore(), Some(board));
    }

    #[test]
    fn saved_format_is_array_of_text_and_marked() {
        let mut store = StateStore::new(MemoryStorage::new());
        store.save(&sample_board());

        let raw = store.storage().get(STATE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 25);
        assert_eq!(items[0]["text"], "Word \"0\"");
        assert_eq!(items[0]["marked"], true);
        assert_eq!(items[1]["marked"], false);
    }

    #[test]
    fn restore_empty_store_is_none() {
        let store = StateStore::new(MemoryStorage::new());
        assert_eq!(store.restore(), None);
        assert!(store.try_restore().unwrap().is_none());
    }

    #[test]
    fn restore_unparseable_is_none() {
        let store = store_with("{not json");
        assert_eq!(store.restore(), None);
        assert!(matches!(store.try_restore(), Err(StoreError::Json(_))));
    }

    #[test]
    fn restore_wrong_shape_is_none() {
        let store = store_with(r#"{"text": "a", "marked": false}"#);
        assert_eq!(store.restore(), None);

        let store = store_with(r#"[{"text": 1}]"#);
        assert_eq!(store.restore(), None);
    }

    #[test]
    fn restore_wrong_length_is_corrupt() {
        let cells: Vec<Cell> = (0..24).map(|i| Cell::new(i.to_string())).collect();
        let store = store_with(&serde_json::to_string(&cells).unwrap());
        assert_eq!(store.restore(), None);
        assert!(matches!(
            store.try_restore(),
            Err(StoreError::CorruptState(_))
        ));

        let store = store_with("[]");
        assert_eq!(store.restore(), None);
    }

    #[test]
    fn save_failure_is_swallowed() {
        let mut store = StateStore::new(ReadOnly);
        store.save(&sample_board());
        assert!(store.try_save(&sample_board()).is_err());
        store.clear();
    }

    #[test]
    fn clear_forgets_board() {
        let mut store = StateStore::new(MemoryStorage::new());
        store.save(&sample_board());
        store.clear();
        assert_eq!(store.restore(), None);
    }
}
