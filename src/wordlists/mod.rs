//! Word sources for bingo boards
//!
//! The embedded fallback list plus loaders for config documents and
//! admin-stored word lists.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use loader::{ConfigDocument, ConfigLoadError, PoolSource, default_pool, resolve_pool};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BOARD_CELLS;

    #[test]
    fn default_count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn default_list_can_fill_a_board() {
        assert!(DEFAULT_WORDS_COUNT >= BOARD_CELLS);
        assert_eq!(DEFAULT_WORDS_COUNT, 30, "Expected the 30 travel words");
    }

    #[test]
    fn default_words_are_unique_and_trimmed() {
        let unique: std::collections::HashSet<_> = DEFAULT_WORDS.iter().collect();
        assert_eq!(unique.len(), DEFAULT_WORDS.len());

        for &word in DEFAULT_WORDS {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim(), "Word '{word}' has stray whitespace");
        }
    }

    #[test]
    fn default_words_keep_spaces() {
        assert!(DEFAULT_WORDS.contains(&"Person in a Hat"));
        assert!(DEFAULT_WORDS.contains(&"Red Car"));
    }
}
