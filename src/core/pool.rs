//! Candidate word pool
//!
//! A `WordPool` holds the deduplicated words a board is drawn from, plus an
//! optional display name for the board.

use rustc_hash::FxHashSet;

use super::board::BOARD_CELLS;

/// Display name used when a pool carries no (or a blank) board name
pub const FALLBACK_BOARD_NAME: &str = "Travel Bingo";

/// Ordered set of unique candidate words
///
/// Words are compared case-sensitively; "Bridge" and "bridge" are distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
    name: Option<String>,
}

impl WordPool {
    /// Create a pool, dropping repeated words but keeping first-seen order
    ///
    /// A blank name is treated as no name.
    ///
    /// # Examples
    /// ```
    /// use bingo_board::core::WordPool;
    ///
    /// let pool = WordPool::new(["Bridge", "River", "Bridge"], Some("City Walk"));
    /// assert_eq!(pool.words(), ["Bridge", "River"]);
    /// assert_eq!(pool.display_name(), "City Walk");
    /// ```
    pub fn new<I, S>(words: I, name: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|word: &String| seen.insert(word.clone()))
            .collect();

        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Self { words, name }
    }

    /// Words in pool order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Board name as configured, if any
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Board name to show, falling back to [`FALLBACK_BOARD_NAME`]
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(FALLBACK_BOARD_NAME)
    }

    /// Whether the pool holds enough words to fill a board
    #[must_use]
    pub fn can_fill_board(&self) -> bool {
        self.words.len() >= BOARD_CELLS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let pool = WordPool::new(["b", "a", "b", "c", "a"], None);
        assert_eq!(pool.words(), ["b", "a", "c"]);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let pool = WordPool::new(["Bridge", "bridge", "BRIDGE"], None);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn missing_or_blank_name_falls_back() {
        let unnamed = WordPool::new(["a"], None);
        assert_eq!(unnamed.name(), None);
        assert_eq!(unnamed.display_name(), FALLBACK_BOARD_NAME);

        let blank = WordPool::new(["a"], Some("   "));
        assert_eq!(blank.name(), None);
        assert_eq!(blank.display_name(), FALLBACK_BOARD_NAME);
    }

    #[test]
    fn name_is_trimmed() {
        let pool = WordPool::new(["a"], Some("  Road Trip "));
        assert_eq!(pool.name(), Some("Road Trip"));
    }

    #[test]
    fn can_fill_board_threshold() {
        let words: Vec<String> = (0..24).map(|i| format!("w{i}")).collect();
        assert!(!WordPool::new(words.clone(), None).can_fill_board());

        let mut words = words;
        words.push("w24".to_string());
        assert!(WordPool::new(words, None).can_fill_board());
    }

    #[test]
    fn empty_pool() {
        let pool = WordPool::new(Vec::<String>::new(), None);
        assert!(pool.is_empty());
        assert!(!pool.can_fill_board());
    }
}
