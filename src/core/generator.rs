//! Board generation
//!
//! Draws 25 distinct pool entries in shuffled order to build a fresh board.

use tracing::debug;

use super::board::{BOARD_CELLS, Board, Cell};
use super::error::BoardError;
use super::pool::WordPool;
use super::shuffle::Shuffler;

/// Builds fresh boards from a word pool
pub struct BoardGenerator;

impl BoardGenerator {
    /// Generate a board with every cell unmarked
    ///
    /// The pool is copied before shuffling so the caller's word order is
    /// never disturbed.
    ///
    /// # Errors
    /// Returns `BoardError::InsufficientWords` if the pool holds fewer than
    /// 25 words.
    ///
    /// # Examples
    /// ```
    /// use bingo_board::core::{BoardGenerator, FisherYates, WordPool};
    ///
    /// let pool = WordPool::new((0..30).map(|i| format!("word {i}")), None);
    /// let board = BoardGenerator::generate(&pool, &mut FisherYates::thread_local()).unwrap();
    /// assert_eq!(board.cells().len(), 25);
    /// assert_eq!(board.marked_count(), 0);
    /// ```
    pub fn generate<S: Shuffler>(pool: &WordPool, shuffler: &mut S) -> Result<Board, BoardError> {
        if !pool.can_fill_board() {
            return Err(BoardError::InsufficientWords {
                required: BOARD_CELLS,
                available: pool.len(),
            });
        }

        let mut words = pool.words().to_vec();
        shuffler.shuffle(&mut words);
        words.truncate(BOARD_CELLS);

        debug!(pool_size = pool.len(), "Generated board");
        Board::from_cells(words.into_iter().map(Cell::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FisherYates;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn pool_of(n: usize) -> WordPool {
        WordPool::new((0..n).map(|i| format!("word {i}")), Some("Test"))
    }

    fn shuffler() -> FisherYates<StdRng> {
        FisherYates::new(StdRng::seed_from_u64(99))
    }

    /// Leaves the sequence in its original order
    struct Identity;

    impl Shuffler for Identity {
        fn shuffle<T>(&mut self, _items: &mut [T]) {}
    }

    #[test]
    fn generates_25_unmarked_unique_cells_from_pool() {
        let pool = pool_of(60);
        let board = BoardGenerator::generate(&pool, &mut shuffler()).unwrap();

        assert_eq!(board.cells().len(), 25);
        assert!(board.cells().iter().all(|c| !c.marked));

        let texts: FxHashSet<&str> = board.cells().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts.len(), 25, "cells must not repeat");
        assert!(texts.iter().all(|t| pool.words().iter().any(|w| w == t)));
    }

    #[test]
    fn exactly_25_words_uses_all_of_them() {
        let pool = pool_of(25);
        let board = BoardGenerator::generate(&pool, &mut shuffler()).unwrap();

        let mut texts: Vec<&str> = board.cells().iter().map(|c| c.text.as_str()).collect();
        let mut words: Vec<&str> = pool.words().iter().map(String::as_str).collect();
        texts.sort_unstable();
        words.sort_unstable();
        assert_eq!(texts, words);
    }

    #[test]
    fn takes_first_25_in_shuffled_order() {
        let pool = pool_of(30);
        let board = BoardGenerator::generate(&pool, &mut Identity).unwrap();
        for (i, cell) in board.cells().iter().enumerate() {
            assert_eq!(cell.text, format!("word {i}"));
        }
    }

    #[test]
    fn does_not_mutate_pool() {
        let pool = pool_of(40);
        let before = pool.clone();
        BoardGenerator::generate(&pool, &mut shuffler()).unwrap();
        assert_eq!(pool, before);
    }

    #[test]
    fn too_few_words_fails() {
        for n in [0, 1, 24] {
            let pool = pool_of(n);
            assert_eq!(
                BoardGenerator::generate(&pool, &mut shuffler()),
                Err(BoardError::InsufficientWords {
                    required: 25,
                    available: n,
                })
            );
        }
    }
}
