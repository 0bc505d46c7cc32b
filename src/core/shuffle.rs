//! Sequence shuffling
//!
//! Defines the `Shuffler` trait and the Fisher–Yates implementation used to
//! draw boards.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Produces a uniformly random permutation of a slice, in place
pub trait Shuffler {
    /// Permute `items` in place
    ///
    /// Empty and single-element slices are left unchanged.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Fisher–Yates shuffle driven by any `rand` generator
///
/// For `i` from `len - 1` down to 1, draws `j` uniformly from `0..=i` and
/// swaps positions `i` and `j`.
#[derive(Debug, Clone)]
pub struct FisherYates<R: Rng> {
    rng: R,
}

impl<R: Rng> FisherYates<R> {
    /// Create a shuffler around the given generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl FisherYates<ThreadRng> {
    /// Shuffler backed by the thread-local generator
    #[must_use]
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl Default for FisherYates<ThreadRng> {
    fn default() -> Self {
        Self::thread_local()
    }
}

impl<R: Rng> Shuffler for FisherYates<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.random_range(0..=i);
            items.swap(i, j);
        }
    }
}
