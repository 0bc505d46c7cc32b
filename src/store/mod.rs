//! Board persistence
//!
//! A small key-value abstraction over the durable medium, and the
//! `StateStore` that saves and restores boards through it.

mod backend;
mod error;
mod state;

pub use backend::{FileStorage, MemoryStorage, Storage};
pub use error::StoreError;
pub use state::{BOARD_NAME_KEY, StateStore, STATE_KEY, WORDS_KEY};
