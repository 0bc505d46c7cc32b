//! Core domain types for the bingo board
//!
//! Pure board model, word pool, shuffling, generation, and win detection.
//! Nothing in here touches storage or the terminal.

mod board;
mod error;
mod generator;
mod pool;
mod shuffle;
mod win;

pub use board::{BOARD_CELLS, BOARD_SIZE, Board, Cell};
pub use error::BoardError;
pub use generator::BoardGenerator;
pub use pool::{FALLBACK_BOARD_NAME, WordPool};
pub use shuffle::{FisherYates, Shuffler};
pub use win::{WinLine, has_win, winning_lines};
