//! Bingo Board
//!
//! A single-player 5×5 bingo board: draw 25 words from a pool, mark cells,
//! and detect completed rows, columns, and diagonals. Board state persists
//! between sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use bingo_board::core::{BoardGenerator, FisherYates, WordPool, has_win};
//!
//! let pool = WordPool::new((1..=30).map(|i| format!("Word {i}")), Some("Demo"));
//! let mut board = BoardGenerator::generate(&pool, &mut FisherYates::thread_local()).unwrap();
//!
//! for index in [0, 6, 12, 18, 24] {
//!     board.toggle(index).unwrap();
//! }
//! assert!(has_win(&board));
//! ```

// Core domain types
pub mod core;

// Persistence of board state and word lists
pub mod store;

// Word list sources
pub mod wordlists;

// Game state machine
pub mod game;

// Word list editor
pub mod admin;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
