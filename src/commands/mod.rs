//! Command implementations

pub mod admin;
pub mod show;
pub mod simple;

pub use admin::{AdminSaveResult, export_word_list, save_word_list, stored_word_list};
pub use show::show_board;
pub use simple::{SimpleCommand, run_simple};
