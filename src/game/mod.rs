//! Game orchestration
//!
//! The controller owns the live board and routes UI events through
//! persistence and win detection; observers receive render and win signals.

mod controller;
mod observer;

pub use controller::{GameController, GameError, GameState};
pub use observer::{GameObserver, Signal};
