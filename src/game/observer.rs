//! Signals emitted to the presentation layer

use std::sync::mpsc::Sender;

use crate::core::{Cell, WinLine};

/// Receives board updates and win notifications from the controller
pub trait GameObserver {
    /// The board changed and should be redrawn
    fn on_board_rendered(&mut self, cells: &[Cell]);

    /// A winning line was just completed
    fn on_win(&mut self, lines: &[WinLine]);
}

/// Owned form of an observer callback, for queuing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    BoardRendered(Vec<Cell>),
    Win(Vec<WinLine>),
}

// A hung-up receiver just means nobody is listening any more
impl GameObserver for Sender<Signal> {
    fn on_board_rendered(&mut self, cells: &[Cell]) {
        let _ = self.send(Signal::BoardRendered(cells.to_vec()));
    }

    fn on_win(&mut self, lines: &[WinLine]) {
        let _ = self.send(Signal::Win(lines.to_vec()));
    }
}
