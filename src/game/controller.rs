//! Board state machine
//!
//! `Uninitialized -> Ready` on start (restore, else generate and save).
//! Every toggle saves before evaluating wins, so a win is only ever reported
//! for persisted state. `Won` is derived: a toggle that breaks the last
//! complete line drops back to `Ready`.

use thiserror::Error;
use tracing::{debug, info};

use super::observer::GameObserver;
use crate::core::{Board, BoardError, BoardGenerator, Shuffler, WinLine, WordPool, winning_lines};
use crate::store::{StateStore, Storage};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No board loaded yet
    Uninitialized,
    /// Board in play, no win pending
    Ready,
    /// A line was completed and the notification is showing
    Won,
}

/// Errors from controller events
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Game has not been started")]
    NotStarted,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Owns the live board and drives it from UI events
pub struct GameController<B: Storage, S: Shuffler> {
    pool: WordPool,
    store: StateStore<B>,
    shuffler: S,
    board: Option<Board>,
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl<B: Storage, S: Shuffler> GameController<B, S> {
    /// Create an unstarted controller
    ///
    /// # Parameters
    /// - `pool`: Words new boards are drawn from
    /// - `store`: Where the board is persisted
    /// - `shuffler`: Randomness for board generation
    pub fn new(pool: WordPool, store: StateStore<B>, shuffler: S) -> Self {
        Self {
            pool,
            store,
            shuffler,
            board: None,
            state: GameState::Uninitialized,
            observers: Vec::new(),
        }
    }

    /// Register an observer for render and win signals
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The live board, once started
    #[must_use]
    pub const fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    #[must_use]
    pub const fn store(&self) -> &StateStore<B> {
        &self.store
    }

    /// Lines currently complete on the live board
    #[must_use]
    pub fn winning_lines(&self) -> Vec<WinLine> {
        self.board.as_ref().map(winning_lines).unwrap_or_default()
    }

    /// Load the saved board, or generate and save a fresh one
    ///
    /// A restored board starts `Ready` even if it already holds a line.
    /// Calling this on a started controller changes nothing.
    ///
    /// # Errors
    /// Returns `BoardError::InsufficientWords` if nothing was saved and the
    /// pool cannot fill a board.
    pub fn start(&mut self) -> Result<GameState, GameError> {
        if self.state != GameState::Uninitialized {
            return Ok(self.state);
        }

        let board = if let Some(board) = self.store.restore() {
            info!(marked = board.marked_count(), "Restored saved board");
            board
        } else {
            let board = BoardGenerator::generate(&self.pool, &mut self.shuffler)?;
            info!(name = self.pool.display_name(), "Generated new board");
            self.store.save(&board);
            board
        };

        self.board = Some(board);
        self.state = GameState::Ready;
        self.render();
        Ok(self.state)
    }

    /// Toggle the mark on one cell, save, and re-evaluate wins
    ///
    /// # Errors
    /// Returns `GameError::NotStarted` before [`start`](Self::start), or
    /// `BoardError::CellOutOfRange` for an index past 24 (nothing changes).
    pub fn on_cell_click(&mut self, index: usize) -> Result<GameState, GameError> {
        let board = self.board.as_mut().ok_or(GameError::NotStarted)?;
        let marked = board.toggle(index)?;
        debug!(index, marked, "Toggled cell");

        self.store.save(board);
        let lines = winning_lines(board);
        self.render();

        self.state = match (self.state, lines.is_empty()) {
            (_, true) => GameState::Ready,
            (GameState::Won, false) => GameState::Won,
            (_, false) => {
                info!(lines = ?lines, "Bingo!");
                for observer in &mut self.observers {
                    observer.on_win(&lines);
                }
                GameState::Won
            }
        };
        Ok(self.state)
    }

    /// Discard the board and draw a new one
    ///
    /// # Errors
    /// Returns `GameError::NotStarted` before start, or
    /// `BoardError::InsufficientWords` (the current board is kept).
    pub fn on_generate_click(&mut self) -> Result<GameState, GameError> {
        if self.board.is_none() {
            return Err(GameError::NotStarted);
        }

        let board = BoardGenerator::generate(&self.pool, &mut self.shuffler)?;
        self.store.save(&board);
        self.board = Some(board);
        self.state = GameState::Ready;
        debug!("Regenerated board");

        self.render();
        Ok(self.state)
    }

    /// Clear every mark and save
    ///
    /// # Errors
    /// Returns `GameError::NotStarted` before start.
    pub fn on_reset_click(&mut self) -> Result<GameState, GameError> {
        let board = self.board.as_mut().ok_or(GameError::NotStarted)?;
        board.clear_marks();
        self.store.save(board);
        self.state = GameState::Ready;
        debug!("Reset marks");

        self.render();
        Ok(self.state)
    }

    /// Acknowledge the win notification without touching the board
    pub fn on_close_notification(&mut self) -> GameState {
        if self.state == GameState::Won {
            self.state = GameState::Ready;
        }
        self.state
    }

    fn render(&mut self) {
        if let Some(board) = &self.board {
            for observer in &mut self.observers {
                observer.on_board_rendered(board.cells());
            }
        }
    }
}
