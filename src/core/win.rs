//! Win detection
//!
//! A board wins when any row, column, or either diagonal is fully marked.
//! Lines are precomputed as bitmasks over the 25 cell positions.

use std::fmt;

use super::board::{BOARD_SIZE, Board};

/// A row, column, or diagonal of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinLine {
    Row(usize),
    Column(usize),
    /// Indices 0, 6, 12, 18, 24
    MainDiagonal,
    /// Indices 4, 8, 12, 16, 20
    AntiDiagonal,
}

impl WinLine {
    /// Every line that can win, rows first
    pub const ALL: [Self; 12] = [
        Self::Row(0),
        Self::Row(1),
        Self::Row(2),
        Self::Row(3),
        Self::Row(4),
        Self::Column(0),
        Self::Column(1),
        Self::Column(2),
        Self::Column(3),
        Self::Column(4),
        Self::MainDiagonal,
        Self::AntiDiagonal,
    ];

    /// Linear cell indices covered by this line
    #[must_use]
    pub fn indices(self) -> [usize; BOARD_SIZE] {
        std::array::from_fn(|k| match self {
            Self::Row(r) => r * BOARD_SIZE + k,
            Self::Column(c) => k * BOARD_SIZE + c,
            Self::MainDiagonal => k * (BOARD_SIZE + 1),
            Self::AntiDiagonal => (k + 1) * (BOARD_SIZE - 1),
        })
    }

    /// Bitmask with one bit per covered cell
    #[must_use]
    pub fn mask(self) -> u32 {
        self.indices().iter().fold(0, |mask, &i| mask | (1 << i))
    }

    /// Whether every cell on this line is marked
    #[must_use]
    pub fn is_complete(self, board: &Board) -> bool {
        let mask = self.mask();
        board.marked_mask() & mask == mask
    }

    /// Whether this line passes through the given cell
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.indices().contains(&index)
    }
}

impl fmt::Display for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(r) => write!(f, "row {}", r + 1),
            Self::Column(c) => write!(f, "column {}", c + 1),
            Self::MainDiagonal => write!(f, "diagonal"),
            Self::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Whether the board has at least one fully marked line
///
/// # Examples
/// ```
/// use bingo_board::core::{has_win, Board, Cell};
///
/// let mut board = Board::from_cells((0..25).map(|i| Cell::new(i.to_string())).collect()).unwrap();
/// assert!(!has_win(&board));
///
/// for i in [0, 1, 2, 3, 4] {
///     board.toggle(i).unwrap();
/// }
/// assert!(has_win(&board));
/// ```
#[must_use]
pub fn has_win(board: &Board) -> bool {
    let marked = board.marked_mask();
    WinLine::ALL.iter().any(|line| {
        let mask = line.mask();
        marked & mask == mask
    })
}

/// All fully marked lines, in [`WinLine::ALL`] order
#[must_use]
pub fn winning_lines(board: &Board) -> Vec<WinLine> {
    WinLine::ALL
        .into_iter()
        .filter(|line| line.is_complete(board))
        .collect()
}
