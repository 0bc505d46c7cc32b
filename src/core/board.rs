//! Bingo board representation
//!
//! A board is exactly 25 cells laid out row-major on a 5×5 grid: the cell at
//! linear index `i` sits at row `i / 5`, column `i % 5`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::BoardError;

/// Width and height of the grid
pub const BOARD_SIZE: usize = 5;

/// Number of cells on a board
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// One board position: display text plus a marked flag
///
/// Serialized as `{ "text": ..., "marked": ... }`; a missing `marked`
/// reads as unmarked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    #[serde(default)]
    pub marked: bool,
}

impl Cell {
    /// Create an unmarked cell
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marked: false,
        }
    }
}

/// The full 5×5 playing surface
///
/// Always holds exactly [`BOARD_CELLS`] cells. Cells are addressed by
/// position, never by text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Build a board from an ordered list of cells
    ///
    /// # Errors
    /// Returns `BoardError::WrongCellCount` unless exactly 25 cells are given.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, BoardError> {
        let cells: [Cell; BOARD_CELLS] = cells
            .try_into()
            .map_err(|rejected: Vec<Cell>| BoardError::WrongCellCount(rejected.len()))?;
        Ok(Self { cells })
    }

    /// All cells in row-major order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by linear index
    #[inline]
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Get a cell by grid coordinates
    #[inline]
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            self.cells.get(row * BOARD_SIZE + col)
        } else {
            None
        }
    }

    /// Flip the marked flag of one cell, returning the new flag
    ///
    /// # Errors
    /// Returns `BoardError::CellOutOfRange` if `index >= 25`; the board is
    /// left untouched.
    pub fn toggle(&mut self, index: usize) -> Result<bool, BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::CellOutOfRange(index))?;
        cell.marked = !cell.marked;
        Ok(cell.marked)
    }

    /// Clear every mark, keeping the words in place
    pub fn clear_marks(&mut self) {
        for cell in &mut self.cells {
            cell.marked = false;
        }
    }

    /// Number of marked cells
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.marked).count()
    }

    /// Marks as a bitmask, bit `i` set when cell `i` is marked
    #[must_use]
    pub fn marked_mask(&self) -> u32 {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.marked)
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| {
                    let mark = if cell.marked { 'X' } else { ' ' };
                    format!("[{mark}] {}", cell.text)
                })
                .collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Board whose cells are labelled "0".."24", all unmarked
    pub(crate) fn numbered_board() -> Board {
        let cells = (0..BOARD_CELLS).map(|i| Cell::new(i.to_string())).collect();
        Board::from_cells(cells).unwrap()
    }

    #[test]
    fn from_cells_accepts_exactly_25() {
        let board = numbered_board();
        assert_eq!(board.cells().len(), 25);
        assert_eq!(board.marked_count(), 0);
    }

    #[test]
    fn from_cells_rejects_wrong_length() {
        let short: Vec<Cell> = (0..24).map(|i| Cell::new(i.to_string())).collect();
        assert_eq!(
            Board::from_cells(short),
            Err(BoardError::WrongCellCount(24))
        );

        let long: Vec<Cell> = (0..26).map(|i| Cell::new(i.to_string())).collect();
        assert_eq!(Board::from_cells(long), Err(BoardError::WrongCellCount(26)));

        assert_eq!(
            Board::from_cells(Vec::new()),
            Err(BoardError::WrongCellCount(0))
        );
    }

    #[test]
    fn row_major_addressing() {
        let board = numbered_board();
        assert_eq!(board.cell_at(0, 0).unwrap().text, "0");
        assert_eq!(board.cell_at(1, 0).unwrap().text, "5");
        assert_eq!(board.cell_at(2, 3).unwrap().text, "13");
        assert_eq!(board.cell_at(4, 4).unwrap().text, "24");
        assert!(board.cell_at(5, 0).is_none());
        assert!(board.cell_at(0, 5).is_none());
    }

    #[test]
    fn toggle_flips_one_cell() {
        let mut board = numbered_board();
        assert_eq!(board.toggle(7), Ok(true));
        assert!(board.cell(7).unwrap().marked);
        assert_eq!(board.marked_count(), 1);

        assert_eq!(board.toggle(7), Ok(false));
        assert_eq!(board.marked_count(), 0);
    }

    #[test]
    fn toggle_out_of_range_leaves_board_alone() {
        let mut board = numbered_board();
        let before = board.clone();
        assert_eq!(board.toggle(25), Err(BoardError::CellOutOfRange(25)));
        assert_eq!(board, before);
    }

    #[test]
    fn clear_marks_keeps_text() {
        let mut board = numbered_board();
        for i in [0, 3, 12, 24] {
            board.toggle(i).unwrap();
        }
        board.clear_marks();
        assert_eq!(board.marked_count(), 0);
        assert_eq!(board, numbered_board());
    }

    #[test]
    fn marked_mask_sets_bits() {
        let mut board = numbered_board();
        board.toggle(0).unwrap();
        board.toggle(24).unwrap();
        assert_eq!(board.marked_mask(), 1 | (1 << 24));
    }

    #[test]
    fn display_shows_marks() {
        let mut board = numbered_board();
        board.toggle(1).unwrap();
        let text = board.to_string();
        assert!(text.starts_with("[ ] 0 | [X] 1 |"));
        assert_eq!(text.lines().count(), 5);
    }
}
