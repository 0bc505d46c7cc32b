//! Print the current board without entering a game loop

use crate::core::Shuffler;
use crate::game::{GameController, GameError};
use crate::output::print_board;
use crate::store::Storage;

/// Start (restoring or generating) and print the board
///
/// A freshly generated board is saved, so the next `play` picks it up.
///
/// # Errors
///
/// Returns an error if no board can be started.
pub fn show_board<B: Storage, S: Shuffler>(
    mut controller: GameController<B, S>,
) -> Result<(), GameError> {
    controller.start()?;
    if let Some(board) = controller.board() {
        print_board(
            board,
            controller.pool().display_name(),
            &controller.winning_lines(),
        );
    }
    Ok(())
}
