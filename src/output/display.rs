//! Display functions for the line-oriented commands

use super::formatters::{create_progress_bar, describe_lines, fit_cell};
use crate::core::{BOARD_CELLS, BOARD_SIZE, Board, WinLine};
use colored::Colorize;

const CELL_WIDTH: usize = 14;

/// Print the board as a 5×5 grid with cell numbers
///
/// Marked cells are green, cells on a completed line are bold yellow.
pub fn print_board(board: &Board, name: &str, lines: &[WinLine]) {
    let rule = "─".repeat((CELL_WIDTH + 3) * BOARD_SIZE + 1);

    println!("\n{}", rule.cyan());
    println!(" {}", name.bright_yellow().bold());
    println!("{}", rule.cyan());

    for (row_index, row) in board.cells().chunks(BOARD_SIZE).enumerate() {
        let mut numbers = String::from("│");
        let mut texts = String::from("│");

        for (col, cell) in row.iter().enumerate() {
            let index = row_index * BOARD_SIZE + col;
            let on_line = lines.iter().any(|line| line.contains(index));
            let mark = if cell.marked { "✔" } else { " " };

            numbers.push_str(&format!(" {index:>2} {mark:<width$}│", width = CELL_WIDTH - 3));

            let text = fit_cell(&cell.text, CELL_WIDTH);
            let styled = if on_line {
                text.as_str().bright_yellow().bold()
            } else if cell.marked {
                text.as_str().green().bold()
            } else {
                text.as_str().normal()
            };
            texts.push_str(&format!(" {styled} │"));
        }

        println!("{}", numbers.bright_black());
        println!("{texts}");
        println!("{}", rule.cyan());
    }

    let marked = board.marked_count();
    println!(
        "Marked: {} {marked}/{BOARD_CELLS}",
        create_progress_bar(marked, BOARD_CELLS, 25).green()
    );
}

/// Print the win banner
pub fn print_win_banner(lines: &[WinLine]) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "          🎉 🎊 ✨  B I N G O !  ✨ 🎊 🎉".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    if !lines.is_empty() {
        println!("  Completed: {}", describe_lines(lines).bright_white());
    }
    println!("  Type 'close' to dismiss, 'reset' or 'new' to play again.\n");
}

/// Print an admin success message
pub fn print_success(message: &str) {
    println!("{}", message.green().bold());
}

/// Print an admin validation error
pub fn print_error(message: &str) {
    eprintln!("{}", message.red().bold());
}
