//! Simple interactive CLI mode
//!
//! Text-based board play without the TUI

use std::io::{self, Write};
use std::sync::mpsc;

use crate::core::Shuffler;
use crate::game::{GameController, GameState, Signal};
use crate::output::{print_board, print_win_banner};
use crate::store::Storage;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    /// Toggle the cell with this index (0-24)
    Mark(usize),
    New,
    Reset,
    Close,
    Show,
    Help,
    Quit,
}

impl SimpleCommand {
    /// Parse a line of input; a bare number toggles that cell
    ///
    /// Returns `None` for anything unrecognised.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        let mut parts = input.split_whitespace();
        let head = parts.next()?;

        let command = match head {
            "mark" | "m" | "toggle" | "t" => Self::Mark(parts.next()?.parse().ok()?),
            "new" | "n" | "generate" | "g" => Self::New,
            "reset" | "r" => Self::Reset,
            "close" | "c" | "ok" => Self::Close,
            "show" | "s" | "board" => Self::Show,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            number => Self::Mark(number.parse().ok()?),
        };

        // Trailing words make the line ambiguous
        if parts.next().is_some() {
            return None;
        }
        Some(command)
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// board can be started.
pub fn run_simple<B: Storage, S: Shuffler>(
    mut controller: GameController<B, S>,
) -> Result<(), String> {
    let (tx, rx) = mpsc::channel();
    controller.subscribe(Box::new(tx));
    controller.start().map_err(|e| e.to_string())?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Bingo - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let name = controller.pool().display_name().to_string();

    loop {
        // Draw whatever the controller signalled since the last prompt
        let mut redraw = false;
        let mut win = None;
        for signal in rx.try_iter() {
            match signal {
                Signal::BoardRendered(_) => redraw = true,
                Signal::Win(lines) => win = Some(lines),
            }
        }
        if redraw
            && let Some(board) = controller.board()
        {
            print_board(board, &name, &controller.winning_lines());
        }
        if let Some(lines) = win {
            print_win_banner(&lines);
        }

        let prompt = match controller.state() {
            GameState::Won => "BINGO! Command",
            _ => "Command",
        };

        match SimpleCommand::parse(&get_user_input(prompt)?) {
            Some(SimpleCommand::Mark(index)) => {
                if let Err(e) = controller.on_cell_click(index) {
                    println!("❌ {e}\n");
                }
            }
            Some(SimpleCommand::New) => {
                controller.on_generate_click().map_err(|e| e.to_string())?;
                println!("\n🔄 New board generated!");
            }
            Some(SimpleCommand::Reset) => {
                controller.on_reset_click().map_err(|e| e.to_string())?;
                println!("\n🧹 Marks cleared!");
            }
            Some(SimpleCommand::Close) => {
                controller.on_close_notification();
            }
            Some(SimpleCommand::Show) => {
                if let Some(board) = controller.board() {
                    print_board(board, &name, &controller.winning_lines());
                }
            }
            Some(SimpleCommand::Help) => print_help(),
            Some(SimpleCommand::Quit) => {
                println!("\n👋 Thanks for playing! Your board is saved.\n");
                return Ok(());
            }
            None => println!("❌ Unknown command. Type 'help' for the list.\n"),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <n> or mark <n>  Toggle cell n (0-24, numbered left to right, top to bottom)");
    println!("  new              Draw a fresh board");
    println!("  reset            Clear all marks");
    println!("  close            Dismiss the BINGO banner");
    println!("  show             Print the board");
    println!("  quit             Exit (the board is saved)\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input behaves like quit
    if read == 0 {
        return Ok("quit".to_string());
    }
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_number_marks() {
        assert_eq!(SimpleCommand::parse("12"), Some(SimpleCommand::Mark(12)));
        assert_eq!(SimpleCommand::parse("  0 "), Some(SimpleCommand::Mark(0)));
    }

    #[test]
    fn parse_mark_with_keyword() {
        assert_eq!(SimpleCommand::parse("mark 4"), Some(SimpleCommand::Mark(4)));
        assert_eq!(SimpleCommand::parse("M 24"), Some(SimpleCommand::Mark(24)));
    }

    #[test]
    fn parse_out_of_range_number_is_left_to_controller() {
        assert_eq!(SimpleCommand::parse("99"), Some(SimpleCommand::Mark(99)));
    }

    #[test]
    fn parse_word_commands() {
        assert_eq!(SimpleCommand::parse("new"), Some(SimpleCommand::New));
        assert_eq!(SimpleCommand::parse("RESET"), Some(SimpleCommand::Reset));
        assert_eq!(SimpleCommand::parse("close"), Some(SimpleCommand::Close));
        assert_eq!(SimpleCommand::parse("show"), Some(SimpleCommand::Show));
        assert_eq!(SimpleCommand::parse("?"), Some(SimpleCommand::Help));
        assert_eq!(SimpleCommand::parse("q"), Some(SimpleCommand::Quit));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(SimpleCommand::parse(""), None);
        assert_eq!(SimpleCommand::parse("mark"), None);
        assert_eq!(SimpleCommand::parse("mark x"), None);
        assert_eq!(SimpleCommand::parse("-1"), None);
        assert_eq!(SimpleCommand::parse("reset now"), None);
        assert_eq!(SimpleCommand::parse("dance"), None);
    }
}
