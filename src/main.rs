//! Bingo Board - CLI
//!
//! Single-player 5×5 bingo with TUI and line modes, plus a word-list editor.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bingo_board::{
    commands::{
        export_word_list, run_simple, save_word_list, show_board, stored_word_list,
    },
    core::{FALLBACK_BOARD_NAME, FisherYates},
    game::GameController,
    interactive::{App, run_tui},
    logging::{LogConfig, init_logging},
    output::{print_error, print_success},
    store::{FileStorage, StateStore},
    wordlists::{PoolSource, resolve_pool},
};
use clap::{Parser, Subcommand};
use rand::rngs::ThreadRng;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "bingo",
    about = "Single-player 5×5 bingo: mark words, complete a line",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the saved board and word list
    #[arg(long, global = true, default_value = ".bingo")]
    state_dir: PathBuf,

    /// JSON config document with `words` and optional `boardName`
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Print the current board and exit
    Show,

    /// Save a new word list for the player (reads stdin without FILE)
    Admin {
        /// File with one word per line or comma-separated words
        file: Option<PathBuf>,

        /// Board name shown above the grid
        #[arg(short, long, default_value = "")]
        name: String,

        /// Print the stored word list instead of saving
        #[arg(long)]
        show: bool,
    },

    /// Print a config document for a word list
    Export {
        /// File with one word per line or comma-separated words
        file: Option<PathBuf>,

        /// Board name to embed
        #[arg(short, long, default_value = "")]
        name: String,
    },
}

type Controller = GameController<FileStorage, FisherYates<ThreadRng>>;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so its logs go to a file
    let log_file = matches!(command, Commands::Play).then(|| cli.state_dir.join("bingo.log"));
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_log_file(log_file))
        .context("Failed to initialise logging")?;

    match command {
        Commands::Play => {
            let (controller, source) = build_controller(&cli.state_dir, cli.config.as_deref())?;
            run_tui(App::new(controller, source))?;
        }
        Commands::Simple => {
            let (controller, _) = build_controller(&cli.state_dir, cli.config.as_deref())?;
            run_simple(controller).map_err(|e| anyhow::anyhow!(e))?;
        }
        Commands::Show => {
            let (controller, _) = build_controller(&cli.state_dir, cli.config.as_deref())?;
            show_board(controller)?;
        }
        Commands::Admin { file, name, show } => {
            return run_admin_command(&cli.state_dir, file.as_deref(), &name, show);
        }
        Commands::Export { file, name } => {
            let text = read_input(file.as_deref())?;
            return Ok(match export_word_list(&text, &name) {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    print_error(&e.to_string());
                    ExitCode::FAILURE
                }
            });
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn open_storage(state_dir: &Path) -> Result<FileStorage> {
    FileStorage::open(state_dir)
        .with_context(|| format!("Failed to open state directory {}", state_dir.display()))
}

/// Storage, word pool, and shuffler wired into a controller
fn build_controller(state_dir: &Path, config: Option<&Path>) -> Result<(Controller, PoolSource)> {
    let storage = open_storage(state_dir)?;
    let (pool, source) = resolve_pool(config, &storage);
    info!(words = pool.len(), %source, "Word pool ready");

    let controller = GameController::new(
        pool,
        StateStore::new(storage),
        FisherYates::thread_local(),
    );
    Ok((controller, source))
}

fn run_admin_command(
    state_dir: &Path,
    file: Option<&Path>,
    name: &str,
    show: bool,
) -> Result<ExitCode> {
    let storage = open_storage(state_dir)?;

    if show {
        let (words, board_name) = stored_word_list(storage)?;
        println!("Board name: {board_name}");
        if words.is_empty() {
            println!("No word list saved; the built-in list is used.");
        } else {
            println!("{words}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let text = read_input(file)?;
    match save_word_list(storage, &text, name) {
        Ok(result) => {
            let name_note = if result.board_name == FALLBACK_BOARD_NAME && name.trim().is_empty() {
                " (default name)"
            } else {
                ""
            };
            print_success(&format!(
                "Saved {} words for \"{}\"{name_note}. Start a new board to use them.",
                result.word_count, result.board_name
            ));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_error(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Read the word list from a file, or stdin when none is given
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read word list from stdin")?;
            Ok(text)
        }
    }
}
