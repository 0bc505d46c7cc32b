//! TUI application state and logic

use crate::core::{BOARD_CELLS, BOARD_SIZE, Board, Shuffler, WinLine};
use crate::game::{GameController, GameState, Signal};
use crate::output::formatters::describe_lines;
use crate::store::Storage;
use crate::wordlists::PoolSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};

/// Application state
pub struct App<B: Storage, S: Shuffler> {
    pub controller: GameController<B, S>,
    pub source: PoolSource,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    signals: Receiver<Signal>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Cursor movement on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl<B: Storage, S: Shuffler> App<B, S> {
    /// Wrap a controller, subscribing to its signals
    pub fn new(mut controller: GameController<B, S>, source: PoolSource) -> Self {
        let (tx, signals) = mpsc::channel();
        controller.subscribe(Box::new(tx));

        Self {
            controller,
            source,
            cursor: BOARD_CELLS / 2,
            messages: Vec::new(),
            should_quit: false,
            signals,
        }
    }

    /// Load or generate the board
    ///
    /// # Errors
    ///
    /// Returns an error if no board can be started.
    pub fn start(&mut self) -> Result<()> {
        self.controller.start()?;
        let welcome = format!(
            "Welcome to {}! Words from the {}.",
            self.controller.pool().display_name(),
            self.source
        );
        self.add_message(&welcome, MessageStyle::Info);
        self.add_message(
            "Arrows move, Space marks, g = new board, r = reset",
            MessageStyle::Info,
        );
        self.drain_signals();
        Ok(())
    }

    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.controller.board()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.controller.state() == GameState::Won
    }

    #[must_use]
    pub fn winning_lines(&self) -> Vec<WinLine> {
        self.controller.winning_lines()
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let row = self.cursor / BOARD_SIZE;
        let col = self.cursor % BOARD_SIZE;
        let (row, col) = match direction {
            Direction::Up => ((row + BOARD_SIZE - 1) % BOARD_SIZE, col),
            Direction::Down => ((row + 1) % BOARD_SIZE, col),
            Direction::Left => (row, (col + BOARD_SIZE - 1) % BOARD_SIZE),
            Direction::Right => (row, (col + 1) % BOARD_SIZE),
        };
        self.cursor = row * BOARD_SIZE + col;
    }

    pub fn toggle_cursor(&mut self) {
        if let Err(e) = self.controller.on_cell_click(self.cursor) {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
        self.drain_signals();
    }

    pub fn regenerate(&mut self) {
        match self.controller.on_generate_click() {
            Ok(_) => self.add_message("New board generated!", MessageStyle::Info),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.drain_signals();
    }

    pub fn reset(&mut self) {
        match self.controller.on_reset_click() {
            Ok(_) => self.add_message("Marks cleared.", MessageStyle::Info),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.drain_signals();
    }

    pub fn close_notification(&mut self) {
        self.controller.on_close_notification();
    }

    /// Turn queued controller signals into messages
    fn drain_signals(&mut self) {
        let signals: Vec<Signal> = self.signals.try_iter().collect();
        for signal in signals {
            // Renders need no action: the next frame reads the board directly
            if let Signal::Win(lines) = signal {
                self.add_message(
                    &format!("🎉 BINGO! {}", describe_lines(&lines)),
                    MessageStyle::Success,
                );
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.is_won() {
            match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => self.close_notification(),
                KeyCode::Char('g' | 'n') => self.regenerate(),
                KeyCode::Char('r') => self.reset(),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(Direction::Right),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_cursor(),
            KeyCode::Char('g' | 'n') => self.regenerate(),
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<B: Storage, S: Shuffler>(mut app: App<B, S>) -> Result<()> {
    app.start()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S, T>(terminal: &mut Terminal<T>, app: &mut App<B, S>) -> Result<()>
where
    B: Storage,
    S: Shuffler,
    T: ratatui::backend::Backend,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
