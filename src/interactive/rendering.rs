//! TUI rendering with ratatui
//!
//! Board grid, message log, status bar, and the win popup.

use super::app::{App, MessageStyle};
use crate::core::{BOARD_CELLS, BOARD_SIZE, Shuffler};
use crate::output::formatters::describe_lines;
use crate::store::Storage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<B: Storage, S: Shuffler>(f: &mut Frame, app: &App<B, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board and side panel
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70), // Board
            Constraint::Percentage(30), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if app.is_won() {
        render_win_popup(f, app, f.area());
    }
}

fn render_header<B: Storage, S: Shuffler>(f: &mut Frame, app: &App<B, S>, area: Rect) {
    let title = format!("🎯 {}", app.controller.pool().display_name().to_uppercase());
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<B: Storage, S: Shuffler>(f: &mut Frame, app: &App<B, S>, area: Rect) {
    let Some(board) = app.board() else {
        f.render_widget(Paragraph::new("No board loaded"), area);
        return;
    };
    let lines = app.winning_lines();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, BOARD_SIZE as u32); BOARD_SIZE])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, BOARD_SIZE as u32); BOARD_SIZE])
            .split(*row_area);

        for (col_index, cell_area) in cols.iter().enumerate() {
            let index = row_index * BOARD_SIZE + col_index;
            let Some(cell) = board.cell(index) else {
                continue;
            };
            let on_line = lines.iter().any(|line| line.contains(index));
            let selected = index == app.cursor;

            let text_style = if on_line {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if cell.marked {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let (border_type, border_style) = if selected {
                (BorderType::Double, Style::default().fg(Color::Cyan))
            } else {
                (BorderType::Rounded, Style::default().fg(Color::DarkGray))
            };

            let paragraph = Paragraph::new(cell.text.as_str())
                .style(text_style)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(border_type)
                        .border_style(border_style),
                );
            f.render_widget(paragraph, *cell_area);
        }
    }
}

fn render_side_panel<B: Storage, S: Shuffler>(f: &mut Frame, app: &App<B, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Marked gauge
            Constraint::Min(5),    // Messages
            Constraint::Length(9), // Help
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_help(f, chunks[2]);
}

fn render_progress<B: Storage, S: Shuffler>(f: &mut Frame, app: &App<B, S>, area: Rect) {
    let marked = app.board().map_or(0, crate::core::Board::marked_count);
    let percent = (marked * 100 / BOARD_CELLS) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Marked ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{marked}/{BOARD_CELLS}"));

    f.render_widget(gauge, area);
}

fn render_messages<B: Storage, S: Shuffler>(f: &mut Frame, app: &App<B, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = vec![
        Line::from("←↑↓→ / hjkl  move"),
        Line::from("Space/Enter  mark"),
        Line::from("g            new board"),
        Line::from("r            reset marks"),
        Line::from("Esc          close banner"),
        Line::from("q            quit"),
    ];
    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title(" Keys ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status<B: Storage, S: Shuffler>(f: &mut Frame, app: &App<B, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let state_text = if app.is_won() {
        "State: BINGO!"
    } else {
        "State: Playing"
    };
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let source = Paragraph::new(format!("Words: {}", app.source)).alignment(Alignment::Center);
    f.render_widget(source, chunks[1]);

    let cursor_text = format!(
        "Cell {} (row {}, col {})",
        app.cursor,
        app.cursor / BOARD_SIZE + 1,
        app.cursor % BOARD_SIZE + 1
    );
    let cursor = Paragraph::new(cursor_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(cursor, chunks[2]);
}

fn render_win_popup<B: Storage, S: Shuffler>(f: &mut Frame, app: &App<B, S>, area: Rect) {
    let popup = centered_rect(50, 30, area);
    let lines = app.winning_lines();

    let content = vec![
        Line::from(Span::styled(
            "🎉 🎊 ✨  B I N G O !  ✨ 🎊 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Completed: {}", describe_lines(&lines))),
        Line::from(""),
        Line::from("Esc: close | g: new board | r: reset | q: quit"),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" CONGRATULATIONS! ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Rect of the given percentage size centred in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FisherYates, WordPool};
    use crate::game::GameController;
    use crate::store::{MemoryStorage, StateStore};
    use crate::wordlists::PoolSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App<MemoryStorage, FisherYates<StdRng>> {
        let pool = WordPool::new((0..25).map(|i| format!("W{i}")), Some("Render Test"));
        let controller = GameController::new(
            pool,
            StateStore::new(MemoryStorage::new()),
            FisherYates::new(StdRng::seed_from_u64(4)),
        );
        let mut app = App::new(controller, PoolSource::Default);
        app.start().unwrap();
        app
    }

    #[test]
    fn draws_header_and_status() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("RENDER TEST"));
        assert!(text.contains("State: Playing"));
        assert!(!text.contains("CONGRATULATIONS"));
    }

    #[test]
    fn draws_popup_when_won() {
        let mut app = app();
        for i in 0..5 {
            app.controller.on_cell_click(i).unwrap();
        }
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("CONGRATULATIONS"));
        assert!(text.contains("row 1"));
    }

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(50, 30, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 50);
    }
}
