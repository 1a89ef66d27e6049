//! Stateless UI rendering for inverse tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::App;
use super::input::{BoardLayout, CELL_HEIGHT, CELL_WIDTH};
use inverse_games::game_over_text;
use inverse_tictactoe::{Board, Cell, Marker, Square};

/// Draws the main UI and returns where the grid landed on screen.
pub fn draw(frame: &mut Frame, app: &App) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let session = app.session();
    let board = session.board();

    let title = format!(
        "Inverse Tic-Tac-Toe - {} in a row loses",
        board.losing_length()
    );
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let last = session.last_move().map(|(_, cell)| cell);
    let layout = draw_board(frame, chunks[1], &board, app.cursor(), last);

    let status_line = match app.notice() {
        Some(notice) => format!("{} | {}", session.status_message(), notice),
        None => session.status_message(),
    };
    let status = Paragraph::new(status_line)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows: move | Enter/Space/click: place | R: restart | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    if let Some(text) = game_over_text(board.status()) {
        draw_game_over(frame, chunks[1], text);
    }

    layout
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Cell,
    last: Option<Cell>,
) -> BoardLayout {
    let rows = u16::try_from(board.row_count()).unwrap_or(u16::MAX);
    let cols = u16::try_from(board.col_count()).unwrap_or(u16::MAX);
    let outer = center_rect(
        area,
        cols.saturating_mul(CELL_WIDTH).saturating_add(2),
        rows.saturating_mul(CELL_HEIGHT).saturating_add(2),
    );
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(outer);

    let lines: Vec<Line> = (0..board.row_count() as i32)
        .map(|row| {
            let spans: Vec<Span> = (0..board.col_count() as i32)
                .map(|col| {
                    let cell = Cell::new(row, col);
                    cell_span(
                        board.square(cell).unwrap_or_default(),
                        cell == cursor,
                        Some(cell) == last,
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), outer);

    BoardLayout {
        x: inner.x,
        y: inner.y,
        rows: rows.min(inner.height / CELL_HEIGHT),
        cols: cols.min(inner.width / CELL_WIDTH),
    }
}

fn cell_span(square: Square, is_cursor: bool, is_last: bool) -> Span<'static> {
    let (symbol, base_style) = match square {
        Square::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Marker::X) => (
            " X ",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Marker::O) => (
            " O ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if is_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if is_last {
        base_style.add_modifier(Modifier::UNDERLINED)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn draw_game_over(frame: &mut Frame, area: Rect, text: &str) {
    let popup = center_rect(area, 30, 5);
    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from("Press Space to play again"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Game over"));

    frame.render_widget(Clear, popup);
    frame.render_widget(banner, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
