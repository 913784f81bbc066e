use super::app::BoardSlot;
use super::board_widget::{board_lines, player_color};
use crate::game::GameStatus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub(super) fn render(frame: &mut Frame, boards: &[BoardSlot], active: usize, notice: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Board tabs
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_tabs(frame, boards, active, chunks[0]);

    match boards.get(active) {
        Some(slot) => {
            render_header(frame, slot, chunks[1]);
            render_board(frame, slot, chunks[2]);
            render_message(frame, notice.or(slot.message.as_deref()), chunks[3]);
        }
        None => {
            let empty = Paragraph::new("No boards. Press 'n' to start a game.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Connect Four"));
            frame.render_widget(empty, chunks[1]);
            render_message(frame, notice, chunks[3]);
        }
    }

    render_controls(frame, chunks[4]);
}

fn render_tabs(frame: &mut Frame, boards: &[BoardSlot], active: usize, area: Rect) {
    let titles: Vec<String> = boards
        .iter()
        .map(|slot| {
            let marker = if slot.engine.state().is_terminal() { " ✓" } else { "" };
            format!("Board {}{}", slot.id, marker)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(active)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("Boards"));

    frame.render_widget(tabs, area);
}

fn render_header(frame: &mut Frame, slot: &BoardSlot, area: Rect) {
    let state = slot.engine.state();

    let (status, color) = match state.status() {
        GameStatus::InProgress => {
            let player = state.player(state.current_player());
            (
                format!("Current Player: {}", player.name()),
                player_color(player),
            )
        }
        GameStatus::Won(id) => {
            let player = state.player(id);
            (
                format!("Game Over  |  {} wins!", player.name()),
                player_color(player),
            )
        }
        GameStatus::Tied => ("Game Over  |  Tie!".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Connect Four  |  Board {}", slot.id)),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, slot: &BoardSlot, area: Rect) {
    let state = slot.engine.state();
    // No selector once input is disabled
    let selected = (!state.is_terminal()).then_some(slot.selected_column);
    let lines = board_lines(state, selected, slot.winning_cells.as_ref());

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: Restart  |  Q: Quit");
    let line2 = Line::from("N: New board  |  X: Remove board  |  Tab/Shift-Tab: Switch board");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
