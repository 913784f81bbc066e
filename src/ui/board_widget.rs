use std::str::FromStr;

use crate::game::{Board, Cell, GameState, Player, Position};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Terminal color for a player, white if the configured color is unknown.
pub fn player_color(player: &Player) -> Color {
    Color::from_str(&player.color).unwrap_or(Color::White)
}

/// Render the grid as styled lines: column numbers, a framed board and a
/// selection marker under `selected_column`. Cells in `highlight` (the
/// winning line) are drawn reversed.
pub fn board_lines(
    state: &GameState,
    selected_column: Option<usize>,
    highlight: Option<&[Position; 4]>,
) -> Vec<Line<'static>> {
    let board = state.board();
    let width = board.width();
    let mut lines = Vec::with_capacity(board.height() + 3);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..width {
            row_spans.push(cell_span(state, board, row, col, highlight));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    if let Some(selected) = selected_column {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..width {
            if col == selected {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    lines
}

fn cell_span(
    state: &GameState,
    board: &Board,
    row: usize,
    col: usize,
    highlight: Option<&[Position; 4]>,
) -> Span<'static> {
    match board.get(row, col) {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(id) => {
            let mut style = Style::default().fg(player_color(state.player(id)));
            if highlight.is_some_and(|cells| cells.contains(&Position::new(row, col))) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            Span::styled(" \u{25cf} ", style)
        }
    }
}
