use crate::game::{DropOutcome, GameEngine, MoveError, Position};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::info;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// One game shown by the UI, with its own selection and message line.
pub(super) struct BoardSlot {
    pub(super) id: usize,
    pub(super) engine: GameEngine,
    pub(super) selected_column: usize,
    pub(super) message: Option<String>,
    pub(super) winning_cells: Option<[Position; 4]>,
}

impl BoardSlot {
    fn new(id: usize, engine: GameEngine) -> Self {
        let selected_column = engine.state().board().width() / 2; // Start in middle
        BoardSlot {
            id,
            engine,
            selected_column,
            message: None,
            winning_cells: None,
        }
    }

    /// Drop into `column` and turn the result into a message for the player
    fn drop_piece(&mut self, column: isize) {
        self.message = None;

        match self.engine.drop_piece(column) {
            Ok(result) => match result.outcome {
                DropOutcome::Continue => {}
                DropOutcome::Win { player, cells } => {
                    let name = self.engine.state().player(player).name();
                    self.message = Some(format!("{name} wins! Press 'r' to restart."));
                    self.winning_cells = Some(cells);
                }
                DropOutcome::Tie => {
                    self.message = Some("Tie! Press 'r' to restart.".to_string());
                }
            },
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    fn restart(&mut self) {
        self.engine.reset();
        self.selected_column = self.engine.state().board().width() / 2;
        self.winning_cells = None;
        self.message = Some("New game started!".to_string());
    }
}

pub struct App {
    /// Every new board starts a fresh game of this size and players
    template: GameEngine,
    boards: Vec<BoardSlot>,
    active: usize,
    next_id: usize,
    should_quit: bool,
    notice: Option<String>,
}

impl App {
    /// Create the app with one board. New boards copy `template`'s size and
    /// players.
    pub fn new(template: GameEngine) -> Self {
        let mut app = App {
            template,
            boards: Vec::new(),
            active: 0,
            next_id: 1,
            should_quit: false,
            notice: None,
        };
        app.new_board();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            if let Err(err) = terminal.draw(|f| self.render(f)) {
                return Err(err.into());
            }

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.notice = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') => self.new_board(),
            KeyCode::Char('x') => self.remove_board(),
            KeyCode::Tab => self.switch_board(1),
            KeyCode::BackTab => self.switch_board(-1),
            code => {
                let Some(slot) = self.boards.get_mut(self.active) else {
                    self.notice = Some("No boards. Press 'n' to start a game.".to_string());
                    return;
                };
                match code {
                    KeyCode::Left => {
                        slot.selected_column = slot.selected_column.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        let last = slot.engine.state().board().width() - 1;
                        slot.selected_column = (slot.selected_column + 1).min(last);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        slot.drop_piece(slot.selected_column as isize);
                    }
                    KeyCode::Char(c @ '1'..='9') => {
                        // Digits are 1-based on screen
                        let col = c.to_digit(10).unwrap_or(1) as usize - 1;
                        if col < slot.engine.state().board().width() {
                            slot.selected_column = col;
                        }
                        slot.drop_piece(col as isize);
                    }
                    KeyCode::Char('r') => slot.restart(),
                    _ => {}
                }
            }
        }
    }

    /// Start a new independent game next to the existing ones
    fn new_board(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        self.boards.push(BoardSlot::new(id, self.template.fresh()));
        self.active = self.boards.len() - 1;
        info!("created board {id}");
    }

    fn remove_board(&mut self) {
        if self.active >= self.boards.len() {
            return;
        }
        let slot = self.boards.remove(self.active);
        info!("removed board {}", slot.id);
        self.notice = Some(format!("Board {} removed.", slot.id));
        if self.active >= self.boards.len() {
            self.active = self.boards.len().saturating_sub(1);
        }
    }

    fn switch_board(&mut self, step: isize) {
        let count = self.boards.len() as isize;
        if count == 0 {
            return;
        }
        self.active = (self.active as isize + step).rem_euclid(count) as usize;
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.boards, self.active, self.notice.as_deref());
    }
}
