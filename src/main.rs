use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::{DropOutcome, GameEngine};
use connect_four::ui::App;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Override the first player's color
    #[arg(long)]
    first_color: Option<String>,

    /// Override the second player's color
    #[arg(long)]
    second_color: Option<String>,

    /// Play these 0-based columns on a fresh game and print the result
    /// instead of starting the UI
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    moves: Option<Vec<isize>>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(color) = cli.first_color {
        config.players.first.color = color;
    }
    if let Some(color) = cli.second_color {
        config.players.second.color = color;
    }
    config.validate().context("invalid settings")?;

    let engine = config.new_engine().context("starting game")?;

    match cli.moves {
        Some(moves) => {
            play_moves(engine, &moves, &mut io::stdout().lock()).context("writing results")
        }
        None => run_ui(engine).context("running terminal UI"),
    }
}

/// Non-interactive mode: one line per drop, then the final board.
fn play_moves(mut engine: GameEngine, moves: &[isize], out: &mut impl Write) -> io::Result<()> {
    for &column in moves {
        let mover = engine.state().player(engine.state().current_player()).name().to_string();
        match engine.drop_piece(column) {
            Ok(result) => {
                let placed = result.placement;
                writeln!(out, "{mover}: column {} -> row {}", placed.col, placed.row)?;
                match result.outcome {
                    DropOutcome::Continue => {}
                    DropOutcome::Win { cells, .. } => {
                        let cells: Vec<String> = cells
                            .iter()
                            .map(|pos| format!("({}, {})", pos.row, pos.col))
                            .collect();
                        writeln!(out, "{mover} wins! [{}]", cells.join(" "))?;
                    }
                    DropOutcome::Tie => writeln!(out, "Tie!")?,
                }
            }
            Err(err) => writeln!(out, "{mover}: column {column} rejected: {err}")?,
        }
    }
    writeln!(out)?;
    write!(out, "{}", engine.state().board())
}

/// Runs `restore` when dropped, so early `?` returns clean up too.
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn run_ui(engine: GameEngine) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let _restore = RestoreGuard {
        restore: || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        },
    };
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(engine);
    app.run(&mut terminal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_four::game::Player;
    use std::cell::Cell;

    fn engine() -> GameEngine {
        GameEngine::standard([Player::new("red"), Player::new("yellow")])
    }

    fn played(moves: &[isize]) -> String {
        let mut out = Vec::new();
        play_moves(engine(), moves, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_play_moves_reports_each_drop_and_win() {
        let out = played(&[0, 0, 1, 0, 2, 0, 3]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "red: column 0 -> row 5");
        assert_eq!(lines[1], "yellow: column 0 -> row 4");
        assert_eq!(lines[6], "red: column 3 -> row 5");
        assert_eq!(lines[7], "red wins! [(5, 0) (5, 1) (5, 2) (5, 3)]");
        assert_eq!(lines[8], "");
        assert_eq!(lines[14], "| X  X  X  X  .  .  . |");
        assert_eq!(lines.len(), 16);
    }

    #[test]
    fn test_play_moves_reports_rejections() {
        let out = played(&[-1, 7, 0, 0, 0, 0, 0, 0, 0]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines[0],
            "red: column -1 rejected: column -1 is out of range (board has 7 columns)"
        );
        assert_eq!(
            lines[1],
            "red: column 7 rejected: column 7 is out of range (board has 7 columns)"
        );
        assert_eq!(lines[8], "red: column 0 rejected: column 0 is full");
        assert_eq!(lines[10], "| O  .  .  .  .  .  . |");
    }

    #[test]
    fn test_play_moves_after_game_over() {
        let out = played(&[0, 6, 0, 6, 0, 6, 0, 1]);
        assert!(out.contains("red wins!"));
        // The winner stays the current player
        assert!(out.contains("red: column 1 rejected: game is already over"));
    }

    #[test]
    fn test_restore_guard_runs_on_early_return() {
        fn setup(restored: &Cell<bool>) -> io::Result<()> {
            let _restore = RestoreGuard {
                restore: || restored.set(true),
            };
            let enter_screen = || -> io::Result<()> { Err(io::Error::other("no terminal")) };
            enter_screen()?;
            Ok(())
        }

        let restored = Cell::new(false);
        assert!(setup(&restored).is_err());
        assert!(restored.get());
    }
}
