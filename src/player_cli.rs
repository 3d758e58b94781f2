#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    common::GameError,
    game::{GameEngine, GameState, GameStatus},
    Direction, TileSpawner, EMPTY,
};

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Continue,
    Reset,
    Help,
    Quit,
}

/// Parse a command such as `w`, `left`, `c`, `r` or `q`.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    match input.to_ascii_lowercase().as_str() {
        "c" | "continue" => return Ok(Command::Continue),
        "r" | "reset" | "new" => return Ok(Command::Reset),
        "?" | "help" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }
    input
        .parse::<Direction>()
        .map(Command::Move)
        .map_err(|_| format!("Unknown command '{}' - type ? for help", input))
}

const HELP: &str = "Moves: w/a/s/d, h/j/k/l or up/down/left/right. \
c = continue after win, r = new game, q = quit.";

/// Render the board inside a box with the score and status underneath.
pub fn render_board(state: &GameState) -> String {
    let n = state.board.size();
    let width = state.board.max_tile().to_string().len().max(4);
    let inner = n * (width + 1) + 1;

    let mut out = String::new();
    out.push_str(&format!("╔{}╗\n", "═".repeat(inner)));
    for row in state.board.rows() {
        out.push('║');
        for &value in row {
            if value == EMPTY {
                out.push_str(&format!(" {:>width$}", "·", width = width));
            } else {
                out.push_str(&format!(" {:>width$}", value, width = width));
            }
        }
        out.push_str(" ║\n");
    }
    out.push_str(&format!("╚{}╝\n", "═".repeat(inner)));
    out.push_str(&format!("Score: {}", state.score));
    match state.status {
        GameStatus::Playing => {}
        GameStatus::Won => out.push_str(&format!(
            "   You reached {}! Press c to keep going or r for a new game.",
            state.win_tile
        )),
        GameStatus::GameOver => out.push_str("   Game over. Press r for a new game."),
    }
    out.push('\n');
    out
}

/// Run a line-oriented game loop until `q` or end of input.
pub fn run_session<S, I, O>(
    engine: &mut GameEngine<S>,
    input: &mut I,
    output: &mut O,
) -> io::Result<()>
where
    S: TileSpawner,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{}", HELP)?;
    loop {
        write!(output, "\n{}> ", render_board(engine.state()))?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(output, "{}", msg)?;
                continue;
            }
        };
        let result = match command {
            Command::Move(direction) => match engine.apply_move(direction) {
                Ok(report) => {
                    if report.score_gained > 0 {
                        writeln!(output, "+{}", report.score_gained)?;
                    }
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Command::Continue => engine.continue_after_win(),
            Command::Reset => engine.reset(),
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                Ok(())
            }
            Command::Quit => break,
        };
        // Rejected transitions are ignored apart from a hint.
        if let Err(GameError::InvalidStateTransition { status, .. }) = result {
            let hint = match status {
                GameStatus::Won => "Press c to continue or r to restart.",
                _ => "Press r to start a new game.",
            };
            writeln!(output, "{}", hint)?;
        } else if let Err(e) = result {
            writeln!(output, "Error: {}", e)?;
        }
    }
    writeln!(output, "Final score: {}", engine.score())?;
    Ok(())
}

/// Play interactively on stdin/stdout.
pub fn run_interactive<S: TileSpawner>(engine: &mut GameEngine<S>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(engine, &mut stdin.lock(), &mut stdout.lock())
}
