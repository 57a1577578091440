//! Human player reading moves from a text stream.

use super::Player;
use anyhow::{Result, bail};
use minimax_engine::{Board, Coord, Game};
use std::io::{BufRead, Write};
use tracing::debug;

/// Human player entering "row col" (1-indexed) lines.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    prompts: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player reading from `input` and prompting on `prompts`.
    pub fn new(name: impl Into<String>, input: R, prompts: W) -> Self {
        Self {
            name: name.into(),
            input,
            prompts,
        }
    }
}

/// Parses a "row col" line (1-indexed) into an empty cell on `board`.
///
/// Returns a message suitable for showing the user on failure.
pub fn parse_cell(line: &str, board: &Board) -> std::result::Result<Coord, String> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err("Enter a row and a column, e.g. \"2 3\"".to_string());
    };

    let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
        return Err("Row and column must be numbers from 1 to 3".to_string());
    };
    if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
        return Err("Row and column must be numbers from 1 to 3".to_string());
    }

    let at = Coord::new(row - 1, col - 1);
    if !board.is_empty(at) {
        return Err(format!("Row {row}, column {col} is already taken"));
    }
    Ok(at)
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, game: &Game) -> Result<Coord> {
        loop {
            write!(
                self.prompts,
                "{} ({}), enter row and column (1-3): ",
                self.name,
                game.to_move()
            )?;
            self.prompts.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before {} made a move", self.name);
            }

            match parse_cell(&line, game.board()) {
                Ok(at) => {
                    debug!(player = %self.name, %at, "Human chose move");
                    return Ok(at);
                }
                Err(message) => {
                    debug!(player = %self.name, input = line.trim(), "Rejected input");
                    writeln!(self.prompts, "{message}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
