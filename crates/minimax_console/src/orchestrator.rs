//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use minimax_engine::{Game, GameStatus, Side};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs a game between two players, writing the transcript to `out`.
pub struct Orchestrator<W> {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator for a new game with `first` to move.
    pub fn new(first: Side, player_x: Box<dyn Player>, player_o: Box<dyn Player>, out: W) -> Self {
        Self {
            game: Game::new(first),
            player_x,
            player_o,
            out,
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop to completion and returns the final status.
    #[instrument(skip(self), fields(x = self.player_x.name(), o = self.player_o.name()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!(first = %self.game.to_move(), "Starting game");

        while !self.game.is_over() {
            let side = self.game.to_move();
            let player = match side {
                Side::X => &mut self.player_x,
                Side::O => &mut self.player_o,
            };

            debug!(player = player.name(), %side, "Waiting for move");
            let at = player.choose_move(&self.game)?;
            let name = player.name().to_string();
            self.game.make_move(side, at)?;

            writeln!(
                self.out,
                "{} ({}) plays row {}, column {}",
                name,
                side,
                at.row() + 1,
                at.col() + 1
            )?;
            writeln!(self.out, "{}", self.game.board().render())?;
            if !self.game.is_over() {
                writeln!(
                    self.out,
                    "{} has made the move. Now {}'s turn\n",
                    side,
                    side.flip()
                )?;
            }
        }

        let status = self.game.status();
        match status {
            GameStatus::Won(winner) => writeln!(self.out, "Winner is {winner}")?,
            GameStatus::Draw => writeln!(self.out, "It's a draw")?,
            GameStatus::InProgress => {}
        }
        self.out.flush()?;

        info!(?status, moves = self.game.ply(), "Game finished");
        Ok(status)
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}
