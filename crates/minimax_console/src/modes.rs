//! Game modes selectable from the command line.

use crate::analyze::{AnalysisReport, analyze};
use crate::orchestrator::Orchestrator;
use crate::players::{EnginePlayer, HumanPlayer, Player, shared_engine};
use anyhow::Result;
use derive_getters::Getters;
use minimax_engine::{Board, CacheStats, GameStatus, SearchEngine, Side};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Options for an engine-vs-engine series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlayOptions {
    /// Side that moves first in every game.
    pub first: Side,
    /// Number of games.
    pub games: u32,
    /// Clear the engine cache before each game after the first.
    pub reset_between_games: bool,
}

/// Tally of a self-play series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize)]
pub struct SeriesSummary {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
    /// Engine cache usage at the end of the series.
    cache: CacheStats,
}

impl SeriesSummary {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Side::X) => self.x_wins += 1,
            GameStatus::Won(Side::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// Plays the engine against itself, writing each game to `out`.
#[instrument(skip(out))]
pub fn run_self_play<W: Write>(options: SelfPlayOptions, mut out: W) -> Result<SeriesSummary> {
    let engine = shared_engine();
    let mut summary = SeriesSummary::default();

    for game_number in 1..=options.games {
        if options.reset_between_games && game_number > 1 {
            engine.borrow_mut().reset();
        }
        if options.games > 1 {
            writeln!(out, "=== Game {game_number} of {} ===", options.games)?;
        }

        let player_x: Box<dyn Player> = Box::new(EnginePlayer::new("Engine X", engine.clone()));
        let player_o: Box<dyn Player> = Box::new(EnginePlayer::new("Engine O", engine.clone()));
        let mut orchestrator = Orchestrator::new(options.first, player_x, player_o, &mut out);
        let status = orchestrator.run()?;
        summary.record(status);
    }

    summary.cache = engine.borrow().stats();
    if options.games > 1 {
        writeln!(
            out,
            "Results: X won {}, O won {}, {} drawn",
            summary.x_wins, summary.o_wins, summary.draws
        )?;
    }
    info!(?summary, "Self-play finished");
    Ok(summary)
}

/// Plays a human reading from `input` against the engine.
///
/// Prompts go to `prompts`, the game transcript to `out`.
#[instrument(skip(input, prompts, out))]
pub fn run_human_game<R, P, W>(
    human: Side,
    first: Side,
    input: R,
    prompts: P,
    out: W,
) -> Result<GameStatus>
where
    R: BufRead + 'static,
    P: Write + 'static,
    W: Write,
{
    let human_player: Box<dyn Player> = Box::new(HumanPlayer::new("Human", input, prompts));
    let engine_player: Box<dyn Player> = Box::new(EnginePlayer::new("Engine", shared_engine()));

    let (player_x, player_o) = match human {
        Side::X => (human_player, engine_player),
        Side::O => (engine_player, human_player),
    };

    let mut orchestrator = Orchestrator::new(first, player_x, player_o, out);
    orchestrator.run()
}

/// Scores a position and writes the report as text or JSON.
#[instrument(skip(board, out), fields(board = %board))]
pub fn run_analyze<W: Write>(board: &Board, side: Side, json: bool, mut out: W) -> Result<AnalysisReport> {
    let mut engine = SearchEngine::new();
    let report = analyze(&mut engine, board, side)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "{}", report.to_text())?;
    }
    Ok(report)
}
