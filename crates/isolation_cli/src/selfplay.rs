//! Engine vs engine games

use std::io::Write;

use anyhow::{Context, Result};
use isolation_core::{move_to_text, Engine, Game, GameSnapshot, Player, SearchLimits};
use minimax_engine::MinimaxEngine;
use tracing::info;

use crate::config::SelfPlayConfig;

/// Plays one engine-vs-engine game to the end, writing a line per turn.
/// Returns the final snapshot.
pub fn run_selfplay<W: Write>(out: &mut W, config: &SelfPlayConfig) -> Result<GameSnapshot> {
    let mut engines: [Box<dyn Engine>; 2] = [
        Box::new(MinimaxEngine::new(Player::Player1)),
        Box::new(MinimaxEngine::new(Player::Player2)),
    ];
    for engine in engines.iter_mut() {
        engine.new_game();
    }
    let depths = [config.player1_depth, config.player2_depth];
    let mut game = Game::new();

    if config.json {
        writeln!(out, "{}", serde_json::to_string(&GameSnapshot::from(&game))?)?;
    }

    while !game.is_over() {
        let player = game.current_player();
        let engine = &mut engines[player.idx()];
        let result = engine.search(game.board(), SearchLimits::depth(depths[player.idx()]));
        let mv = result
            .best_move
            .with_context(|| format!("{} found no move in a running game", engine.name()))?;
        game.make_move(&mv)
            .with_context(|| format!("{} produced an illegal move", engine.name()))?;

        if config.json {
            writeln!(out, "{}", serde_json::to_string(&GameSnapshot::from(&game))?)?;
        } else {
            writeln!(
                out,
                "turn {:>2}: Player {} {} (score {}, nodes {})",
                game.turn(),
                player.code(),
                move_to_text(&mv),
                result.score,
                result.nodes
            )?;
        }
    }

    let snapshot = GameSnapshot::from(&game);
    info!(winner = ?snapshot.winner, turns = snapshot.turn_count, "self-play finished");
    if !config.json {
        write!(out, "{}", game.board())?;
        if let Some(w) = game.winner() {
            writeln!(out, "Winner: Player {} after {} turns", w.code(), game.turn())?;
        }
    }
    Ok(snapshot)
}
