//! Interactive human vs engine loop over any line-based input/output.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use isolation_core::{
    parse_move_input, position_to_coord, Engine, Game, Player, Position, SearchLimits,
};
use minimax_engine::MinimaxEngine;
use tracing::debug;

use crate::config::PlayConfig;

fn player_label(player: Player, ai: Player) -> String {
    let colour = match player {
        Player::Player1 => "Blue",
        Player::Player2 => "Red",
    };
    let who = if player == ai { "AI" } else { "You" };
    format!("Player {} ({who}/{colour})", player.code())
}

fn coord(p: Position) -> String {
    let c = position_to_coord(p);
    format!("({}, {})", &c[..1], &c[1..])
}

pub fn write_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== How to Play ===")?;
    writeln!(out, "Enter your move as: to_row to_col remove_row remove_col")?;
    writeln!(out, "Example: 'b 4 c 5' means:")?;
    writeln!(out, "  - Move your piece to (b, 4)")?;
    writeln!(out, "  - Remove the cell at (c, 5)")?;
    writeln!(out, "Rows are labeled a-g, columns 1-7")?;
    writeln!(out, "Type 'help' for this message, 'quit' to exit")?;
    writeln!(out)
}

fn write_state<W: Write>(out: &mut W, game: &Game, ai: Player) -> std::io::Result<()> {
    writeln!(out, "=== Isolation ===")?;
    writeln!(out, "Turn: {}", game.turn())?;
    writeln!(out, "Current player: {}", player_label(game.current_player(), ai))?;
    writeln!(out)?;
    write!(out, "{}", game.board())?;
    writeln!(out)
}

/// Runs one game. Returns the winner, or `None` if the human quit (or input
/// ran out) before the end.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    config: &PlayConfig,
) -> Result<Option<Player>> {
    let ai = config.ai_player;
    let human = ai.other();
    let mut engine = MinimaxEngine::new(ai);
    let mut game = Game::new();

    writeln!(out, "=== Isolation - Human vs AI ===")?;
    writeln!(out, "{} vs {}", player_label(ai, ai), player_label(human, ai))?;
    write_help(out)?;

    while !game.is_over() {
        write_state(out, &game, ai)?;

        if game.current_player() == ai {
            writeln!(out, ">>> AI is thinking...")?;
            let result = engine.search(game.board(), SearchLimits::depth(config.depth));
            let Some(mv) = result.best_move else {
                bail!("engine found no move in a running game");
            };
            writeln!(
                out,
                "AI moves from {} to {}, removes {}",
                coord(mv.from()),
                coord(mv.to()),
                coord(mv.remove_cell())
            )?;
            debug!(score = result.score, nodes = result.nodes, "ai search");
            game.make_move(&mv).context("engine produced an illegal move")?;
            continue;
        }

        let here = game.board().player_position(human);
        writeln!(out, ">>> Your turn!")?;
        writeln!(out, "Your position: {}", coord(here))?;
        if config.show_hints {
            let hints: Vec<String> = game
                .board()
                .valid_neighbors(here)
                .into_iter()
                .map(coord)
                .collect();
            writeln!(out, "Valid moves: {}", hints.join(" "))?;
        }
        write!(out, "Enter your move (or 'help'/'quit'): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        let line = line.trim();

        match line {
            "quit" | "q" => {
                writeln!(out, "Exiting game...")?;
                return Ok(None);
            }
            "help" | "h" => {
                write_help(out)?;
                continue;
            }
            _ => {}
        }

        let mv = match parse_move_input(game.board(), human, line) {
            Ok(mv) => mv,
            Err(e) => {
                writeln!(out, "Invalid input: {e}. Try again.")?;
                continue;
            }
        };
        if let Err(e) = game.make_move(&mv) {
            writeln!(out, "Invalid move: {e}. Try again.")?;
        }
    }

    write_state(out, &game, ai)?;
    let winner = game.winner();
    if let Some(w) = winner {
        writeln!(out, "*** GAME OVER ***")?;
        writeln!(out, "Winner: {}", player_label(w, ai))?;
    }
    Ok(winner)
}
