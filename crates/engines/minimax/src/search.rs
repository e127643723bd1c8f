//! Depth-limited minimax with alpha-beta pruning, in negamax form

use isolation_core::{legal_moves, Board, Move, Player};
use tracing::debug;

use crate::eval::evaluate;

/// Base magnitude of a decided game. The remaining depth is added on top so a
/// quicker win scores higher and a later loss scores less badly.
pub const WIN_SCORE: i32 = 100_000;

const INF: i32 = i32::MAX;

/// Searches `board` for `agent` and returns the best move with its score.
///
/// # Arguments
/// * `board` - The position to search; never modified
/// * `agent` - The maximizing player
/// * `depth` - Maximum search depth in plies; 0 and 1 both score root moves
///   directly with the evaluator
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// `None` if `agent` has no legal move. Otherwise the first move (in generator
/// order) reaching the best score.
pub fn pick_best_move(
    board: &Board,
    agent: Player,
    depth: u8,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let mut tmp = board.clone();
    let moves = legal_moves(&tmp, agent);
    if moves.is_empty() {
        return None;
    }
    debug!(?agent, count = moves.len(), depth, "evaluating root moves");

    let mut best = moves[0];
    let mut best_score = -INF;
    let mut alpha = -INF;

    for mv in moves {
        let undo = tmp.make_move(mv, agent);
        let score = -negamax(
            &mut tmp,
            agent.other(),
            depth.saturating_sub(1),
            -INF,
            -alpha,
            nodes,
        );
        tmp.unmake_move(undo);

        // Strict: ties keep the earlier move.
        if score > best_score {
            best_score = score;
            best = mv;
        }
        alpha = alpha.max(best_score);
    }

    Some((best, best_score))
}

/// Recursive negamax search with alpha-beta pruning.
///
/// Scores are from `mover`'s perspective. A mover with no move loses
/// with `-(WIN_SCORE + depth)`.
fn negamax(
    board: &mut Board,
    mover: Player,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return evaluate(board, mover, mover.other());
    }

    if !board.can_player_move(mover) {
        return -(WIN_SCORE + depth as i32);
    }
    let moves = legal_moves(board, mover);
    if moves.is_empty() {
        return -(WIN_SCORE + depth as i32);
    }

    let mut best = -INF;
    for mv in moves {
        let undo = board.make_move(mv, mover);
        let score = -negamax(board, mover.other(), depth - 1, -beta, -alpha, nodes);
        board.unmake_move(undo);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break; // Cutoff
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
