use super::*;
use isolation_core::{Engine, SearchLimits};

use crate::MinimaxEngine;

/// Plain two-sided minimax over board copies, written the long way round.
/// With `prune` off it visits the whole tree.
#[allow(clippy::too_many_arguments)]
fn reference_minimax(
    board: &Board,
    agent: Player,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    prune: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return evaluate(board, agent, agent.other());
    }
    let mover = if maximizing { agent } else { agent.other() };
    let moves = board.all_possible_moves(mover);
    if !board.can_player_move(mover) || moves.is_empty() {
        let decided = WIN_SCORE + depth as i32;
        return if maximizing { -decided } else { decided };
    }

    if maximizing {
        let mut max_eval = i32::MIN;
        for mv in moves {
            let mut child = board.clone();
            child.apply_move(&mv, mover).unwrap();
            let eval = reference_minimax(&child, agent, depth - 1, false, alpha, beta, prune, nodes);
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if prune && beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for mv in moves {
            let mut child = board.clone();
            child.apply_move(&mv, mover).unwrap();
            let eval = reference_minimax(&child, agent, depth - 1, true, alpha, beta, prune, nodes);
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if prune && beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

fn reference_best(board: &Board, agent: Player, depth: u8, prune: bool) -> Option<(Move, i32, u64)> {
    let moves = board.all_possible_moves(agent);
    let mut best: Option<(Move, i32)> = None;
    let mut alpha = i32::MIN;
    let mut nodes = 0;
    for mv in moves {
        let mut child = board.clone();
        child.apply_move(&mv, agent).unwrap();
        let score = reference_minimax(
            &child,
            agent,
            depth.saturating_sub(1),
            false,
            alpha,
            i32::MAX,
            prune,
            &mut nodes,
        );
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
        if prune {
            alpha = alpha.max(best.map_or(i32::MIN, |(_, s)| s));
        }
    }
    best.map(|(mv, s)| (mv, s, nodes))
}

fn small_board() -> Board {
    Board::from_diagram(
        "
        xxxxxxx
        x1..xxx
        x...xxx
        x..2xxx
        xxxxxxx
        xxxxxxx
        xxxxxxx
        ",
    )
    .unwrap()
}

fn tiny_board() -> Board {
    Board::from_diagram(
        "
        xxxxxxx
        x1.xxxx
        x..xxxx
        x.2xxxx
        xxxxxxx
        xxxxxxx
        xxxxxxx
        ",
    )
    .unwrap()
}

#[test]
fn test_pick_best_move_start_position() {
    let board = Board::new();
    let mut nodes = 0;
    let result = pick_best_move(&board, Player::Player1, 2, &mut nodes);
    let (mv, _) = result.expect("start position has moves");
    assert!(board.is_valid_move(&mv, Player::Player1));
    assert!(nodes > 235);
}

#[test]
fn test_search_does_not_touch_board() {
    let board = small_board();
    let before = board.clone();
    let mut nodes = 0;
    pick_best_move(&board, Player::Player2, 3, &mut nodes);
    assert_eq!(board, before);
}

#[test]
fn test_finds_trapping_move() {
    // Player2's only free neighbour is (5,3); removing it wins on the spot.
    let board = Board::from_diagram(
        "
        ...1...
        .......
        .......
        .......
        .......
        ..x.x..
        ..x2x..
        ",
    )
    .unwrap();
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&board, Player::Player1, 2, &mut nodes).unwrap();
    assert_eq!(score, WIN_SCORE + 1);
    // First trapping move in generator order.
    assert_eq!(mv.to(), isolation_core::Position::new(0, 2));
    assert_eq!(mv.remove_cell(), isolation_core::Position::new(5, 3));

    let mut after = board.clone();
    after.apply_move(&mv, Player::Player1).unwrap();
    assert!(!after.can_player_move(Player::Player2));
}

#[test]
fn test_lost_position_still_returns_earliest_move() {
    // Player1 can only step to (0,1), and Player2 can then remove (0,0).
    let board = Board::from_diagram(
        "
        1.x....
        xxx....
        .......
        .......
        .......
        .......
        ...2...
        ",
    )
    .unwrap();
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&board, Player::Player1, 3, &mut nodes).unwrap();
    assert_eq!(score, -(WIN_SCORE + 1));
    assert_eq!(mv, board.all_possible_moves(Player::Player1)[0]);
}

#[test]
fn test_no_move_returns_none() {
    let board = Board::from_diagram(
        "
        1x.....
        xx.....
        .......
        .......
        .......
        .......
        ...2...
        ",
    )
    .unwrap();
    let mut nodes = 0;
    assert_eq!(pick_best_move(&board, Player::Player1, 3, &mut nodes), None);
    assert_eq!(nodes, 0);

    let mut engine = MinimaxEngine::new(Player::Player1);
    let result = engine.search(&board, SearchLimits::depth(3));
    assert!(result.best_move.is_none());
    assert_eq!(result.nodes, 0);
}

#[test]
fn test_search_is_deterministic() {
    let board = Board::new();
    let mut engine = MinimaxEngine::new(Player::Player1);
    let first = engine.search(&board, SearchLimits::depth(2));
    let second = engine.search(&board, SearchLimits::depth(2));
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
    assert_eq!(engine.nodes_evaluated(), second.nodes);
}

#[test]
fn test_depth_one_is_greedy() {
    let board = Board::new();
    let mut greedy: Option<(Move, i32)> = None;
    for mv in board.all_possible_moves(Player::Player1) {
        let mut child = board.clone();
        child.apply_move(&mv, Player::Player1).unwrap();
        let score = evaluate(&child, Player::Player1, Player::Player2);
        if greedy.map_or(true, |(_, s)| score > s) {
            greedy = Some((mv, score));
        }
    }

    for depth in [0, 1] {
        let mut nodes = 0;
        let result = pick_best_move(&board, Player::Player1, depth, &mut nodes);
        assert_eq!(result, greedy, "depth {depth}");
        assert_eq!(nodes, 235, "one leaf per root move");
    }
}

#[test]
fn test_pruning_matches_exhaustive_minimax() {
    for (name, board) in [("small", small_board()), ("tiny", tiny_board())] {
        let max_depth = if name == "tiny" { 5 } else { 3 };
        for agent in [Player::Player1, Player::Player2] {
            for depth in 1..=max_depth {
                let mut nodes = 0;
                let pruned = pick_best_move(&board, agent, depth, &mut nodes).unwrap();
                let (mv, score, full_nodes) = reference_best(&board, agent, depth, false).unwrap();
                assert_eq!(pruned, (mv, score), "{name} {agent:?} depth {depth}");
                assert!(nodes <= full_nodes);
            }
        }
    }
}

#[test]
fn test_negamax_matches_two_sided_alpha_beta() {
    // Same move, score and node count as the max/min formulation.
    for board in [small_board(), tiny_board(), Board::new()] {
        let depth = if board == Board::new() { 2 } else { 3 };
        for agent in [Player::Player1, Player::Player2] {
            let mut nodes = 0;
            let (mv, score) = pick_best_move(&board, agent, depth, &mut nodes).unwrap();
            let reference = reference_best(&board, agent, depth, true).unwrap();
            assert_eq!((mv, score, nodes), reference, "{agent:?} depth {depth}");
        }
    }
}

#[test]
fn test_engine_reports_depth_and_player() {
    let mut engine = MinimaxEngine::new(Player::Player2);
    assert_eq!(engine.player(), Player::Player2);
    let result = engine.search(&Board::new(), SearchLimits::depth(1));
    assert_eq!(result.depth, 1);
    let mv = result.best_move.unwrap();
    assert_eq!(mv.from(), isolation_core::Position::new(6, 3));
    assert_eq!(engine.best_move(&Board::new(), 1), Some(mv));
}
