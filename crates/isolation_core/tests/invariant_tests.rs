//! Property tests over boards reached by random play.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use isolation_core::{Board, CellState, Move, Player, Position};

/// Plays `plies` random legal moves from the start, alternating players.
/// Returns the board and the player to move next.
fn random_board(seed: u64, plies: usize) -> (Board, Player) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut player = Player::Player1;
    for _ in 0..plies {
        let moves = board.all_possible_moves(player);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        board.apply_move(&mv, player).unwrap();
        player = player.other();
    }
    (board, player)
}

fn all_positions() -> impl Iterator<Item = Position> {
    (-1..=7).flat_map(|r| (-1..=7).map(move |c| Position::new(r, c)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn enumeration_matches_validity(seed in any::<u64>(), plies in 0usize..30) {
        let (board, _) = random_board(seed, plies);
        for player in [Player::Player1, Player::Player2] {
            let moves = board.all_possible_moves(player);
            let set: HashSet<Move> = moves.iter().copied().collect();
            prop_assert_eq!(set.len(), moves.len(), "duplicate moves generated");
            for m in &moves {
                prop_assert!(board.is_valid_move(m, player));
            }

            let from = board.player_position(player);
            for to in all_positions().filter(|&to| to != from) {
                for rm in all_positions() {
                    let m = Move::new(from, to, rm).unwrap();
                    prop_assert_eq!(board.is_valid_move(&m, player), set.contains(&m));
                }
            }
        }
    }

    #[test]
    fn apply_is_all_or_nothing(
        seed in any::<u64>(),
        plies in 0usize..30,
        to in (-1i8..=7, -1i8..=7),
        rm in (-1i8..=7, -1i8..=7),
    ) {
        let (board, player) = random_board(seed, plies);
        let from = board.player_position(player);
        let Ok(m) = Move::new(from, Position::new(to.0, to.1), Position::new(rm.0, rm.1)) else {
            return Ok(());
        };

        let mut after = board.clone();
        match after.apply_move(&m, player) {
            Err(_) => prop_assert_eq!(&after, &board),
            Ok(()) => {
                prop_assert_eq!(after.player_position(player), m.to());
                prop_assert_eq!(after.player_position(player.other()), board.player_position(player.other()));
                prop_assert_eq!(after.cell(m.to()), Some(CellState::Occupied(player)));
                prop_assert_eq!(after.cell(m.remove_cell()), Some(CellState::Removed));
                if m.remove_cell() != m.from() {
                    prop_assert_eq!(after.cell(m.from()), Some(CellState::Empty));
                }
            }
        }
    }

    #[test]
    fn unmake_restores_exactly(seed in any::<u64>(), plies in 0usize..30) {
        let (mut board, player) = random_board(seed, plies);
        let before = board.clone();
        for m in board.all_possible_moves(player) {
            let undo = board.make_move(m, player);
            board.unmake_move(undo);
            prop_assert_eq!(&board, &before);
        }
    }
}
