//! Mobility and centrality evaluation

use isolation_core::{Board, Player, Position, BOARD_SIZE};

const CENTER: Position = Position::new(BOARD_SIZE / 2, BOARD_SIZE / 2);
const MOBILITY_WEIGHT: i32 = 10;

/// Scores `board` from `for_player`'s point of view against `against_player`.
///
/// Returns:
/// - Positive = `for_player` has more room and/or sits closer to the center
/// - Negative = the opponent does
///
/// Swapping the two players negates the score.
pub fn evaluate(board: &Board, for_player: Player, against_player: Player) -> i32 {
    let mobility = (mobility(board, for_player) - mobility(board, against_player)) * MOBILITY_WEIGHT;
    let position = centrality(board.player_position(for_player))
        - centrality(board.player_position(against_player));
    mobility + position
}

/// Number of walkable cells next to `player`.
#[inline]
pub fn mobility(board: &Board, player: Player) -> i32 {
    isolation_core::neighbors(board, board.player_position(player)).count() as i32
}

/// Positional bonus: 14 on the center cell, 2 less per step of Manhattan distance.
#[inline]
pub fn centrality(p: Position) -> i32 {
    (BOARD_SIZE as i32 - p.manhattan(CENTER)) * 2
}
