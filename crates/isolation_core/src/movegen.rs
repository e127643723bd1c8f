use crate::{board::Board, types::*};

/// King-step offsets: up-left, up, up-right, left, right, down-left, down, down-right.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walkable cells adjacent to `from`, in `DIRECTIONS` order.
pub fn neighbors(board: &Board, from: Position) -> impl Iterator<Item = Position> + '_ {
    DIRECTIONS
        .iter()
        .map(move |&(dr, dc)| from.offset(dr, dc))
        .filter(move |&p| board.is_walkable(p))
}

pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut v = Vec::with_capacity(256);
    legal_moves_into(board, player, &mut v);
    v
}

/// Fills `out` with every legal move for `player`: each destination (neighbour
/// order) crossed with each removable cell (row-major order).
pub fn legal_moves_into(board: &Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    let from = board.player_position(player);
    let opponent = board.player_position(player.other());

    for to in neighbors(board, from) {
        for (idx, cell) in board.cells().iter().enumerate() {
            if *cell == CellState::Removed {
                continue;
            }
            let rm = Position::from_index(idx);
            if rm == to || rm == opponent {
                continue;
            }
            out.push(Move::new_unchecked(from, to, rm));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
