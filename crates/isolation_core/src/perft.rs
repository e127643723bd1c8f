use crate::{board::Board, movegen::legal_moves_into, types::*};

/// Pure perft node count.
/// Counts all move sequences of length `depth` with `to_move` moving first and
/// the players alternating. A player with no legal move ends that line.
pub fn perft(board: &mut Board, to_move: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, player: Player, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        legal_moves_into(board, player, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = board.make_move(mv, player);
            nodes += inner(board, player.other(), depth - 1, rest);
            board.unmake_move(undo);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(256); depth as usize];
    inner(board, to_move, depth, &mut layers[..])
}
