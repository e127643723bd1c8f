//! Flat records for consumers outside the crate: a full game snapshot and a
//! six-integer move.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::game::Game;
use crate::types::{Move, Position};

/// Full game state. `cells` holds 49 codes in row-major order:
/// 0 empty, 1 Player1, 2 Player2, 3 removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub cells: Vec<u8>,
    pub player1_row: i32,
    pub player1_col: i32,
    pub player2_row: i32,
    pub player2_col: i32,
    pub current_player: u8,
    pub turn_count: u32,
    pub game_over: bool,
    /// Player code of the winner; absent while the game is running.
    pub winner: Option<u8>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        let board = game.board();
        let p1 = board.player_position(crate::Player::Player1);
        let p2 = board.player_position(crate::Player::Player2);
        GameSnapshot {
            cells: board.cells().iter().map(|c| c.code()).collect(),
            player1_row: p1.row.into(),
            player1_col: p1.col.into(),
            player2_row: p2.row.into(),
            player2_col: p2.col.into(),
            current_player: game.current_player().code(),
            turn_count: game.turn(),
            game_over: game.is_over(),
            winner: game.winner().map(|w| w.code()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from_row: i32,
    pub from_col: i32,
    pub to_row: i32,
    pub to_col: i32,
    pub remove_row: i32,
    pub remove_col: i32,
}

impl From<Move> for MoveRecord {
    fn from(mv: Move) -> Self {
        MoveRecord {
            from_row: mv.from().row.into(),
            from_col: mv.from().col.into(),
            to_row: mv.to().row.into(),
            to_col: mv.to().col.into(),
            remove_row: mv.remove_cell().row.into(),
            remove_col: mv.remove_cell().col.into(),
        }
    }
}

fn coord(v: i32) -> Result<i8, RecordError> {
    i8::try_from(v).map_err(|_| RecordError::Coordinate(v))
}

fn position(row: i32, col: i32) -> Result<Position, RecordError> {
    Ok(Position::new(coord(row)?, coord(col)?))
}

impl TryFrom<MoveRecord> for Move {
    type Error = RecordError;

    fn try_from(r: MoveRecord) -> Result<Self, Self::Error> {
        let from = position(r.from_row, r.from_col)?;
        let to = position(r.to_row, r.to_col)?;
        let remove = position(r.remove_row, r.remove_col)?;
        Ok(Move::new(from, to, remove)?)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
