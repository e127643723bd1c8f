use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// Side length of the (fixed) square board.
pub const BOARD_SIZE: i8 = 7;
/// Number of cells on the board.
pub const NUM_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

pub const PLAYER1_START: Position = Position::new(0, 3);
pub const PLAYER2_START: Position = Position::new(6, 3);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }
    /// Wire code used by snapshot records (1 or 2).
    pub fn code(self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }
    pub fn from_code(code: i32) -> Option<Player> {
        match code {
            1 => Some(Player::Player1),
            2 => Some(Player::Player2),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Occupied(Player),
    Removed,
}

impl CellState {
    /// Wire code: Empty=0, Player1=1, Player2=2, Removed=3.
    pub fn code(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Occupied(p) => p.code(),
            CellState::Removed => 3,
        }
    }
}

/// A grid coordinate. Coordinates outside the board are representable so that
/// external input can be rejected by the validity predicates instead of being
/// clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Position {
        Position::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    pub fn manhattan(self, other: Position) -> i32 {
        (self.row as i32 - other.row as i32).abs() + (self.col as i32 - other.col as i32).abs()
    }

    /// Row-major index; only meaningful for on-board positions.
    pub(crate) fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + (self.col as usize)
    }

    pub(crate) fn from_index(idx: usize) -> Position {
        let n = BOARD_SIZE as usize;
        Position::new((idx / n) as i8, (idx % n) as i8)
    }
}

/// A full turn: step from `from` to `to`, then remove `remove_cell`.
///
/// Construction rejects `from == to`, so every `Move` value is well-formed.
/// Whether it is legal on a given board is decided by `Board::check_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    from: Position,
    to: Position,
    remove_cell: Position,
}

impl Move {
    pub fn new(from: Position, to: Position, remove_cell: Position) -> Result<Self, MoveError> {
        if from == to {
            return Err(MoveError::Malformed(from));
        }
        Ok(Self {
            from,
            to,
            remove_cell,
        })
    }

    /// Caller guarantees `from != to` (the move generator only produces steps).
    pub(crate) fn new_unchecked(from: Position, to: Position, remove_cell: Position) -> Self {
        debug_assert_ne!(from, to);
        Self {
            from,
            to,
            remove_cell,
        }
    }

    pub fn from(&self) -> Position {
        self.from
    }
    pub fn to(&self) -> Position {
        self.to
    }
    pub fn remove_cell(&self) -> Position {
        self.remove_cell
    }
}

// Helpers
pub fn position_to_coord(p: Position) -> String {
    let r = (b'a' as i16 + p.row as i16) as u8 as char;
    format!("{r}{}", p.col as i16 + 1)
}

pub fn coord_to_position(c: &str) -> Option<Position> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let r = b[0];
    let c = b[1];
    if !(b'a'..=b'g').contains(&r) || !(b'1'..=b'7').contains(&c) {
        return None;
    }
    Some(Position::new((r - b'a') as i8, (c - b'1') as i8))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
