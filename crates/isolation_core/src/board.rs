use std::fmt;

use crate::error::{IllegalMove, ParseError};
use crate::movegen::{legal_moves, neighbors};
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [CellState; NUM_CELLS],
    positions: [Position; 2], // indexed by Player::idx
}

/// Everything `make_move` overwrote, so `unmake_move` can restore it exactly.
#[derive(Clone, Copy, Debug)]
pub struct Undo {
    pub mover: Player,
    pub from: Position,
    pub to: Position,
    pub removed: Position,
    pub removed_prev: CellState,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting position: Player1 on (0,3), Player2 on (6,3), everything else empty.
    pub fn new() -> Self {
        let mut b = Board {
            cells: [CellState::Empty; NUM_CELLS],
            positions: [PLAYER1_START, PLAYER2_START],
        };
        b.cells[PLAYER1_START.index()] = CellState::Occupied(Player::Player1);
        b.cells[PLAYER2_START.index()] = CellState::Occupied(Player::Player2);
        b
    }

    /// Parses a 7-line diagram, top row first: `.` empty, `x` removed,
    /// `1`/`2` the players. Whitespace inside a line is ignored.
    pub fn from_diagram(diagram: &str) -> Result<Self, ParseError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(ParseError::Diagram(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut cells = [CellState::Empty; NUM_CELLS];
        let mut found: [Option<Position>; 2] = [None, None];

        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != BOARD_SIZE as usize {
                return Err(ParseError::Diagram(format!(
                    "row {} has {} cells",
                    row + 1,
                    chars.len()
                )));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let p = Position::new(row as i8, col as i8);
                let state = match ch {
                    '.' => CellState::Empty,
                    'x' | 'X' => CellState::Removed,
                    '1' => CellState::Occupied(Player::Player1),
                    '2' => CellState::Occupied(Player::Player2),
                    _ => return Err(ParseError::Diagram(format!("unknown cell '{ch}'"))),
                };
                if let CellState::Occupied(player) = state {
                    if found[player.idx()].replace(p).is_some() {
                        return Err(ParseError::Diagram(format!(
                            "{player:?} appears more than once"
                        )));
                    }
                }
                cells[p.index()] = state;
            }
        }

        match found {
            [Some(p1), Some(p2)] => Ok(Board {
                cells,
                positions: [p1, p2],
            }),
            _ => Err(ParseError::Diagram("both players must be placed".into())),
        }
    }

    /// Cell state, or `None` for off-board positions.
    pub fn cell(&self, p: Position) -> Option<CellState> {
        p.is_on_board().then(|| self.cells[p.index()])
    }

    pub fn cells(&self) -> &[CellState; NUM_CELLS] {
        &self.cells
    }

    pub fn player_position(&self, player: Player) -> Position {
        self.positions[player.idx()]
    }

    pub fn is_valid_position(&self, p: Position) -> bool {
        p.is_on_board()
    }

    pub fn is_walkable(&self, p: Position) -> bool {
        self.cell(p) == Some(CellState::Empty)
    }

    /// Walkable cells around `p` in the fixed direction order.
    pub fn valid_neighbors(&self, p: Position) -> Vec<Position> {
        neighbors(self, p).collect()
    }

    pub fn is_valid_move(&self, mv: &Move, player: Player) -> bool {
        self.check_move(mv, player).is_ok()
    }

    /// Reports the first rule `mv` breaks for `player`, if any.
    pub fn check_move(&self, mv: &Move, player: Player) -> Result<(), IllegalMove> {
        let current = self.player_position(player);
        if mv.from() != current {
            return Err(IllegalMove::WrongOrigin(mv.from()));
        }
        if !neighbors(self, current).any(|n| n == mv.to()) {
            return Err(IllegalMove::UnreachableDestination(mv.to()));
        }

        let rm = mv.remove_cell();
        match self.cell(rm) {
            None => return Err(IllegalMove::RemovalOutOfBounds(rm)),
            Some(CellState::Removed) => return Err(IllegalMove::AlreadyRemoved(rm)),
            Some(_) => {}
        }
        if rm == mv.to() {
            return Err(IllegalMove::RemovesDestination(rm));
        }
        if rm == self.player_position(player.other()) {
            return Err(IllegalMove::RemovesOpponent(rm));
        }
        // Removing the vacated origin is allowed.
        Ok(())
    }

    /// Validates and applies `mv`. On error the board is untouched.
    pub fn apply_move(&mut self, mv: &Move, player: Player) -> Result<(), IllegalMove> {
        self.check_move(mv, player)?;
        self.make_move(*mv, player);
        Ok(())
    }

    /// Applies a move without validation. Only call with moves produced by
    /// the generator for this board and player.
    pub fn make_move(&mut self, mv: Move, player: Player) -> Undo {
        let undo = Undo {
            mover: player,
            from: mv.from(),
            to: mv.to(),
            removed: mv.remove_cell(),
            removed_prev: self.cells[mv.remove_cell().index()],
        };

        self.cells[mv.from().index()] = CellState::Empty;
        self.cells[mv.to().index()] = CellState::Occupied(player);
        self.positions[player.idx()] = mv.to();
        self.cells[mv.remove_cell().index()] = CellState::Removed;

        undo
    }

    pub fn unmake_move(&mut self, undo: Undo) {
        // Restore in reverse order; `removed` may coincide with `from`.
        self.cells[undo.removed.index()] = undo.removed_prev;
        self.cells[undo.to.index()] = CellState::Empty;
        self.cells[undo.from.index()] = CellState::Occupied(undo.mover);
        self.positions[undo.mover.idx()] = undo.from;
    }

    pub fn all_possible_moves(&self, player: Player) -> Vec<Move> {
        legal_moves(self, player)
    }

    pub fn can_player_move(&self, player: Player) -> bool {
        neighbors(self, self.player_position(player)).next().is_some()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}  ", col + 1)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, " {} ", (b'a' + row as u8) as char)?;
            for col in 0..BOARD_SIZE {
                let glyph = match self.cells[Position::new(row, col).index()] {
                    CellState::Empty => "[ ]",
                    CellState::Occupied(Player::Player1) => "[B]",
                    CellState::Occupied(Player::Player2) => "[R]",
                    CellState::Removed => "[X]",
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
