//! Human move notation: rows are letters `a`-`g`, columns are numbers `1`-`7`.
//!
//! A move is typed as `toRow toCol removeRow removeCol`, e.g. `b 4 c 5`.
//! The origin is always the mover's current square.

use crate::{board::Board, error::ParseError, types::*};

pub fn move_to_text(mv: &Move) -> String {
    format!(
        "{} -> {} x {}",
        position_to_coord(mv.from()),
        position_to_coord(mv.to()),
        position_to_coord(mv.remove_cell())
    )
}

/// Parses a row letter. Letters past `g` map to off-board rows and are left
/// for the legality check to reject.
fn parse_row(tok: &str) -> Result<i8, ParseError> {
    match tok.as_bytes() {
        [c] if c.is_ascii_lowercase() => Ok((c - b'a') as i8),
        _ => Err(ParseError::Row(tok.to_string())),
    }
}

fn parse_col(tok: &str) -> Result<i8, ParseError> {
    tok.parse::<i8>()
        .ok()
        .and_then(|c| c.checked_sub(1))
        .ok_or_else(|| ParseError::Column(tok.to_string()))
}

/// Builds the move `player` would make on `board` from typed input.
///
/// Only the shape is checked here; legality is up to `Board::check_move`.
pub fn parse_move_input(board: &Board, player: Player, input: &str) -> Result<Move, ParseError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 4 {
        return Err(ParseError::FieldCount(parts.len()));
    }
    let to = Position::new(parse_row(parts[0])?, parse_col(parts[1])?);
    let remove = Position::new(parse_row(parts[2])?, parse_col(parts[3])?);
    Ok(Move::new(board.player_position(player), to, remove)?)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
