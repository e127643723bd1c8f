use crate::types::Position;

/// The board rule a rejected move broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("move does not start from the player's position {0:?}")]
    WrongOrigin(Position),

    #[error("{0:?} is not a walkable neighbour of the origin")]
    UnreachableDestination(Position),

    #[error("cell {0:?} to remove is off the board")]
    RemovalOutOfBounds(Position),

    #[error("cell {0:?} is already removed")]
    AlreadyRemoved(Position),

    #[error("cannot remove the destination cell {0:?}")]
    RemovesDestination(Position),

    #[error("cannot remove the opponent's cell {0:?}")]
    RemovesOpponent(Position),
}

/// Errors that can occur when submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("malformed move: origin and destination are both {0:?}")]
    Malformed(Position),

    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when reading text input (diagrams, move notation).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 4 fields (toRow toCol removeRow removeCol), got {0}")]
    FieldCount(usize),

    #[error("invalid row '{0}': expected a letter a-g")]
    Row(String),

    #[error("invalid column '{0}': expected a number 1-7")]
    Column(String),

    #[error("invalid board diagram: {0}")]
    Diagram(String),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors that can occur when translating external records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("unknown player code {0} (expected 1 or 2)")]
    PlayerCode(i32),

    #[error("coordinate {0} does not fit a board position")]
    Coordinate(i32),

    #[error(transparent)]
    Move(#[from] MoveError),
}
