//! Turn sequencing: whose move it is, the turn counter and game-over detection.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::MoveError;
use crate::types::{Move, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver { winner: Player },
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current: Player,
    turn: u32,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh game: starting board, Player1 to act, turn 0.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::Player1,
            turn: 0,
            status: GameStatus::Playing,
        }
    }

    /// Starts from an arbitrary board with `to_move` to act. If that player is
    /// already stuck the game begins over, won by the other side.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut game = Self {
            board,
            current: to_move,
            turn: 0,
            status: GameStatus::Playing,
        };
        game.check_game_over();
        game
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { .. })
    }

    /// The winner, once the game has ended.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::GameOver { winner } => Some(winner),
            GameStatus::Playing => None,
        }
    }

    /// Legal moves for the player to act.
    pub fn valid_moves(&self) -> Vec<Move> {
        self.board.all_possible_moves(self.current)
    }

    /// Applies `mv` for the player to act. Rejected moves leave the game untouched.
    pub fn make_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        if self.is_over() {
            debug!(?mv, "move rejected: game over");
            return Err(MoveError::GameOver);
        }

        if let Err(reason) = self.board.apply_move(mv, self.current) {
            debug!(player = ?self.current, %reason, "move rejected");
            return Err(reason.into());
        }

        debug!(player = ?self.current, turn = self.turn, ?mv, "move applied");
        self.turn += 1;
        self.current = self.current.other();
        self.check_game_over();
        Ok(())
    }

    fn check_game_over(&mut self) {
        if !self.board.can_player_move(self.current) {
            let winner = self.current.other();
            info!(?winner, turn = self.turn, "game over");
            self.status = GameStatus::GameOver { winner };
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
