//! Record-based game session for consumers that only speak flat records.

use isolation_core::{Engine, Game, GameSnapshot, Move, MoveRecord, Player, RecordError};
use minimax_engine::MinimaxEngine;
use tracing::debug;

use crate::config::SessionConfig;

/// One live game plus the engine that answers `ai_move` requests.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    engine: MinimaxEngine,
    ai_depth: u8,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl GameSession {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            game: Game::new(),
            engine: MinimaxEngine::new(config.ai_player),
            ai_depth: config.ai_depth,
        }
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.engine.new_game();
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.game)
    }

    /// Applies a move for the player to act. Nothing changes on error.
    pub fn submit(&mut self, record: MoveRecord) -> Result<(), RecordError> {
        let mv = Move::try_from(record)?;
        self.game.make_move(&mv)?;
        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Winner's player code, once the game has ended.
    pub fn winner(&self) -> Option<u8> {
        self.game.winner().map(Player::code)
    }

    pub fn current_player(&self) -> u8 {
        self.game.current_player().code()
    }

    pub fn can_player_move(&self, player_code: i32) -> Result<bool, RecordError> {
        let player = Player::from_code(player_code).ok_or(RecordError::PlayerCode(player_code))?;
        Ok(self.game.board().can_player_move(player))
    }

    /// The engine's move on the current board at the configured depth. The move
    /// is not applied. `None` means the engine's side has no legal move.
    pub fn ai_move(&mut self) -> Option<MoveRecord> {
        self.ai_move_at(self.ai_depth)
    }

    pub fn ai_move_at(&mut self, depth: u8) -> Option<MoveRecord> {
        let mv = self.engine.best_move(self.game.board(), depth)?;
        debug!(?mv, depth, nodes = self.engine.nodes_evaluated(), "session ai move");
        Some(MoveRecord::from(mv))
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
