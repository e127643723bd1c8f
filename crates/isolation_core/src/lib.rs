pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod snapshot;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use snapshot::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by automated players
// =============================================================================

/// Limits for a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the engine's player has no legal move)
    pub best_move: Option<Move>,
    /// Score of the chosen line from the engine's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all automated players implement.
///
/// An engine always plays one fixed side, reported by [`Engine::player`].
pub trait Engine {
    /// Search `board` for the engine's move.
    ///
    /// # Arguments
    /// * `board` - The position to analyze; never modified
    /// * `limits` - Search limits (depth)
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult;

    /// The side this engine plays.
    fn player(&self) -> Player;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
