//! Minimax Isolation Engine
//!
//! Alpha-beta search over a mobility + centrality evaluation.

mod eval;
mod search;

use isolation_core::{Board, Engine, Move, Player, SearchLimits, SearchResult};
use tracing::info;

/// Isolation engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Negamax search with alpha-beta pruning, one private board copy per search
/// - Terminal scores that prefer faster wins and slower losses
/// - Mobility and centrality evaluation at the horizon
///
/// Searches are deterministic: the same board and depth always give the same
/// move and node count.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    agent: Player,
    /// Node counter for the last search
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(agent: Player) -> Self {
        Self { agent, nodes: 0 }
    }

    /// Best move for this engine's player at `depth`, or `None` if it is stuck.
    pub fn best_move(&mut self, board: &Board, depth: u8) -> Option<Move> {
        self.search(board, SearchLimits::depth(depth)).best_move
    }

    /// Nodes visited by the last search.
    pub fn nodes_evaluated(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        let result = search::pick_best_move(board, self.agent, limits.depth, &mut self.nodes);

        match result {
            Some((mv, score)) => info!(agent = ?self.agent, ?mv, score, nodes = self.nodes, "best move"),
            None => info!(agent = ?self.agent, "no legal move"),
        }

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(-search::WIN_SCORE),
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn player(&self) -> Player {
        self.agent
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{centrality, evaluate, mobility};
pub use search::{pick_best_move, WIN_SCORE};
