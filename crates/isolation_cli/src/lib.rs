//! Terminal front end for Isolation
//!
//! This crate provides:
//! - An interactive human-vs-engine game loop
//! - Engine self-play with text or JSON output
//! - `GameSession`, the record-based boundary used by external consumers
//!
//! # Usage
//!
//! ```bash
//! # Play against the engine (engine moves first by default)
//! cargo run -p isolation_cli -- play --depth 3
//!
//! # Watch two engines play, one JSON snapshot per turn
//! cargo run -p isolation_cli -- selfplay --json
//! ```

pub mod config;
pub mod play;
pub mod selfplay;
pub mod session;

pub use config::*;
pub use play::run_interactive;
pub use selfplay::run_selfplay;
pub use session::GameSession;
