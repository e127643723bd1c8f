//! Isolation CLI
//!
//! Play against the engine or watch two engines play.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use isolation_core::Player;
use isolation_cli::{run_interactive, run_selfplay, AppConfig};
use tracing_subscriber::EnvFilter;

/// 7x7 Isolation: move your token, then remove a cell. Whoever cannot move loses.
#[derive(Parser)]
#[command(name = "isolation", about = "Play 7x7 Isolation against a minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "isolation.toml")]
    config: PathBuf,

    /// Override search depth (every engine)
    #[arg(long)]
    depth: Option<u8>,

    /// Side the engine plays in interactive mode: 1 or 2
    #[arg(long, value_parser = parse_player)]
    ai_player: Option<Player>,

    /// Log search and move details to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Human vs engine (default)
    Play,
    /// Engine vs engine
    Selfplay {
        /// Emit one JSON snapshot per turn
        #[arg(long)]
        json: bool,
    },
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "player1" => Ok(Player::Player1),
        "2" | "player2" => Ok(Player::Player2),
        _ => Err(format!("unknown player '{s}' (expected 1 or 2)")),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.play.depth = depth;
        config.selfplay.player1_depth = depth;
        config.selfplay.player2_depth = depth;
    }
    if let Some(player) = cli.ai_player {
        config.play.ai_player = player;
    }
    config.validate()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = io::stdin();
            run_interactive(stdin.lock(), &mut out, &config.play)?;
        }
        Command::Selfplay { json } => {
            config.selfplay.json |= json;
            run_selfplay(&mut out, &config.selfplay)?;
        }
    }
    out.flush()?;
    Ok(())
}
