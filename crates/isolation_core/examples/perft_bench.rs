//! Perft benchmark for profiling move generation with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p isolation_core -- [depth]
//!
//! Examples:
//!   # Default: depth 3 from the starting position
//!   cargo flamegraph --example perft_bench -p isolation_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p isolation_core -- 2

use isolation_core::{Board, Player, perft};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    let mut board = Board::new();
    println!("Perft benchmark from the starting position");
    println!("{board}");

    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(&mut board, Player::Player1, d);
        let elapsed = start.elapsed();
        let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
        println!(
            "depth {d}: {nodes:>12} nodes in {:>8.3}s ({:.0} nodes/s)",
            elapsed.as_secs_f64(),
            nps
        );
    }
}
