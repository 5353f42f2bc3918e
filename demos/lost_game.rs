//! Lost Game
//!
//! This demo replays the packaged three-beaker puzzle. No two beakers share
//! a top liquid, so the game is lost from the start and both moves are
//! ignored.
//!
//! Run with: RUST_LOG=liquid_sort=debug cargo run --example lost_game

use liquid_sort::{game, State};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    println!("=== Lost Game Example ===\n");

    let mut game = game![[0, 2, 1, 1], [0, 3, 1, 1], [0, 1, 1, 1]]?;
    println!("Initial beakers: {game}");
    println!("Initial state: {}", game.state());

    game.make_move(0, 1)?;
    let state = game.make_move(0, -1)?;

    println!("Final beakers: {game}");
    println!("Final state: {state} (final: {})", state.is_final());

    println!("\n=== Example Complete ===");
    Ok(())
}
