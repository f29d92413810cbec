//! GridWars - headless game driver
//!
//! Runs the engine end to end without a rendering layer: the human side is
//! driven by randomly generated cell intents, the AI side by the engine's
//! own policies. Useful for watching games, exercising the full turn loop,
//! and demoing the stalling and timeout behavior.

use anyhow::Result;
use clap::Parser;
use gridwars_engine::{
    Board, BoardSize, GameConfig, GameEngine, GameEvent, GameMode, Phase, Player,
};
use rand::seq::IndexedRandom;
use std::str::FromStr;
use tokio::time::{Duration, timeout};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// GridWars - N-by-N sliding-piece grid game
#[derive(Parser, Debug)]
#[command(name = "gridwars")]
#[command(about = "Headless driver for the GridWars engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Board size: 3x3, 4x4, or 5x5
    #[arg(long, default_value = "3x3", value_parser = BoardSize::from_str)]
    size: BoardSize,

    /// Play mode: multiplayer, ai-easy, ai-medium, or ai-hard
    #[arg(long, default_value = "ai-medium", value_parser = GameMode::from_str)]
    mode: GameMode,

    /// Number of games to play back to back
    #[arg(long, default_value = "1")]
    games: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.size, cli.mode);
    info!(?config, games = cli.games, "starting driver");

    let (mut engine, handle) = GameEngine::new();
    let mut events = engine.subscribe();
    tokio::spawn(engine.run());

    for game_number in 1..=cli.games {
        println!("=== Game {game_number} ({} on {}) ===", cli.mode, cli.size);
        handle.configure(config);
        run_game(&handle, &mut events, &config).await?;
    }

    handle.shutdown();
    Ok(())
}

/// Follows one game to completion, answering every human turn with a
/// randomly chosen legal intent.
async fn run_game(
    handle: &gridwars_engine::EngineHandle,
    events: &mut tokio::sync::mpsc::UnboundedReceiver<GameEvent>,
    config: &GameConfig,
) -> Result<()> {
    // Shadow of the engine's board, rebuilt from move events, so intents can
    // be picked without reaching into engine state.
    let mut board = Board::new(*config.board_size());
    let mut rng = rand::rng();

    loop {
        let event = match timeout(Duration::from_secs(120), events.recv()).await {
            Err(_) => anyhow::bail!("engine went quiet"),
            Ok(None) => anyhow::bail!("engine shut down mid-game"),
            Ok(Some(event)) => event,
        };

        match event {
            GameEvent::MoveApplied {
                player,
                mv,
                board: snapshot,
            } => {
                println!("{player}: {mv}");
                println!("{}\n", snapshot.display());
                board = snapshot;
            }
            GameEvent::TurnChanged(player) => {
                debug!(%player, "turn changed");
                if !config.is_ai(player) {
                    play_human_turn(handle, &board, player, &mut rng);
                }
            }
            GameEvent::StallingWarning { player, level } => {
                println!("warning {level} for {player}: stop repeating moves");
            }
            GameEvent::TimerTick { seconds_remaining } => {
                if seconds_remaining <= 5 {
                    println!("{seconds_remaining}s left");
                }
            }
            GameEvent::GameEnded { winner } => {
                match winner {
                    Some(player) => println!("{player} wins!"),
                    None => println!("Draw."),
                }
                return Ok(());
            }
        }
    }
}

/// Sends a random legal intent (or select-then-slide pair) for the player.
fn play_human_turn<R: rand::Rng>(
    handle: &gridwars_engine::EngineHandle,
    board: &Board,
    player: Player,
    rng: &mut R,
) {
    match phase_of(board) {
        Phase::Placing => {
            let empties: Vec<usize> = (0..board.cells().len())
                .filter(|&index| board.is_empty(index))
                .collect();
            if let Some(&to) = empties.choose(rng) {
                handle.cell_intent(to);
            }
        }
        Phase::Moving => {
            let movable: Vec<usize> = (0..board.cells().len())
                .filter(|&index| {
                    board.owner(index) == Some(player) && !board.empty_neighbors(index).is_empty()
                })
                .collect();
            if let Some(&from) = movable.choose(rng)
                && let Some(&to) = board.empty_neighbors(from).choose(rng)
            {
                handle.cell_intent(from);
                handle.cell_intent(to);
            }
        }
    }
}

/// Derives the phase from a board snapshot: both players are still placing
/// until the piece caps are reached.
fn phase_of(board: &Board) -> Phase {
    if board.occupied_count() < 2 * board.size().piece_cap() {
        Phase::Placing
    } else {
        Phase::Moving
    }
}
