//! GridWars engine - generalized N-by-N sliding-piece grid game
//!
//! Each player places a fixed number of pieces, then slides pieces to
//! adjacent empty cells, aiming to complete a full row, column, or diagonal.
//!
//! # Architecture
//!
//! - **Game**: synchronous state machine (board, phase, turn, selection)
//! - **Rules**: win detection, move generation, draw detection
//! - **AI**: three policies (random-biased, heuristic, alpha-beta minimax)
//! - **RepetitionGuard**: stalling detection with escalating penalties
//! - **GameEngine**: async supervisor serializing the turn clock and the AI
//!   thinking delay against the shared state
//!
//! # Example
//!
//! ```no_run
//! use gridwars_engine::{BoardSize, GameConfig, GameEngine, GameMode};
//!
//! # async fn example() {
//! let (mut engine, handle) = GameEngine::new();
//! let mut events = engine.subscribe();
//!
//! tokio::spawn(engine.run());
//! handle.configure(GameConfig::new(BoardSize::Three, GameMode::AiMedium));
//!
//! while let Some(event) = events.recv().await {
//!     println!("{:?}", event);
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod ai;
mod board;
mod clock;
mod config;
mod engine;
mod events;
mod game;
mod repetition;
mod rules;
mod types;

// Crate-level exports - domain types
pub use types::{Cell, GameStatus, Phase, Player};

// Crate-level exports - board geometry
pub use board::{Board, BoardSize};

// Crate-level exports - moves
pub use action::{Move, MoveError};

// Crate-level exports - rules
pub use rules::{has_win, is_blocked, is_legal, legal_moves, legal_moves_filtered, winner};

// Crate-level exports - game state machine
pub use game::{Game, MoveSource, PieceCounts};

// Crate-level exports - repetition guard
pub use repetition::{RepetitionGuard, StallingLevel};

// Crate-level exports - AI
pub use ai::{Difficulty, SearchOutcome, choose_move, search};

// Crate-level exports - configuration and events
pub use config::{AI_THINK_DELAY_MS, AI_TURN_SECONDS, GameConfig, GameMode, TURN_SECONDS};
pub use events::GameEvent;

// Crate-level exports - async engine
pub use engine::{EngineCommand, EngineHandle, GameEngine};
