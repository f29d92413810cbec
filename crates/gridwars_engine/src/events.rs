//! Observer events emitted by the engine.
//!
//! Presentation layers subscribe to these; the engine never touches
//! rendering state directly.

use crate::action::Move;
use crate::board::Board;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Event published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turn passed to a new player.
    TurnChanged(Player),
    /// The game ended with a winner, or in a draw when `winner` is `None`.
    GameEnded {
        /// Winning player, if any.
        winner: Option<Player>,
    },
    /// A move was applied to the board.
    MoveApplied {
        /// The player who moved.
        player: Player,
        /// The applied move.
        mv: Move,
        /// Board snapshot after the move.
        board: Board,
    },
    /// A repetitive slide earned a stalling warning.
    StallingWarning {
        /// The offending player.
        player: Player,
        /// Warning level: 1 (soft) or 2 (final).
        level: u8,
    },
    /// The turn clock ticked.
    TimerTick {
        /// Seconds left on the current turn.
        seconds_remaining: u32,
    },
}
