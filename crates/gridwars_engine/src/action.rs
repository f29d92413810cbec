//! First-class move types.
//!
//! Moves are domain events, not side effects. They carry the player's intent
//! and can be validated, replayed, and logged independently of execution.

use serde::{Deserialize, Serialize};

/// A move in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a new piece on an empty cell (placing phase only).
    Place {
        /// Destination cell index.
        to: usize,
    },
    /// Slide an existing piece to an adjacent empty cell (moving phase only).
    Relocate {
        /// Origin cell index.
        from: usize,
        /// Destination cell index.
        to: usize,
    },
}

impl Move {
    /// Returns the destination cell of the move.
    pub fn to(&self) -> usize {
        match self {
            Move::Place { to } => *to,
            Move::Relocate { to, .. } => *to,
        }
    }

    /// Returns the origin cell for relocations.
    pub fn from(&self) -> Option<usize> {
        match self {
            Move::Place { .. } => None,
            Move::Relocate { from, .. } => Some(*from),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { to } => write!(f, "place {}", to),
            Move::Relocate { from, to } => write!(f, "slide {}-{}", from, to),
        }
    }
}

/// Error that can occur when validating a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The destination cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The cell index is outside the board.
    #[display("Cell {} is out of bounds", _0)]
    OutOfBounds(usize),

    /// The origin cell does not hold the mover's piece.
    #[display("Cell {} does not hold the current player's piece", _0)]
    NotOwnPiece(usize),

    /// The destination is not adjacent to the origin.
    #[display("Cell {} is not adjacent to cell {}", _1, _0)]
    NotAdjacent(usize, usize),

    /// The move kind does not match the current phase.
    #[display("Move is not valid in the current phase")]
    WrongPhase,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
