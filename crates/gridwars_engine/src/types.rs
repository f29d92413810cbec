//! Core domain types for the grid game.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Black pieces (the human side in AI modes).
    Black,
    /// White pieces (the AI side in AI modes).
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's piece.
    Occupied(Player),
}

impl Cell {
    /// Returns the owner of the piece on this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks whether the cell holds no piece.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Phase of the game.
///
/// Transitions `Placing` to `Moving` exactly once, when both players have
/// placed their full complement of pieces. Never transitions back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Opening phase: players add pieces up to the per-size cap.
    Placing,
    /// Players relocate existing pieces to adjacent empty cells.
    Moving,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw (mover has no legal relocation).
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true while the game can still accept moves.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::Occupied(Player::Black).owner(), Some(Player::Black));
    }
}
