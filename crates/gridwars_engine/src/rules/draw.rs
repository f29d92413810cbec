//! Draw detection for blocked positions.
//!
//! The observed game had no explicit draw path: a mover with no legal
//! relocation simply stalled forever. Here a fully blocked, non-winning
//! position in the moving phase ends the game in a draw.

use super::moves::moves_for;
use crate::board::Board;
use crate::types::{Phase, Player};

/// True iff the mover has no legal relocation in the moving phase.
///
/// Placements cannot block: the per-size piece caps leave at least one empty
/// cell on every supported board, so the placing phase always has a move.
pub fn is_blocked(board: &Board, phase: Phase, player: Player) -> bool {
    phase == Phase::Moving && moves_for(board, phase, player).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;
    use crate::types::Cell;

    #[test]
    fn test_placing_never_blocked() {
        let board = Board::new(BoardSize::Three);
        assert!(!is_blocked(&board, Phase::Placing, Player::Black));
    }

    #[test]
    fn test_cornered_piece_is_blocked() {
        let mut board = Board::new(BoardSize::Three);
        board.set(0, Cell::Occupied(Player::Black));
        board.set(1, Cell::Occupied(Player::White));
        board.set(3, Cell::Occupied(Player::White));
        board.set(4, Cell::Occupied(Player::White));

        assert!(is_blocked(&board, Phase::Moving, Player::Black));
        assert!(!is_blocked(&board, Phase::Moving, Player::White));
    }
}
