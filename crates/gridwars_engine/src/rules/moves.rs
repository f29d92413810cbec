//! Legal-move enumeration and single-move validation.

use crate::action::{Move, MoveError};
use crate::board::Board;
use crate::game::Game;
use crate::types::{Cell, Phase, Player};

/// Enumerates the legal moves on a board snapshot for the given phase and
/// mover.
///
/// Placing phase: every empty cell is a placement target. Moving phase:
/// every (owned cell, empty king-move neighbor) pair is a relocation.
pub fn moves_for(board: &Board, phase: Phase, player: Player) -> Vec<Move> {
    match phase {
        Phase::Placing => (0..board.cells().len())
            .filter(|&to| board.is_empty(to))
            .map(|to| Move::Place { to })
            .collect(),
        Phase::Moving => {
            let mut moves = Vec::new();
            for from in 0..board.cells().len() {
                if board.get(from) != Some(Cell::Occupied(player)) {
                    continue;
                }
                for to in board.empty_neighbors(from) {
                    moves.push(Move::Relocate { from, to });
                }
            }
            moves
        }
    }
}

/// Legal moves for the current player of a live game.
pub fn legal_moves(game: &Game) -> Vec<Move> {
    moves_for(game.board(), game.phase(), game.current_player())
}

/// Legal moves for the current player, excluding relocations classified as
/// repetitive for the mover.
///
/// This filtering is applied only when selecting AI candidates; human intents
/// are validated unfiltered and intercepted post-hoc with stalling warnings.
/// When the filter empties the pool while unfiltered moves exist, callers
/// fall back to [`legal_moves`], so the AI may repeat a move a human would be
/// penalized for.
pub fn legal_moves_filtered(game: &Game) -> Vec<Move> {
    let player = game.current_player();
    legal_moves(game)
        .into_iter()
        .filter(|mv| match mv {
            Move::Place { .. } => true,
            Move::Relocate { from, to } => !game.repetition().is_repetitive(player, *from, *to),
        })
        .collect()
}

/// Validates a single proposed move against the live game.
///
/// Re-derives the same predicate as [`legal_moves`] for one move, used to
/// check an incoming intent before any mutation.
pub fn is_legal(game: &Game, mv: Move) -> Result<(), MoveError> {
    if !game.status().is_in_progress() {
        return Err(MoveError::GameOver);
    }

    let board = game.board();
    match mv {
        Move::Place { to } => {
            if game.phase() != Phase::Placing {
                return Err(MoveError::WrongPhase);
            }
            match board.get(to) {
                None => Err(MoveError::OutOfBounds(to)),
                Some(Cell::Empty) => Ok(()),
                Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied(to)),
            }
        }
        Move::Relocate { from, to } => {
            if game.phase() != Phase::Moving {
                return Err(MoveError::WrongPhase);
            }
            if board.get(from).is_none() {
                return Err(MoveError::OutOfBounds(from));
            }
            if board.get(to).is_none() {
                return Err(MoveError::OutOfBounds(to));
            }
            if board.owner(from) != Some(game.current_player()) {
                return Err(MoveError::NotOwnPiece(from));
            }
            if !board.is_empty(to) {
                return Err(MoveError::CellOccupied(to));
            }
            if !board.is_adjacent(from, to) {
                return Err(MoveError::NotAdjacent(from, to));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    #[test]
    fn test_placing_moves_are_empty_cells() {
        let mut board = Board::new(BoardSize::Three);
        board.set(4, Cell::Occupied(Player::Black));

        let moves = moves_for(&board, Phase::Placing, Player::White);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Move::Place { to: 4 }));
    }

    #[test]
    fn test_moving_moves_are_adjacent_and_empty() {
        let mut board = Board::new(BoardSize::Three);
        board.set(0, Cell::Occupied(Player::Black));
        board.set(1, Cell::Occupied(Player::White));

        let moves = moves_for(&board, Phase::Moving, Player::Black);
        // From corner 0: neighbors 1, 3, 4; cell 1 is occupied.
        assert_eq!(
            moves,
            vec![
                Move::Relocate { from: 0, to: 3 },
                Move::Relocate { from: 0, to: 4 },
            ]
        );
    }

    #[test]
    fn test_blocked_piece_has_no_moves() {
        let mut board = Board::new(BoardSize::Three);
        board.set(0, Cell::Occupied(Player::Black));
        board.set(1, Cell::Occupied(Player::White));
        board.set(3, Cell::Occupied(Player::White));
        board.set(4, Cell::Occupied(Player::White));

        let moves = moves_for(&board, Phase::Moving, Player::Black);
        assert!(moves.is_empty());
    }
}
