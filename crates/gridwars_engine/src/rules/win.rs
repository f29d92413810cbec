//! Win detection over board snapshots.

use crate::board::Board;
use crate::types::{Cell, Player};
use tracing::instrument;

/// Checks a board snapshot for a completed line.
///
/// Returns the owner of the first fully-owned row, column, or diagonal in
/// enumeration order (rows, then columns, then the two diagonals), or `None`.
/// Pure function: used both on the live board and on speculative copies built
/// by the AI.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    let cells = board.cells();

    for line in board.lines() {
        let first = cells[line[0]];
        if let Cell::Occupied(player) = first
            && line.iter().all(|&index| cells[index] == first)
        {
            return Some(player);
        }
    }

    None
}

/// True iff some line is fully owned by one player.
pub fn has_win(board: &Board) -> bool {
    winner(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    fn board_with(size: BoardSize, pieces: &[(usize, Player)]) -> Board {
        let mut board = Board::new(size);
        for &(index, player) in pieces {
            board.set(index, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        for size in [BoardSize::Three, BoardSize::Four, BoardSize::Five] {
            assert_eq!(winner(&Board::new(size)), None);
        }
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            BoardSize::Three,
            &[
                (0, Player::Black),
                (1, Player::Black),
                (2, Player::Black),
            ],
        );
        assert_eq!(winner(&board), Some(Player::Black));
    }

    #[test]
    fn test_winner_column_4x4() {
        let board = board_with(
            BoardSize::Four,
            &[
                (1, Player::White),
                (5, Player::White),
                (9, Player::White),
                (13, Player::White),
            ],
        );
        assert_eq!(winner(&board), Some(Player::White));
    }

    #[test]
    fn test_winner_anti_diagonal_5x5() {
        let board = board_with(
            BoardSize::Five,
            &[
                (4, Player::Black),
                (8, Player::Black),
                (12, Player::Black),
                (16, Player::Black),
                (20, Player::Black),
            ],
        );
        assert_eq!(winner(&board), Some(Player::Black));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(
            BoardSize::Three,
            &[
                (0, Player::Black),
                (1, Player::White),
                (2, Player::Black),
            ],
        );
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(BoardSize::Three, &[(0, Player::Black), (1, Player::Black)]);
        assert!(!has_win(&board));
    }

    #[test]
    fn test_partial_line_on_larger_board_does_not_win() {
        // Three in a row is not a win on a 4x4 board; the full line of four
        // is required.
        let board = board_with(
            BoardSize::Four,
            &[
                (0, Player::Black),
                (1, Player::Black),
                (2, Player::Black),
            ],
        );
        assert_eq!(winner(&board), None);
    }
}
