//! Heuristic policy: ordered win/block/fork checks.

use super::random;
use crate::action::Move;
use crate::board::Board;
use crate::game::Game;
use crate::rules;
use crate::types::{Cell, Phase, Player};

/// Picks a move by ordered checks, first match wins:
///
/// 1. a move that completes a line for the AI;
/// 2. a move that completes a line for the opponent (block);
/// 3. a move creating a fork for the AI;
/// 4. a fork-creating move for the opponent (block);
/// 5. during placing, the first unoccupied strategic position;
/// 6. fallback to the random policy.
pub fn choose<R: rand::Rng>(game: &Game, pool: &[Move], rng: &mut R) -> Option<Move> {
    let board = game.board();
    let ai = game.current_player();
    let opponent = ai.opponent();

    if let Some(mv) = completing_move(board, pool, ai) {
        return Some(mv);
    }
    if let Some(mv) = completing_move(board, pool, opponent) {
        return Some(mv);
    }
    if let Some(mv) = fork_move(board, pool, ai) {
        return Some(mv);
    }
    if let Some(mv) = fork_move(board, pool, opponent) {
        return Some(mv);
    }

    if game.phase() == Phase::Placing {
        for index in board.strategic_positions() {
            if board.is_empty(index) {
                return Some(Move::Place { to: index });
            }
        }
    }

    random::choose(game, pool, rng)
}

/// First candidate whose destination completes a line when colored for
/// `as_player`.
///
/// Speculating with the opponent's color finds the cells the opponent would
/// win on, which are exactly the cells worth occupying to block.
fn completing_move(board: &Board, pool: &[Move], as_player: Player) -> Option<Move> {
    pool.iter()
        .copied()
        .find(|&mv| rules::has_win(&board.applying(mv, as_player)))
}

/// First candidate that leaves `as_player` with two or more open threats.
fn fork_move(board: &Board, pool: &[Move], as_player: Player) -> Option<Move> {
    pool.iter()
        .copied()
        .find(|&mv| open_threats(&board.applying(mv, as_player), as_player) >= 2)
}

/// Number of lines one move away from completion for the player: exactly
/// `side - 1` owned cells and exactly one empty cell.
fn open_threats(board: &Board, player: Player) -> usize {
    let need = board.side() - 1;
    board
        .lines()
        .iter()
        .filter(|line| {
            let mut own = 0;
            let mut empty = 0;
            for &index in line.iter() {
                match board.get(index) {
                    Some(Cell::Empty) => empty += 1,
                    Some(Cell::Occupied(p)) if p == player => own += 1,
                    _ => return false,
                }
            }
            own == need && empty == 1
        })
        .count()
}
