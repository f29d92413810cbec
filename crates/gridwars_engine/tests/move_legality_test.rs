//! Relocation legality: adjacency, occupancy, phase.

use gridwars_engine::{
    BoardSize, Game, GameConfig, GameMode, Move, MoveError, Phase, Player, is_legal, legal_moves,
};

/// Multiplayer 3x3 game advanced to the moving phase.
///
/// Black holds 0, 1, 5; White holds 3, 7, 8; Black to move.
fn moving_game() -> Game {
    let mut game = Game::with_first_player(
        GameConfig::new(BoardSize::Three, GameMode::Multiplayer),
        Player::Black,
    );
    for index in [0, 3, 1, 7, 5, 8] {
        game.cell_intent(index);
    }
    assert_eq!(game.phase(), Phase::Moving);
    game
}

#[test]
fn test_adjacent_empty_destination_accepted() {
    let game = moving_game();
    assert!(is_legal(&game, Move::Relocate { from: 1, to: 2 }).is_ok());
    assert!(is_legal(&game, Move::Relocate { from: 1, to: 4 }).is_ok());
    assert!(is_legal(&game, Move::Relocate { from: 5, to: 2 }).is_ok());
}

#[test]
fn test_distance_two_rejected() {
    let game = moving_game();
    assert_eq!(
        is_legal(&game, Move::Relocate { from: 0, to: 2 }),
        Err(MoveError::NotAdjacent(0, 2))
    );
    // Diagonal of distance two.
    assert_eq!(
        is_legal(&game, Move::Relocate { from: 1, to: 6 }),
        Err(MoveError::NotAdjacent(1, 6))
    );
}

#[test]
fn test_same_cell_rejected() {
    let game = moving_game();
    assert!(is_legal(&game, Move::Relocate { from: 0, to: 0 }).is_err());
}

#[test]
fn test_occupied_destination_rejected() {
    let game = moving_game();
    assert_eq!(
        is_legal(&game, Move::Relocate { from: 0, to: 3 }),
        Err(MoveError::CellOccupied(3))
    );
}

#[test]
fn test_opponent_piece_rejected_as_origin() {
    let game = moving_game();
    assert_eq!(
        is_legal(&game, Move::Relocate { from: 3, to: 6 }),
        Err(MoveError::NotOwnPiece(3))
    );
}

#[test]
fn test_place_rejected_in_moving_phase() {
    let game = moving_game();
    assert_eq!(
        is_legal(&game, Move::Place { to: 2 }),
        Err(MoveError::WrongPhase)
    );
}

#[test]
fn test_relocate_rejected_in_placing_phase() {
    let game = Game::with_first_player(
        GameConfig::new(BoardSize::Three, GameMode::Multiplayer),
        Player::Black,
    );
    assert_eq!(
        is_legal(&game, Move::Relocate { from: 0, to: 1 }),
        Err(MoveError::WrongPhase)
    );
}

#[test]
fn test_out_of_bounds_rejected() {
    let game = moving_game();
    assert_eq!(
        is_legal(&game, Move::Relocate { from: 0, to: 9 }),
        Err(MoveError::OutOfBounds(9))
    );
}

#[test]
fn test_legal_moves_matches_is_legal() {
    let game = moving_game();
    let moves = legal_moves(&game);
    assert!(!moves.is_empty());
    for mv in &moves {
        assert!(is_legal(&game, *mv).is_ok(), "{mv} should be legal");
    }
    // Every enumerated move originates from a Black piece.
    for mv in moves {
        let from = mv.from().expect("moving phase yields relocations");
        assert_eq!(game.board().owner(from), Some(Player::Black));
    }
}

#[test]
fn test_illegal_intent_is_silent_noop() {
    let mut game = moving_game();
    game.cell_intent(0);
    assert_eq!(game.selected(), Some(0));

    // Distance-two destination: ignored, selection kept, board unchanged.
    let before = game.board().clone();
    let events = game.cell_intent(2);
    assert!(events.is_empty());
    assert_eq!(game.board(), &before);
    assert_eq!(game.selected(), Some(0));
}
