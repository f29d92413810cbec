//! AI policy behavior across the three difficulty tiers.

use gridwars_engine::{
    BoardSize, Difficulty, Game, GameConfig, GameMode, Move, MoveSource, Phase, Player,
    choose_move, legal_moves, legal_moves_filtered,
};

fn game_after(mode: GameMode, first: Player, placements: &[usize]) -> Game {
    let mut game = Game::with_first_player(GameConfig::new(BoardSize::Three, mode), first);
    for &index in placements {
        game.cell_intent(index);
    }
    game
}

#[test]
fn test_hard_ai_completes_own_line() {
    // Black (to move) has two in the top row with the third cell empty.
    let game = game_after(GameMode::AiHard, Player::Black, &[0, 3, 1, 5]);
    assert_eq!(game.current_player(), Player::Black);

    let mv = choose_move(&game, Difficulty::Hard, &mut rand::rng());
    assert_eq!(mv, Some(Move::Place { to: 2 }));
}

#[test]
fn test_hard_ai_blocks_opponent_line() {
    // Black threatens the top row; White to move must take cell 2.
    let game = game_after(GameMode::AiHard, Player::Black, &[0, 8, 1]);
    assert_eq!(game.current_player(), Player::White);

    let mv = choose_move(&game, Difficulty::Hard, &mut rand::rng());
    assert_eq!(mv, Some(Move::Place { to: 2 }));
}

#[test]
fn test_medium_ai_wins_over_blocking() {
    // Both sides threaten a line; completing beats blocking.
    // Black: 0, 1 (threat at 2). White: 6, 7 (threat at 8). Black to move.
    let game = game_after(GameMode::AiMedium, Player::Black, &[0, 6, 1, 7]);
    let mv = choose_move(&game, Difficulty::Medium, &mut rand::rng());
    assert_eq!(mv, Some(Move::Place { to: 2 }));
}

#[test]
fn test_easy_ai_plays_some_legal_move() {
    let game = game_after(GameMode::AiEasy, Player::White, &[4, 0, 8]);
    let legal = legal_moves(&game);

    for _ in 0..8 {
        let mv = choose_move(&game, Difficulty::Easy, &mut rand::rng());
        assert!(mv.is_some_and(|mv| legal.contains(&mv)));
    }
}

#[test]
fn test_easy_ai_biased_toward_strategic_cells() {
    // Empty board: the only strategic destinations are the center and the
    // corners, so the first easy move always lands on one of them.
    let game = game_after(GameMode::AiEasy, Player::White, &[]);
    let strategic = [4, 0, 2, 6, 8];

    for _ in 0..16 {
        let mv = choose_move(&game, Difficulty::Easy, &mut rand::rng()).unwrap();
        assert!(strategic.contains(&mv.to()), "{mv} is not strategic");
    }
}

#[test]
fn test_filtered_moves_exclude_ai_repetition() {
    // Advance to the moving phase, then drive White through an AI-sourced
    // shuttle so its history marks the reverse slide as repetitive.
    let mut game = game_after(GameMode::AiMedium, Player::Black, &[0, 2, 5, 6, 7, 8]);
    assert_eq!(game.phase(), Phase::Moving);

    // Black 0 -> 1.
    game.cell_intent(0);
    game.cell_intent(1);
    // White 2 -> 4 as an AI move.
    game.apply_move(Move::Relocate { from: 2, to: 4 }, MoveSource::Ai);
    // Black 1 -> 0 (warning level 1 for Black, still applied).
    game.cell_intent(1);
    game.cell_intent(0);

    assert_eq!(game.current_player(), Player::White);
    let unfiltered = legal_moves(&game);
    let filtered = legal_moves_filtered(&game);

    assert!(unfiltered.contains(&Move::Relocate { from: 4, to: 2 }));
    assert!(!filtered.contains(&Move::Relocate { from: 4, to: 2 }));
    assert!(filtered.len() < unfiltered.len());

    // The AI never earns stalling warnings for its own filtered moves.
    assert_eq!(game.repetition().warnings(Player::White), 0);

    // And whatever the policy picks is a fresh, non-repetitive move.
    let mv = choose_move(&game, Difficulty::Medium, &mut rand::rng()).unwrap();
    assert!(filtered.contains(&mv));
}

#[test]
fn test_search_budget_is_respected() {
    let game = game_after(GameMode::AiHard, Player::Black, &[]);
    let start = std::time::Instant::now();
    let mv = choose_move(&game, Difficulty::Hard, &mut rand::rng());
    assert!(mv.is_some());
    // Hard tier budget is three seconds; leave generous headroom for slow
    // machines.
    assert!(start.elapsed() < std::time::Duration::from_secs(10));
}
