//! Random policy with a strategic bias.

use crate::action::Move;
use crate::game::Game;
use rand::seq::IndexedRandom;

/// Draws uniformly from the candidate moves.
///
/// When any candidate's destination lies in the strategic prefix (center,
/// then corners), the draw pool is restricted to those first.
pub fn choose<R: rand::Rng>(game: &Game, pool: &[Move], rng: &mut R) -> Option<Move> {
    let prefix = game.board().strategic_prefix();
    let biased: Vec<Move> = pool
        .iter()
        .copied()
        .filter(|mv| prefix.contains(&mv.to()))
        .collect();

    if biased.is_empty() {
        pool.choose(rng).copied()
    } else {
        biased.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;
    use crate::config::{GameConfig, GameMode};
    use crate::types::Player;

    #[test]
    fn test_bias_toward_center_and_corners() {
        let game = Game::with_first_player(
            GameConfig::new(BoardSize::Three, GameMode::AiEasy),
            Player::White,
        );
        let pool = vec![Move::Place { to: 1 }, Move::Place { to: 4 }];
        let mut rng = rand::rng();

        for _ in 0..16 {
            // Cell 4 is the center; cell 1 is an edge and never preferred.
            assert_eq!(choose(&game, &pool, &mut rng), Some(Move::Place { to: 4 }));
        }
    }

    #[test]
    fn test_uniform_when_no_strategic_destination() {
        let game = Game::with_first_player(
            GameConfig::new(BoardSize::Three, GameMode::AiEasy),
            Player::White,
        );
        let pool = vec![Move::Place { to: 1 }, Move::Place { to: 3 }];
        let mut rng = rand::rng();

        let choice = choose(&game, &pool, &mut rng).unwrap();
        assert!(pool.contains(&choice));
    }

    #[test]
    fn test_empty_pool_yields_none() {
        let game = Game::with_first_player(
            GameConfig::new(BoardSize::Three, GameMode::AiEasy),
            Player::White,
        );
        let mut rng = rand::rng();
        assert_eq!(choose(&game, &[], &mut rng), None);
    }
}
