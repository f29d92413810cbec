//! AI move selection.
//!
//! Three interchangeable policies, selected by difficulty at game start. All
//! of them read a frozen game snapshot plus move-generator output and build
//! speculative positions as pure board copies; none mutates shared state.

mod heuristic;
mod minimax;
mod random;

pub use minimax::{SearchOutcome, search};

use crate::action::Move;
use crate::game::Game;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum::{Display, EnumString};
use tracing::{debug, instrument};

/// AI difficulty tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Random choice, biased toward strategic cells.
    Easy,
    /// Ordered win/block/fork checks, falling back to random.
    Medium,
    /// Alpha-beta minimax with a static evaluator.
    Hard,
}

impl Difficulty {
    /// Soft wall-clock budget for move selection.
    ///
    /// Search returns the best move found so far once the budget is spent,
    /// never blocking the turn indefinitely.
    pub fn search_budget(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_secs(1),
            Difficulty::Medium => Duration::from_secs(2),
            Difficulty::Hard => Duration::from_secs(3),
        }
    }
}

/// Selects a move for the current (AI-controlled) player.
///
/// Candidates are the repetition-filtered legal moves; when filtering empties
/// the pool while unfiltered moves exist, the unfiltered set is used instead.
/// Returns `None` only when the mover has no legal move at all (the caller
/// treats this as a no-op).
#[instrument(skip(game, rng), fields(player = %game.current_player()))]
pub fn choose_move<R: rand::Rng>(
    game: &Game,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let mut pool = rules::legal_moves_filtered(game);
    if pool.is_empty() {
        debug!("repetition filter emptied the pool, falling back to unfiltered moves");
        pool = rules::legal_moves(game);
    }
    if pool.is_empty() {
        return None;
    }

    let choice = match difficulty {
        Difficulty::Easy => random::choose(game, &pool, rng),
        Difficulty::Medium => heuristic::choose(game, &pool, rng),
        Difficulty::Hard => minimax::choose(game, &pool, difficulty.search_budget())
            .or_else(|| random::choose(game, &pool, rng)),
    };
    debug!(?choice, %difficulty, "AI selected move");
    choice
}
