//! Move-repetition ("stalling") detection with escalating penalties.
//!
//! Applies only to relocations in the moving phase. Each player carries a
//! bounded history of recent slides; cycling a piece back and forth earns two
//! warnings, then forfeits the offending move.

use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Recorded slides kept per player, oldest evicted first.
const HISTORY_LIMIT: usize = 6;

/// How far back the duplicate-slide check looks.
const RECENT_WINDOW: usize = 4;

/// Penalty tier reached after a repetitive slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StallingLevel {
    /// First violation: surfaced as a soft warning, move proceeds.
    SoftWarning,
    /// Second violation: final warning, move still proceeds.
    FinalWarning,
    /// Third and later violations: the move is rejected and the turn is
    /// forfeited to the opponent.
    Forfeit,
}

impl StallingLevel {
    /// Warning level surfaced to observers (1 or 2); forfeits have no level.
    pub fn warning_level(self) -> Option<u8> {
        match self {
            StallingLevel::SoftWarning => Some(1),
            StallingLevel::FinalWarning => Some(2),
            StallingLevel::Forfeit => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PlayerRecord {
    history: VecDeque<(usize, usize)>,
    warnings: u32,
}

/// Per-player bounded move history and stalling counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepetitionGuard {
    black: PlayerRecord,
    white: PlayerRecord,
}

impl RepetitionGuard {
    /// Creates a guard with empty histories and zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, player: Player) -> &PlayerRecord {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    fn record_mut(&mut self, player: Player) -> &mut PlayerRecord {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }

    /// Classifies a proposed slide as repetitive for the given player.
    ///
    /// True when any of:
    /// - the player's immediately preceding slide is the exact reverse;
    /// - the last two slides are `[x, reverse(x)]` and the proposal equals
    ///   `x` (a three-move back-and-forth cycle);
    /// - the exact `from-to` slide occurs at least twice among the player's
    ///   last four recorded slides.
    pub fn is_repetitive(&self, player: Player, from: usize, to: usize) -> bool {
        let history = &self.record(player).history;

        if let Some(&last) = history.back()
            && last == (to, from)
        {
            return true;
        }

        if history.len() >= 2 {
            let prev = history[history.len() - 2];
            let last = history[history.len() - 1];
            if last == (prev.1, prev.0) && (from, to) == prev {
                return true;
            }
        }

        let duplicates = history
            .iter()
            .rev()
            .take(RECENT_WINDOW)
            .filter(|&&slide| slide == (from, to))
            .count();

        duplicates >= 2
    }

    /// Appends a slide to the player's history, truncated to the last
    /// [`HISTORY_LIMIT`] entries.
    pub fn record_move(&mut self, player: Player, from: usize, to: usize) {
        let history = &mut self.record_mut(player).history;
        history.push_back((from, to));
        while history.len() > HISTORY_LIMIT {
            history.pop_front();
        }
    }

    /// Bumps the player's stalling counter and reports the penalty tier.
    pub fn escalate(&mut self, player: Player) -> StallingLevel {
        let record = self.record_mut(player);
        record.warnings += 1;
        let level = match record.warnings {
            1 => StallingLevel::SoftWarning,
            2 => StallingLevel::FinalWarning,
            _ => StallingLevel::Forfeit,
        };
        debug!(%player, warnings = record.warnings, ?level, "stalling escalation");
        level
    }

    /// Current warning count for a player.
    pub fn warnings(&self, player: Player) -> u32 {
        self.record(player).warnings
    }

    /// Clears histories and counters (board reset).
    pub fn reset(&mut self) {
        self.black = PlayerRecord::default();
        self.white = PlayerRecord::default();
    }
}
