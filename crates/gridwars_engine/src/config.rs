//! Game configuration.

use crate::ai::Difficulty;
use crate::board::BoardSize;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How the game is played.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans alternating on the same board.
    Multiplayer,
    /// Human versus the random-biased AI.
    AiEasy,
    /// Human versus the heuristic AI.
    AiMedium,
    /// Human versus the minimax AI.
    AiHard,
}

impl GameMode {
    /// AI difficulty for this mode, `None` for multiplayer.
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::Multiplayer => None,
            GameMode::AiEasy => Some(Difficulty::Easy),
            GameMode::AiMedium => Some(Difficulty::Medium),
            GameMode::AiHard => Some(Difficulty::Hard),
        }
    }

    /// The player the AI controls, `None` for multiplayer.
    ///
    /// The AI always takes White; the human plays Black.
    pub fn ai_player(self) -> Option<Player> {
        match self {
            GameMode::Multiplayer => None,
            _ => Some(Player::White),
        }
    }
}

/// Configuration for one game: board size and play mode.
///
/// Must be supplied before a game starts; changing it triggers a full reset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
)]
pub struct GameConfig {
    /// Board side length.
    board_size: BoardSize,
    /// Play mode.
    mode: GameMode,
}

impl GameConfig {
    /// True when the given player is controlled by the AI under this config.
    pub fn is_ai(&self, player: Player) -> bool {
        self.mode.ai_player() == Some(player)
    }
}

/// Seconds granted per human turn.
pub const TURN_SECONDS: u32 = 30;

/// Cap on the turn budget when the player to move is AI-controlled.
pub const AI_TURN_SECONDS: u32 = 10;

/// Artificial "thinking" delay before an AI move is applied.
pub const AI_THINK_DELAY_MS: u64 = 500;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_parsing() {
        assert_eq!(GameMode::from_str("ai-easy").unwrap(), GameMode::AiEasy);
        assert_eq!(
            GameMode::from_str("multiplayer").unwrap(),
            GameMode::Multiplayer
        );
        assert!(GameMode::from_str("ai-impossible").is_err());
    }

    #[test]
    fn test_ai_player_is_white() {
        assert_eq!(GameMode::AiHard.ai_player(), Some(Player::White));
        assert_eq!(GameMode::Multiplayer.ai_player(), None);
    }
}
