//! Synchronous game state machine.
//!
//! All mutation flows through the operations here; the async supervisor in
//! [`crate::engine`] owns one `Game` and forwards the events each operation
//! returns to its subscribers.

use crate::action::Move;
use crate::board::Board;
use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::repetition::{RepetitionGuard, StallingLevel};
use crate::rules;
use crate::types::{Cell, GameStatus, Phase, Player};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where a move request originated.
///
/// Human relocations are screened post-hoc by the repetition guard; AI
/// candidates are filtered up front and timeout moves bypass the filter, so
/// neither escalates stalling warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// A cell intent from a human player.
    Human,
    /// A move chosen by an AI policy.
    Ai,
    /// A move forced by turn-clock expiry.
    Timeout,
}

/// Pieces placed so far, per player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceCounts {
    black: usize,
    white: usize,
}

impl PieceCounts {
    /// Count for one player.
    pub fn get(&self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    fn bump(&mut self, player: Player) {
        match player {
            Player::Black => self.black += 1,
            Player::White => self.white += 1,
        }
    }

    /// Total pieces on the board.
    pub fn total(&self) -> usize {
        self.black + self.white
    }
}

/// One game: board contents, phase, counts, turn, selection, status.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    phase: Phase,
    piece_counts: PieceCounts,
    current_player: Player,
    selected: Option<usize>,
    status: GameStatus,
    repetition: RepetitionGuard,
}

impl Game {
    /// Creates a game with a uniformly random starting player.
    pub fn new(config: GameConfig) -> Self {
        let starting = if rand::rng().random_bool(0.5) {
            Player::Black
        } else {
            Player::White
        };
        Self::with_first_player(config, starting)
    }

    /// Creates a game with an explicit starting player.
    #[instrument]
    pub fn with_first_player(config: GameConfig, starting: Player) -> Self {
        info!(?config, %starting, "starting game");
        Self {
            config,
            board: Board::new(*config.board_size()),
            phase: Phase::Placing,
            piece_counts: PieceCounts::default(),
            current_player: starting,
            selected: None,
            status: GameStatus::InProgress,
            repetition: RepetitionGuard::new(),
        }
    }

    /// Returns the game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the pending slide origin, if one is selected.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the piece counts.
    pub fn piece_counts(&self) -> PieceCounts {
        self.piece_counts
    }

    /// Returns the repetition guard.
    pub fn repetition(&self) -> &RepetitionGuard {
        &self.repetition
    }

    /// True when the current player is AI-controlled.
    pub fn current_is_ai(&self) -> bool {
        self.config.is_ai(self.current_player)
    }

    /// Single entry point for human interaction.
    ///
    /// Interprets the index as place, select, deselect, or slide destination
    /// based on the current phase and selection state. Illegal intents are
    /// silently ignored: no state change, no error surfaced.
    #[instrument(skip(self), fields(phase = ?self.phase, player = %self.current_player))]
    pub fn cell_intent(&mut self, index: usize) -> Vec<GameEvent> {
        if !self.status.is_in_progress() || index >= self.board.cells().len() {
            return Vec::new();
        }

        match self.phase {
            Phase::Placing => self.apply_move(Move::Place { to: index }, MoveSource::Human),
            Phase::Moving => match self.selected {
                None => {
                    self.select_origin(index);
                    Vec::new()
                }
                Some(selected) if selected == index => {
                    self.deselect();
                    Vec::new()
                }
                Some(selected) => {
                    if self.board.owner(index) == Some(self.current_player) {
                        // Replaces the prior selection.
                        self.select_origin(index);
                        return Vec::new();
                    }
                    self.apply_move(
                        Move::Relocate {
                            from: selected,
                            to: index,
                        },
                        MoveSource::Human,
                    )
                }
            },
        }
    }

    /// Marks a cell as the pending slide origin.
    ///
    /// Valid only in the moving phase when the cell holds the current
    /// player's piece; otherwise a no-op.
    pub fn select_origin(&mut self, index: usize) {
        if self.phase == Phase::Moving && self.board.owner(index) == Some(self.current_player) {
            debug!(index, "piece selected");
            self.selected = Some(index);
        }
    }

    /// Clears the pending slide origin.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Validates and applies a move, returning the produced events.
    ///
    /// Illegal moves are absorbed as no-ops. Human relocations classified as
    /// repetitive escalate through the stalling counter: two warnings pass
    /// the move through, the third violation rejects it and forfeits the
    /// turn.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, mv: Move, source: MoveSource) -> Vec<GameEvent> {
        if let Err(error) = rules::is_legal(self, mv) {
            debug!(%mv, %error, "ignoring illegal move");
            return Vec::new();
        }

        match mv {
            Move::Place { to } => self.place_piece(to),
            Move::Relocate { from, to } => self.relocate_piece(from, to, source),
        }
    }

    /// Picks a uniformly random legal move for the current player and applies
    /// it, ignoring repetition filtering. Used when the turn clock expires.
    pub fn forced_move<R: rand::Rng>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        let moves = rules::legal_moves(self);
        match moves.choose(rng) {
            Some(&mv) => {
                info!(%mv, player = %self.current_player, "turn expired, forcing move");
                self.deselect();
                self.apply_move(mv, MoveSource::Timeout)
            }
            None => Vec::new(),
        }
    }

    fn place_piece(&mut self, to: usize) -> Vec<GameEvent> {
        let player = self.current_player;
        self.board.set(to, Cell::Occupied(player));
        self.piece_counts.bump(player);

        let mut events = vec![GameEvent::MoveApplied {
            player,
            mv: Move::Place { to },
            board: self.board.clone(),
        }];

        // Win check precedes the phase transition: the final placement can
        // complete a line.
        if let Some(winner) = rules::winner(&self.board) {
            events.push(self.end_with_winner(winner));
            return events;
        }

        let cap = self.config.board_size().piece_cap();
        if self.piece_counts.get(Player::Black) == cap && self.piece_counts.get(Player::White) == cap
        {
            info!("both players placed, entering moving phase");
            self.phase = Phase::Moving;
        }

        events.extend(self.switch_player());
        events
    }

    fn relocate_piece(&mut self, from: usize, to: usize, source: MoveSource) -> Vec<GameEvent> {
        let player = self.current_player;
        let mut events = Vec::new();

        if source == MoveSource::Human && self.repetition.is_repetitive(player, from, to) {
            match self.repetition.escalate(player) {
                StallingLevel::Forfeit => {
                    warn!(%player, from, to, "stalling limit reached, forfeiting turn");
                    self.deselect();
                    events.extend(self.switch_player());
                    return events;
                }
                level => {
                    let level = level.warning_level().unwrap_or(1);
                    warn!(%player, from, to, level, "stalling warning");
                    events.push(GameEvent::StallingWarning { player, level });
                }
            }
        }

        self.deselect();
        self.board.set(from, Cell::Empty);
        self.board.set(to, Cell::Occupied(player));
        self.repetition.record_move(player, from, to);

        events.push(GameEvent::MoveApplied {
            player,
            mv: Move::Relocate { from, to },
            board: self.board.clone(),
        });

        if let Some(winner) = rules::winner(&self.board) {
            events.push(self.end_with_winner(winner));
            return events;
        }

        events.extend(self.switch_player());
        events
    }

    fn end_with_winner(&mut self, winner: Player) -> GameEvent {
        info!(%winner, "game over");
        self.status = GameStatus::Won(winner);
        self.selected = None;
        GameEvent::GameEnded {
            winner: Some(winner),
        }
    }

    fn switch_player(&mut self) -> Vec<GameEvent> {
        self.current_player = self.current_player.opponent();

        // A mover with no legal relocation ends the game in a draw rather
        // than stalling forever.
        if rules::is_blocked(&self.board, self.phase, self.current_player) {
            info!(player = %self.current_player, "mover is blocked, declaring draw");
            self.status = GameStatus::Draw;
            self.selected = None;
            return vec![GameEvent::GameEnded { winner: None }];
        }

        vec![GameEvent::TurnChanged(self.current_player)]
    }
}
