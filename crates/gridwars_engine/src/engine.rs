//! Async engine supervisor.
//!
//! One task owns the [`Game`]; every mutation flows through its command
//! loop, so the two deferred triggers (the AI thinking delay and the turn
//! clock) are serialized against the shared state. Both kinds of deferred
//! signal carry the turn generation they were scheduled for and are dropped
//! at receive time when stale.

use crate::ai;
use crate::clock::{ClockSignal, TurnClock};
use crate::config::{AI_THINK_DELAY_MS, AI_TURN_SECONDS, GameConfig, TURN_SECONDS};
use crate::events::GameEvent;
use crate::game::{Game, MoveSource};
use crate::types::GameStatus;
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};

/// Command accepted by the engine loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    /// Configure and start a fresh game (full reset).
    Configure(GameConfig),
    /// A human clicked a cell.
    Intent(usize),
    /// Restart with the current configuration.
    Reset,
    /// Tear the engine down (return to menu).
    Shutdown,
}

/// AI policy result routed back into the engine loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AiChoice {
    generation: u64,
    mv: Option<crate::action::Move>,
}

/// Sends commands to a running engine.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: mpsc::UnboundedSender<EngineCommand>,
}

impl EngineHandle {
    /// Configures and starts a game.
    pub fn configure(&self, config: GameConfig) {
        let _ = self.tx.send(EngineCommand::Configure(config));
    }

    /// Forwards a cell intent.
    pub fn cell_intent(&self, index: usize) {
        let _ = self.tx.send(EngineCommand::Intent(index));
    }

    /// Restarts the current game.
    pub fn reset(&self) {
        let _ = self.tx.send(EngineCommand::Reset);
    }

    /// Shuts the engine down.
    pub fn shutdown(&self) {
        let _ = self.tx.send(EngineCommand::Shutdown);
    }
}

/// The engine supervisor.
///
/// Owns the game, the turn clock, and the AI dispatch; publishes
/// [`GameEvent`]s to subscribers.
#[derive(Debug)]
pub struct GameEngine {
    game: Option<Game>,
    generation: u64,
    clock: Option<TurnClock>,
    clock_tx: mpsc::UnboundedSender<ClockSignal>,
    clock_rx: mpsc::UnboundedReceiver<ClockSignal>,
    ai_tx: mpsc::UnboundedSender<AiChoice>,
    ai_rx: mpsc::UnboundedReceiver<AiChoice>,
    command_rx: mpsc::UnboundedReceiver<EngineCommand>,
    subscribers: Vec<mpsc::UnboundedSender<GameEvent>>,
}

impl GameEngine {
    /// Creates an engine and the handle used to drive it.
    pub fn new() -> (Self, EngineHandle) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (clock_tx, clock_rx) = mpsc::unbounded_channel();
        let (ai_tx, ai_rx) = mpsc::unbounded_channel();
        let engine = Self {
            game: None,
            generation: 0,
            clock: None,
            clock_tx,
            clock_rx,
            ai_tx,
            ai_rx,
            command_rx,
            subscribers: Vec::new(),
        };
        (engine, EngineHandle { tx: command_tx })
    }

    /// Registers an event subscriber.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Runs the engine until shutdown.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        info!("engine loop started");
        loop {
            tokio::select! {
                command = self.command_rx.recv() => {
                    match command {
                        None | Some(EngineCommand::Shutdown) => break,
                        Some(command) => self.handle_command(command),
                    }
                }
                Some(signal) = self.clock_rx.recv() => {
                    self.handle_clock(signal);
                }
                Some(choice) = self.ai_rx.recv() => {
                    self.handle_ai(choice);
                }
            }
        }
        self.stop_clock();
        info!("engine loop stopped");
    }

    fn handle_command(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::Configure(config) => self.start_game(Game::new(config)),
            EngineCommand::Reset => {
                if let Some(game) = &self.game {
                    let config = *game.config();
                    self.start_game(Game::new(config));
                }
            }
            EngineCommand::Intent(index) => self.handle_intent(index),
            EngineCommand::Shutdown => unreachable!("handled in run"),
        }
    }

    /// Full reset: a new game, a fresh generation, cleared clock. Atomic
    /// with respect to the turn sequence, since it runs between commands.
    fn start_game(&mut self, game: Game) {
        self.stop_clock();
        self.generation += 1;
        info!(generation = self.generation, "game (re)started");
        self.publish(GameEvent::TurnChanged(game.current_player()));
        self.game = Some(game);
        self.begin_turn();
    }

    fn handle_intent(&mut self, index: usize) {
        let Some(game) = &mut self.game else {
            debug!(index, "intent before configuration, ignoring");
            return;
        };
        if !game.status().is_in_progress() {
            return;
        }
        // Intents for the AI's turn are ignored; the AI task moves for it.
        if game.current_is_ai() {
            return;
        }

        let events = game.cell_intent(index);
        self.finish_turn(events);
    }

    fn handle_clock(&mut self, signal: ClockSignal) {
        match signal {
            ClockSignal::Tick {
                generation,
                seconds_remaining,
            } => {
                if generation == self.generation && self.game_in_progress() {
                    self.publish(GameEvent::TimerTick { seconds_remaining });
                }
            }
            ClockSignal::Expired { generation } => {
                if generation != self.generation || !self.game_in_progress() {
                    debug!(generation, "stale clock expiry, dropping");
                    return;
                }
                let Some(game) = &mut self.game else { return };
                warn!(player = %game.current_player(), "turn clock expired, forcing a move");
                let events = game.forced_move(&mut rand::rng());
                self.finish_turn(events);
            }
        }
    }

    fn handle_ai(&mut self, choice: AiChoice) {
        let AiChoice { generation, mv } = choice;
        if generation != self.generation || !self.game_in_progress() {
            debug!(generation, "stale AI move, dropping");
            return;
        }
        let Some(game) = &mut self.game else { return };
        match mv {
            Some(mv) => {
                let events = game.apply_move(mv, MoveSource::Ai);
                self.finish_turn(events);
            }
            None => {
                // No legal move at all; a blocked mover has already been
                // declared a draw on turn entry, so nothing to do.
                debug!("AI found no legal move");
            }
        }
    }

    /// Publishes the events of a completed operation and, when the turn
    /// advanced, rotates generation, clock, and AI dispatch.
    fn finish_turn(&mut self, events: Vec<GameEvent>) {
        if events.is_empty() {
            // Selection changes and ignored intents leave the turn (and its
            // clock) untouched.
            return;
        }
        for event in events {
            self.publish(event);
        }
        self.stop_clock();
        self.generation += 1;
        self.begin_turn();
    }

    /// Starts the clock for the current turn and dispatches the AI when it
    /// is the mover.
    fn begin_turn(&mut self) {
        let Some(game) = &self.game else { return };
        if !game.status().is_in_progress() {
            return;
        }

        let is_ai = game.current_is_ai();
        let seconds = if is_ai {
            TURN_SECONDS.min(AI_TURN_SECONDS)
        } else {
            TURN_SECONDS
        };
        self.clock = Some(TurnClock::start(
            self.generation,
            seconds,
            self.clock_tx.clone(),
        ));

        if is_ai && let Some(difficulty) = game.config().mode().difficulty() {
            let snapshot = game.clone();
            let generation = self.generation;
            let tx = self.ai_tx.clone();
            tokio::spawn(async move {
                // Thinking delay; liveness is re-checked by generation when
                // the choice arrives, not by cancelling this task.
                sleep(Duration::from_millis(AI_THINK_DELAY_MS)).await;
                let mv = ai::choose_move(&snapshot, difficulty, &mut rand::rng());
                let _ = tx.send(AiChoice { generation, mv });
            });
        }
    }

    fn stop_clock(&mut self) {
        if let Some(clock) = self.clock.take() {
            clock.cancel();
        }
    }

    fn game_in_progress(&self) -> bool {
        self.game
            .as_ref()
            .is_some_and(|game| game.status() == GameStatus::InProgress)
    }

    fn publish(&mut self, event: GameEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}
