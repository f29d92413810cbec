//! Per-turn countdown clock.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::debug;

/// Signal sent from the clock task back to the engine loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClockSignal {
    /// One second elapsed.
    Tick {
        /// Turn generation the tick belongs to.
        generation: u64,
        /// Seconds left on the turn.
        seconds_remaining: u32,
    },
    /// The countdown reached zero.
    Expired {
        /// Turn generation the expiry belongs to.
        generation: u64,
    },
}

/// A single active countdown, restarted on every turn switch.
///
/// Every signal is stamped with the turn generation it was started for; the
/// engine drops signals from an older generation, so a late tick can never
/// reach a turn it does not belong to even if the abort races the send.
#[derive(Debug)]
pub(crate) struct TurnClock {
    handle: JoinHandle<()>,
}

impl TurnClock {
    /// Spawns a countdown of `seconds` for the given turn generation.
    ///
    /// Emits an immediate tick with the full budget, then one tick per
    /// second, and finally an expiry signal at zero.
    pub(crate) fn start(
        generation: u64,
        seconds: u32,
        tx: mpsc::UnboundedSender<ClockSignal>,
    ) -> Self {
        debug!(generation, seconds, "starting turn clock");
        let handle = tokio::spawn(async move {
            let mut remaining = seconds;
            loop {
                if tx
                    .send(ClockSignal::Tick {
                        generation,
                        seconds_remaining: remaining,
                    })
                    .is_err()
                {
                    return;
                }
                if remaining == 0 {
                    let _ = tx.send(ClockSignal::Expired { generation });
                    return;
                }
                sleep(Duration::from_secs(1)).await;
                remaining -= 1;
            }
        });
        Self { handle }
    }

    /// Stops the countdown.
    pub(crate) fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for TurnClock {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
