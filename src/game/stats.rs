//! Win statistics handed to a persistence collaborator.
//!
//! The engine only measures; storage format and location belong to
//! whoever implements [`StatsSink`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Statistics for a won game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Time from the end of the deal to the winning move.
    pub elapsed: Duration,
    /// Moves in history when the game was won.
    pub move_count: usize,
}

impl GameStats {
    /// Elapsed time in whole milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Receives statistics once per won game.
pub trait StatsSink: Send {
    fn record_win(&mut self, stats: GameStats);
}

impl<F> StatsSink for F
where
    F: FnMut(GameStats) + Send,
{
    fn record_win(&mut self, stats: GameStats) {
        self(stats);
    }
}
