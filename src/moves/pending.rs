//! Two-phase moves: pick up, then drop.
//!
//! [`GameState::begin_move`](crate::GameState::begin_move) hands out a
//! `PendingMove` recording the source and the card found there. Nothing on
//! the table changes until the move is finalized with a destination. A
//! pending move ends in exactly one of two states:
//!
//! ```text
//! Pending --finalize, accepted--> Finalized
//! Pending --finalize, rejected--> Discarded
//! Pending --abandon / superseded--> Discarded
//! ```

use crate::core::{Card, Location};

/// Lifecycle of a [`PendingMove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    /// Picked up, waiting for a destination.
    Pending,
    /// Executed and recorded in history.
    Finalized,
    /// Rejected or abandoned; the table was never touched.
    Discarded,
}

/// Handle for a move that has a source but no destination yet.
///
/// Deliberately not `Clone`: each pick-up is finalized at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending move does nothing until it is finalized"]
pub struct PendingMove {
    ticket: u64,
    source: Location,
    card: Card,
    status: MoveStatus,
}

impl PendingMove {
    pub(crate) fn new(ticket: u64, source: Location, card: Card) -> Self {
        Self {
            ticket,
            source,
            card,
            status: MoveStatus::Pending,
        }
    }

    /// Where the card was picked up.
    #[must_use]
    pub fn source(&self) -> Location {
        self.source
    }

    /// The card being carried.
    #[must_use]
    pub fn card(&self) -> Card {
        self.card
    }

    #[must_use]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == MoveStatus::Pending
    }

    pub(crate) fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Leave the `Pending` state. Panics if the move already left it.
    pub(crate) fn settle(&mut self, status: MoveStatus) {
        assert!(
            self.is_pending(),
            "move from {} was already {:?}",
            self.source,
            self.status
        );
        debug_assert_ne!(status, MoveStatus::Pending);
        self.status = status;
    }
}
