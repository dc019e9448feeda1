//! Executed moves, as recorded in history.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Location};

/// A completed, reversible change to the table.
///
/// Records hold what actually happened (the exact card and the position
/// it landed at) so undo never has to infer anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRecord {
    /// One card moved from `source` to `dest`.
    ///
    /// For a hand destination, `dest` holds the slot the card was
    /// actually inserted at.
    Transfer {
        source: Location,
        dest: Location,
        card: Card,
    },

    /// The deck's top card was drawn onto board slot `slot`, which became
    /// the hand. `previous` is the slot the hand was bound to before.
    Draw {
        card: Card,
        slot: usize,
        previous: Option<usize>,
    },
}

impl MoveRecord {
    /// The card this move relocated.
    #[must_use]
    pub fn card(&self) -> Card {
        match *self {
            MoveRecord::Transfer { card, .. } | MoveRecord::Draw { card, .. } => card,
        }
    }

    /// Where the card came from.
    #[must_use]
    pub fn source(&self) -> Location {
        match *self {
            MoveRecord::Transfer { source, .. } => source,
            MoveRecord::Draw { .. } => Location::Deck,
        }
    }

    /// Where the card was put down. For a draw this is the board slot that
    /// was then lifted into the hand.
    #[must_use]
    pub fn dest(&self) -> Location {
        match *self {
            MoveRecord::Transfer { dest, .. } => dest,
            MoveRecord::Draw { slot, .. } => Location::Board(slot),
        }
    }
}
