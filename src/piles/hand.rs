//! The hand: a board pile lifted out of its slot.
//!
//! Drawing from the deck binds the hand to the board slot matching the
//! drawn card's rank. While bound, that slot is hollow and its cards live
//! here, where any of them (not just the top) may be picked up or
//! reordered. Rebinding first puts the previous cards back in their slot.

use serde::{Deserialize, Serialize};

use super::pile::Pile;

/// Transient pile bound to an originating board slot, or unbound.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Pile,
    origin: Option<usize>,
}

impl Hand {
    /// Unbound, empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand holding `cards`, lifted from board slot `origin`.
    #[must_use]
    pub fn bound(origin: usize, cards: Pile) -> Self {
        Self {
            cards,
            origin: Some(origin),
        }
    }

    /// Board slot this hand was lifted from.
    #[must_use]
    pub fn origin(&self) -> Option<usize> {
        self.origin
    }

    #[must_use]
    pub fn cards(&self) -> &Pile {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut Pile {
        &mut self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Unbind, returning the origin slot and the cards to put back there.
    pub fn release(&mut self) -> Option<(usize, Pile)> {
        let origin = self.origin.take()?;
        Some((origin, self.cards.take_all()))
    }
}
