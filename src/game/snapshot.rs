//! Read-only views of the table.
//!
//! A `GameSnapshot` is taken in one step from a `&GameState`, so it can
//! never show a move half-applied. Piles are `im::Vector`s that share
//! structure with the live table, making a snapshot cheap to take and
//! to keep around.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::layout::Layout;
use super::state::Phase;
use crate::core::Card;

/// The hand as seen by a reader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    /// Board slot the hand was lifted from; `None` when unbound.
    pub origin: Option<usize>,
    pub cards: Vector<Card>,
}

/// Immutable copy of every pile, stamped with the state version it was
/// taken at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Increases with every mutation of the source state.
    pub version: u64,
    pub phase: Phase,
    pub board: Vec<Vector<Card>>,
    pub king_piles: Vec<Vector<Card>>,
    pub ace_piles: Vec<Vector<Card>>,
    pub deck: Vector<Card>,
    pub hand: HandView,
    /// Cards still waiting to be dealt.
    pub undealt: usize,
    pub move_count: usize,
}

impl GameSnapshot {
    /// Cards on the table, including undealt ones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let piles = self.board.iter().chain(&self.king_piles).chain(&self.ace_piles);
        let piled: usize = piles.map(Vector::len).sum();
        piled + self.deck.len() + self.hand.cards.len() + self.undealt
    }

    /// Pile contents only, dropping version and bookkeeping.
    #[must_use]
    pub fn layout(&self) -> Layout {
        fn to_vec(cards: &Vector<Card>) -> Vec<Card> {
            cards.iter().copied().collect()
        }

        Layout {
            board: self.board.iter().map(to_vec).collect(),
            king_piles: self.king_piles.iter().map(to_vec).collect(),
            ace_piles: self.ace_piles.iter().map(to_vec).collect(),
            deck: to_vec(&self.deck),
            hand: to_vec(&self.hand.cards),
            hand_origin: self.hand.origin,
        }
    }
}
