//! Plain-data table layouts.
//!
//! A `Layout` lists every pile's cards bottom-first. It is what snapshots
//! reduce to for comparison, and what [`GameState::from_layout`] accepts to
//! start from a constructed position (tests, puzzles, replays).
//!
//! [`GameState::from_layout`]: crate::GameState::from_layout

use serde::{Deserialize, Serialize};

use crate::core::{Card, Rank, BOARD_PILES, FOUNDATIONS, FOUNDATION_SUITS};

/// Every pile on the table, bottom card first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub board: Vec<Vec<Card>>,
    pub king_piles: Vec<Vec<Card>>,
    pub ace_piles: Vec<Vec<Card>>,
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    /// Board slot the hand was lifted from; `None` when unbound.
    pub hand_origin: Option<usize>,
}

impl Layout {
    /// Correctly shaped table with no cards.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            board: vec![Vec::new(); BOARD_PILES],
            king_piles: vec![Vec::new(); FOUNDATIONS],
            ace_piles: vec![Vec::new(); FOUNDATIONS],
            deck: Vec::new(),
            hand: Vec::new(),
            hand_origin: None,
        }
    }

    /// Empty table with the eight foundation seed cards in place.
    #[must_use]
    pub fn seeded() -> Self {
        let mut layout = Self::empty();
        for (i, &suit) in FOUNDATION_SUITS.iter().enumerate() {
            layout.king_piles[i].push(Card::new(suit, Rank::King));
            layout.ace_piles[i].push(Card::new(suit, Rank::Ace));
        }
        layout
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let piles = self.board.iter().chain(&self.king_piles).chain(&self.ace_piles);
        piles.map(Vec::len).sum::<usize>() + self.deck.len() + self.hand.len()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::empty()
    }
}
