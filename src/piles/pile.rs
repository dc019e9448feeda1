//! Ordered card piles.
//!
//! A `Pile` is a bottom-to-top sequence of cards. Game logic only reads
//! and removes the top card of ordered piles; the hand is the exception
//! and uses the index-based operations.
//!
//! Piles are backed by `im::Vector`, so cloning a pile for a snapshot is
//! O(1) and shares structure with the live pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, Placement, Suit};

/// Ordered sequence of cards; index 0 is the bottom, the last card is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pile holding a single card.
    #[must_use]
    pub fn seeded(card: Card) -> Self {
        let mut pile = Self::new();
        pile.push(card);
        pile
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card (last added).
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// The bottom card.
    #[must_use]
    pub fn bottom(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Card at `index` (0 = bottom).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Append a card as the new top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Insert a card according to `placement`, returning the index it landed at.
    ///
    /// `Index` past the end appends.
    pub fn place(&mut self, card: Card, placement: Placement) -> usize {
        match placement {
            Placement::Top => {
                self.cards.push_back(card);
                self.cards.len() - 1
            }
            Placement::Index(i) => {
                let idx = i.min(self.cards.len());
                self.cards.insert(idx, card);
                idx
            }
        }
    }

    /// Remove and return the card at `index`, if present.
    pub fn take_at(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Move every card out, leaving this pile empty.
    pub fn take_all(&mut self) -> Pile {
        std::mem::take(self)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Structural-sharing view of the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Every card has the pile's bottom suit and ranks fall by exactly one
    /// from bottom to top (a King pile).
    #[must_use]
    pub fn is_descending_run(&self) -> bool {
        self.is_run_where(|upper, lower| lower.is_one_above(upper))
    }

    /// Every card has the pile's bottom suit and ranks rise by exactly one
    /// from bottom to top (an Ace pile).
    #[must_use]
    pub fn is_ascending_run(&self) -> bool {
        self.is_run_where(|upper, lower| upper.is_one_above(lower))
    }

    /// Suit of the bottom card, if any.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.bottom().map(|c| c.suit())
    }

    fn is_run_where(&self, step: impl Fn(&Card, &Card) -> bool) -> bool {
        self.cards
            .iter()
            .zip(self.cards.iter().skip(1))
            .all(|(lower, upper)| step(upper, lower))
    }
}

impl From<Vector<Card>> for Pile {
    fn from(cards: Vector<Card>) -> Self {
        Self { cards }
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
