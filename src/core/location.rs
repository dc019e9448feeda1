//! Addressing piles and positions within them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The five pile families on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Face-up stacks dealt from the shuffled pack, one per rank.
    Board,
    /// Foundations built down from a King.
    King,
    /// Foundations built up from an Ace.
    Ace,
    /// Residual stack of undealt and returned cards.
    Deck,
    /// Transient pile lifted out of a board slot.
    Hand,
}

impl PileKind {
    /// Foundations are seeded at deal time and protected from emptying.
    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, PileKind::King | PileKind::Ace)
    }
}

/// A concrete location: pile family plus index.
///
/// For `Board`, `King` and `Ace` the index selects the pile. For `Hand`
/// the index selects a position inside the hand, since any hand card can
/// be picked up. The deck is a single pile and carries no index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Board(usize),
    King(usize),
    Ace(usize),
    Deck,
    Hand(usize),
}

impl Location {
    /// Build a location from a kind and index (the index is ignored for
    /// the deck).
    #[must_use]
    pub const fn new(kind: PileKind, index: usize) -> Self {
        match kind {
            PileKind::Board => Location::Board(index),
            PileKind::King => Location::King(index),
            PileKind::Ace => Location::Ace(index),
            PileKind::Deck => Location::Deck,
            PileKind::Hand => Location::Hand(index),
        }
    }

    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            Location::Board(_) => PileKind::Board,
            Location::King(_) => PileKind::King,
            Location::Ace(_) => PileKind::Ace,
            Location::Deck => PileKind::Deck,
            Location::Hand(_) => PileKind::Hand,
        }
    }

    /// Pile or hand-slot index; `None` for the deck.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Location::Board(i) | Location::King(i) | Location::Ace(i) | Location::Hand(i) => {
                Some(i)
            }
            Location::Deck => None,
        }
    }

    /// Where a card returning to this location is put back.
    ///
    /// Ordered piles only change at the top; the hand is index-exact.
    #[must_use]
    pub const fn placement(self) -> Placement {
        match self {
            Location::Hand(i) => Placement::Index(i),
            _ => Placement::Top,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Board(i) => write!(f, "board pile {i}"),
            Location::King(i) => write!(f, "king pile {i}"),
            Location::Ace(i) => write!(f, "ace pile {i}"),
            Location::Deck => write!(f, "the deck"),
            Location::Hand(i) => write!(f, "hand slot {i}"),
        }
    }
}

/// Position for inserting a card into a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Append as the new top card.
    Top,
    /// Insert at a specific index (0 = bottom). Indices past the end append.
    Index(usize),
}
