//! Card values: suit, rank, and a display-only hidden flag.
//!
//! Cards compare by `(suit, rank)` alone. Within one pack every value is
//! unique, so value equality is also card identity; the hidden flag is a
//! rendering hint and never takes part in comparisons or hashing.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Clubs,
    Diamonds,
    Hearts,
}

impl Suit {
    /// Number of suits.
    pub const COUNT: usize = 4;

    /// All suits in declaration order.
    pub const ALL: [Suit; Suit::COUNT] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

    /// Zero-based position in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, totally ordered `Ace < Two < ... < King`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Number of ranks.
    pub const COUNT: usize = 13;

    /// All ranks, lowest first.
    pub const ALL: [Rank; Rank::COUNT] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Zero-based ordinal: Ace = 0, King = 12.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Rank with the given ordinal, if any.
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// The next higher rank (`None` for King).
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// The next lower rank (`None` for Ace).
    #[must_use]
    pub fn pred(self) -> Option<Self> {
        self.ordinal().checked_sub(1).and_then(Self::from_ordinal)
    }

    /// Short label used in card names (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// Immutable apart from the `hidden` display flag (for example, a card
/// being dragged). Equality and hashing ignore that flag.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    #[serde(default)]
    hidden: bool,
}

impl Card {
    /// Create a visible card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            hidden: false,
        }
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Display flag; has no effect on rules.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Copy of this card with the display flag set.
    #[must_use]
    pub const fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Same suit as `other` and exactly one rank above it.
    ///
    /// ```
    /// use kings_aces::{Card, Rank, Suit};
    ///
    /// let eight = Card::new(Suit::Spades, Rank::Eight);
    /// let seven = Card::new(Suit::Spades, Rank::Seven);
    /// assert!(eight.is_one_above(&seven));
    /// assert!(!seven.is_one_above(&eight));
    /// assert!(!Card::new(Suit::Hearts, Rank::Eight).is_one_above(&seven));
    /// ```
    #[must_use]
    pub fn is_one_above(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank.ordinal() == other.rank.ordinal() + 1
    }

    /// Same suit as `other` and exactly one rank below it.
    #[must_use]
    pub fn is_one_below(&self, other: &Card) -> bool {
        other.is_one_above(self)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
