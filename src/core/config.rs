//! Game configuration and table constants.
//!
//! The table shape is fixed: 13 board slots (one per rank), four King
//! piles and four Ace piles. What varies between games is configured
//! through [`GameConfig`]:
//! - `packs`: how many 52-card packs are in play
//! - `pause_between_rounds`: whether dealing stops after each round so
//!   board cards can be returned to the deck
//!
//! Configs can be built in code or read from TOML:
//!
//! ```
//! use kings_aces::GameConfig;
//!
//! let config = GameConfig::from_toml_str("packs = 2\npause_between_rounds = true").unwrap();
//! assert_eq!(config.packs, 2);
//! assert!(config.pause_between_rounds);
//! ```

use serde::{Deserialize, Serialize};

use super::card::{Rank, Suit};
use crate::error::ConfigError;

/// Number of board piles. Slot `i` is bound to the rank with ordinal `i`.
pub const BOARD_PILES: usize = Rank::COUNT;

/// Number of King piles, and of Ace piles.
pub const FOUNDATIONS: usize = Suit::COUNT;

/// Cards in a completed foundation.
pub const FULL_RUN: usize = Rank::COUNT;

/// Cards in one pack.
pub const CARDS_PER_PACK: usize = Suit::COUNT * Rank::COUNT;

/// Suit of foundation `i`, for both King and Ace piles.
pub const FOUNDATION_SUITS: [Suit; FOUNDATIONS] =
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// Largest supported pack count.
pub const MAX_PACKS: u8 = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Number of 52-card packs (1 or 2).
    pub packs: u8,

    /// Stop after each dealt round so board tops can go back to the deck.
    pub pause_between_rounds: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            packs: 1,
            pause_between_rounds: false,
        }
    }
}

impl GameConfig {
    /// Single pack, deal runs straight through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of packs.
    ///
    /// Panics outside `1..=MAX_PACKS`; use [`GameConfig::validate`] for
    /// untrusted input.
    #[must_use]
    pub fn with_packs(mut self, packs: u8) -> Self {
        assert!((1..=MAX_PACKS).contains(&packs), "Pack count must be 1..={MAX_PACKS}");
        self.packs = packs;
        self
    }

    /// Pause after every dealt round.
    #[must_use]
    pub fn paused_deal(mut self) -> Self {
        self.pause_between_rounds = true;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a playable table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PACKS).contains(&self.packs) {
            return Err(ConfigError::UnsupportedPacks(self.packs));
        }
        Ok(())
    }

    /// Total cards on the table for this config.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        CARDS_PER_PACK * usize::from(self.packs)
    }
}
