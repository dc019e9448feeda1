//! Core value types: cards, locations, RNG, configuration.
//!
//! Everything here is plain data with no knowledge of game flow. The
//! `game` module assembles these into a playable table.

pub mod card;
pub mod config;
pub mod location;
pub mod rng;

pub use card::{Card, Rank, Suit};
pub use config::{
    GameConfig, BOARD_PILES, CARDS_PER_PACK, FOUNDATIONS, FOUNDATION_SUITS, FULL_RUN, MAX_PACKS,
};
pub use location::{Location, PileKind, Placement};
pub use rng::GameRng;
