//! Error types.
//!
//! Rule violations are not errors in this sense: they come back as
//! [`Rejection`](crate::rules::Rejection) values. The types here cover the
//! move protocol, configuration and invariant checking. Caller contract
//! violations (out-of-range pile indices, stale move handles) panic.

use thiserror::Error;

use crate::core::{Card, Location};
use crate::rules::Rejection;

/// Why a location cannot be picked up from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFault {
    /// The pile (or hand slot) holds no card.
    Empty,
    /// Cards never leave this pile through a move.
    NotASource,
}

impl std::fmt::Display for SourceFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFault::Empty => f.write_str("nothing to pick up"),
            SourceFault::NotASource => f.write_str("cards only leave it by drawing"),
        }
    }
}

/// Failures of the two-phase move protocol and deal flow.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot pick up from {location}: {fault}")]
    InvalidSource { location: Location, fault: SourceFault },

    #[error("no deal is in progress")]
    NotDealing,

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// Configuration parse or validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unsupported pack count {0} (expected 1 or 2)")]
    UnsupportedPacks(u8),
}

/// A table invariant that does not hold.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("card count is {found}, expected {expected}")]
    CardCount { expected: usize, found: usize },

    #[error("{location} is not a single-suit run in order")]
    FoundationOrder { location: Location },

    #[error("{card} appears {count} times, at most {allowed} allowed")]
    TooManyCopies { card: Card, count: usize, allowed: usize },

    #[error("hand is bound to board pile {slot} but that slot is not empty")]
    HandSlotOccupied { slot: usize },

    #[error("hand holds cards without being bound to a board slot")]
    UnboundHand,
}
