//! # kings-aces
//!
//! Engine for a two-foundation solitaire: each suit has a King pile built
//! down and an Ace pile built up, fed from thirteen board piles, a deck
//! and a hand lifted out of the board.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: `GameState` owns every pile. Piles only change
//!    through a deal, a finalized move, a draw or an undo, and each of
//!    those leaves the table consistent.
//!
//! 2. **Rejections Are Values**: A move the rules refuse comes back as a
//!    [`Rejection`] carrying a user-facing reason. Misuse of the API
//!    (stale handles, out-of-range piles) panics.
//!
//! 3. **Deterministic Deals**: The shuffle is driven by a seeded ChaCha
//!    RNG, so a seed reproduces its layout exactly.
//!
//! ## Architecture
//!
//! - **Two-Phase Moves**: `begin_move` picks a card up, `finalize_move`
//!   drops it. Validation happens at the drop; the table does not change
//!   before acceptance.
//!
//! - **Exact Undo**: History records where a card actually landed, so
//!   undo restores the previous layout card for card.
//!
//! - **Persistent Piles**: Piles are `im` vectors, so snapshots for
//!   readers are O(1) and share structure with the live table.
//!
//! ## Modules
//!
//! - `core`: Cards, locations, RNG, configuration
//! - `piles`: Ordered piles and the hand
//! - `rules`: Move validation and rejection reasons
//! - `moves`: Pending moves and undo history
//! - `game`: Dealing, game flow, snapshots and win statistics
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod game;
pub mod moves;
pub mod piles;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Card, Rank, Suit,
    GameConfig, GameRng,
    Location, PileKind, Placement,
    BOARD_PILES, FOUNDATIONS, FOUNDATION_SUITS, FULL_RUN,
};

pub use crate::piles::{Hand, Pile};

pub use crate::rules::{MoveValidator, Proposal, Rejection};

pub use crate::moves::{History, MoveRecord, MoveStatus, PendingMove};

pub use crate::game::{
    GameSnapshot, GameState, GameStats, HandView, Layout, Phase,
    SharedGame, SnapshotReader, StatsSink,
};

pub use crate::error::{ConfigError, EngineError, InvariantViolation, SourceFault};
