//! Game flow: dealing, moves, undo, win detection and snapshots.
//!
//! - `state`: [`GameState`], the single owner of every pile
//! - `deal`: pack composition and round sizing
//! - `layout`: plain-data positions for comparison and setup
//! - `snapshot`: immutable views for readers
//! - `shared`: one writer, many reader threads
//! - `stats`: what a won game reports

pub mod deal;
mod layout;
mod shared;
mod snapshot;
mod state;
mod stats;

pub use layout::Layout;
pub use shared::{SharedGame, SnapshotReader};
pub use snapshot::{GameSnapshot, HandView};
pub use state::{GameState, Phase};
pub use stats::{GameStats, StatsSink};
