//! Moves: the pick-up/drop state machine and the undo history.

mod history;
mod pending;
mod record;

pub use history::History;
pub use pending::{MoveStatus, PendingMove};
pub use record::MoveRecord;
