//! Card containers: ordered piles and the hand.

mod hand;
mod pile;

pub use hand::Hand;
pub use pile::Pile;
