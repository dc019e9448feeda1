//! Move rules: the suit/rank gate, pile protection and deck returns.

mod rejection;
mod validator;

pub use rejection::Rejection;
pub use validator::{MoveValidator, Proposal};
