//! Rule rejections.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a proposed move or draw was refused.
///
/// These are game-rule outcomes, not faults: the table is unchanged and
/// `Display` gives the plain reason string for the player. The one
/// exception is [`Rejection::SelfMove`], which aborts a degenerate drag
/// and should not be shown at all (see [`Rejection::is_user_facing`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Rejection {
    /// Source and destination resolve to the same card.
    #[error("card dropped onto itself")]
    SelfMove,

    /// Foundation holds only its seed card.
    #[error("cannot empty this pile")]
    CannotEmptyPile,

    #[error("wrong suit")]
    WrongSuit,

    #[error("rank is not one lower than destination")]
    NotOneLower,

    #[error("rank is not one higher than destination")]
    NotOneHigher,

    /// Foundation with no card to build on.
    #[error("destination has no card to build on")]
    NothingToBuildOn,

    #[error("cannot move to hand")]
    CannotMoveToHand,

    #[error("cannot place cards on the board")]
    CannotPlaceOnBoard,

    #[error("only board cards can be returned to the deck")]
    CannotReturnToDeck,

    #[error("cards can only be returned to the deck while dealing")]
    DeckClosed,

    /// Board slot `i` only returns cards whose rank ordinal is `i`.
    #[error("wrong rank to return to the deck from this pile")]
    WrongRankForDeck,

    #[error("the deck is empty")]
    DeckEmpty,

    #[error("finish dealing first")]
    StillDealing,
}

impl Rejection {
    /// Whether this outcome belongs on an error display.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Rejection::SelfMove)
    }

    /// Plain reason text.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
