//! The rule table.
//!
//! `MoveValidator` maps a proposed transfer to acceptance or a
//! [`Rejection`]. It sees only the facts it needs (what kind of pile the
//! card leaves, how many cards that pile holds, the card itself, and the
//! card it would land on) and never touches game state.
//!
//! | source | destination | accepted when |
//! |---|---|---|
//! | Board / Hand / King / Ace | King pile | same suit, one rank lower than the top |
//! | Board / Hand / King / Ace | Ace pile | same suit, one rank higher than the top |
//! | King / Ace holding one card | anything | never: "cannot empty this pile" |
//! | Hand | Hand | always (reorder) |
//! | Board slot `i` | Deck | while dealing, and the card's rank ordinal is `i` |
//! | anything | anything but the Deck, while dealing | never: "finish dealing first" |
//! | anything | Board | never |

use crate::core::{Card, Location, PileKind};

use super::rejection::Rejection;

/// Everything the rule table needs to judge one transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proposal {
    /// Where the card is picked up.
    pub source: Location,
    /// Cards in the source pile before the move.
    pub source_len: usize,
    /// The card being moved.
    pub card: Card,
    /// Where the card is dropped.
    pub dest: Location,
    /// Card already at the destination: the top of an ordered pile, or
    /// the card at the target hand slot.
    pub dest_card: Option<Card>,
    /// The dealing phase currently allows returning board cards to the deck.
    pub deck_open: bool,
}

/// Pure rule functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveValidator;

impl MoveValidator {
    /// Judge a proposed transfer.
    ///
    /// A drop onto the very card being moved is reported as
    /// [`Rejection::SelfMove`] before any rule is consulted.
    pub fn check(proposal: &Proposal) -> Result<(), Rejection> {
        let Proposal {
            source,
            source_len,
            card,
            dest,
            dest_card,
            deck_open,
        } = *proposal;

        // Same location only: with two packs an equal card elsewhere is a
        // different card.
        if source == dest && dest_card == Some(card) {
            return Err(Rejection::SelfMove);
        }

        if deck_open && dest.kind() != PileKind::Deck {
            return Err(Rejection::StillDealing);
        }

        if source.kind().is_foundation() && source_len <= 1 {
            return Err(Rejection::CannotEmptyPile);
        }

        match dest.kind() {
            PileKind::King => Self::onto_king_pile(card, dest_card),
            PileKind::Ace => Self::onto_ace_pile(card, dest_card),
            PileKind::Hand => match source.kind() {
                PileKind::Hand => Ok(()),
                _ => Err(Rejection::CannotMoveToHand),
            },
            PileKind::Deck => Self::onto_deck(source, card, deck_open),
            PileKind::Board => Err(Rejection::CannotPlaceOnBoard),
        }
    }

    /// King piles build down in suit.
    pub fn onto_king_pile(card: Card, top: Option<Card>) -> Result<(), Rejection> {
        let top = top.ok_or(Rejection::NothingToBuildOn)?;
        if card.suit() != top.suit() {
            return Err(Rejection::WrongSuit);
        }
        if !card.is_one_below(&top) {
            return Err(Rejection::NotOneLower);
        }
        Ok(())
    }

    /// Ace piles build up in suit.
    pub fn onto_ace_pile(card: Card, top: Option<Card>) -> Result<(), Rejection> {
        let top = top.ok_or(Rejection::NothingToBuildOn)?;
        if card.suit() != top.suit() {
            return Err(Rejection::WrongSuit);
        }
        if !card.is_one_above(&top) {
            return Err(Rejection::NotOneHigher);
        }
        Ok(())
    }

    /// Board slot `i` may return its top card to the deck while dealing,
    /// provided that card's rank ordinal is `i`.
    pub fn onto_deck(source: Location, card: Card, deck_open: bool) -> Result<(), Rejection> {
        let Location::Board(slot) = source else {
            return Err(Rejection::CannotReturnToDeck);
        };
        if !deck_open {
            return Err(Rejection::DeckClosed);
        }
        if card.rank().ordinal() != slot {
            return Err(Rejection::WrongRankForDeck);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    fn c(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn proposal(source: Location, card: Card, dest: Location, dest_card: Option<Card>) -> Proposal {
        Proposal {
            source,
            source_len: 3,
            card,
            dest,
            dest_card,
            deck_open: false,
        }
    }

    #[test]
    fn test_king_pile_gate() {
        let seven = c(Suit::Spades, Rank::Seven);

        assert_eq!(
            MoveValidator::onto_king_pile(seven, Some(c(Suit::Spades, Rank::Eight))),
            Ok(())
        );
        assert_eq!(
            MoveValidator::onto_king_pile(seven, Some(c(Suit::Hearts, Rank::Eight))),
            Err(Rejection::WrongSuit)
        );
        assert_eq!(
            MoveValidator::onto_king_pile(seven, Some(c(Suit::Spades, Rank::Nine))),
            Err(Rejection::NotOneLower)
        );
        assert_eq!(
            MoveValidator::onto_king_pile(seven, Some(c(Suit::Spades, Rank::Six))),
            Err(Rejection::NotOneLower)
        );
        assert_eq!(
            MoveValidator::onto_king_pile(seven, None),
            Err(Rejection::NothingToBuildOn)
        );
    }

    #[test]
    fn test_ace_pile_gate() {
        let four = c(Suit::Diamonds, Rank::Four);

        assert_eq!(
            MoveValidator::onto_ace_pile(four, Some(c(Suit::Diamonds, Rank::Three))),
            Ok(())
        );
        assert_eq!(
            MoveValidator::onto_ace_pile(four, Some(c(Suit::Clubs, Rank::Three))),
            Err(Rejection::WrongSuit)
        );
        assert_eq!(
            MoveValidator::onto_ace_pile(four, Some(c(Suit::Diamonds, Rank::Two))),
            Err(Rejection::NotOneHigher)
        );
    }

    #[test]
    fn test_protection_beats_gate() {
        // Even a move the gate would accept is refused when it empties a foundation
        let mut p = proposal(
            Location::Ace(0),
            c(Suit::Hearts, Rank::Ace),
            Location::King(0),
            Some(c(Suit::Hearts, Rank::Two)),
        );
        p.source_len = 1;
        assert_eq!(MoveValidator::check(&p), Err(Rejection::CannotEmptyPile));

        p.source = Location::King(0);
        assert_eq!(MoveValidator::check(&p), Err(Rejection::CannotEmptyPile));
    }

    #[test]
    fn test_foundation_to_foundation() {
        let p = proposal(
            Location::Ace(2),
            c(Suit::Clubs, Rank::Six),
            Location::King(2),
            Some(c(Suit::Clubs, Rank::Seven)),
        );
        assert_eq!(MoveValidator::check(&p), Ok(()));

        let p = proposal(
            Location::King(1),
            c(Suit::Diamonds, Rank::Eight),
            Location::Ace(1),
            Some(c(Suit::Diamonds, Rank::Seven)),
        );
        assert_eq!(MoveValidator::check(&p), Ok(()));
    }

    #[test]
    fn test_self_move_detected_first() {
        let card = c(Suit::Hearts, Rank::King);
        let mut p = proposal(Location::King(0), card, Location::King(0), Some(card));
        p.source_len = 1;
        assert_eq!(MoveValidator::check(&p), Err(Rejection::SelfMove));

        let five = c(Suit::Clubs, Rank::Five);
        let p = proposal(Location::Hand(2), five, Location::Hand(2), Some(five));
        assert_eq!(MoveValidator::check(&p), Err(Rejection::SelfMove));
    }

    #[test]
    fn test_hand_rows() {
        let five = c(Suit::Clubs, Rank::Five);
        let nine = c(Suit::Hearts, Rank::Nine);
        let p = proposal(Location::Hand(0), five, Location::Hand(3), Some(nine));
        assert_eq!(MoveValidator::check(&p), Ok(()));

        let p = proposal(Location::Hand(0), five, Location::Hand(9), None);
        assert_eq!(MoveValidator::check(&p), Ok(()));

        let p = proposal(Location::Board(3), five, Location::Hand(0), None);
        assert_eq!(MoveValidator::check(&p), Err(Rejection::CannotMoveToHand));
    }

    #[test]
    fn test_equal_card_in_another_hand_slot_is_a_reorder() {
        let seven = c(Suit::Clubs, Rank::Seven);
        let p = proposal(Location::Hand(0), seven, Location::Hand(2), Some(seven));
        assert_eq!(MoveValidator::check(&p), Ok(()));
    }

    #[test]
    fn test_only_deck_returns_while_dealing() {
        let queen = c(Suit::Hearts, Rank::Queen);
        let mut p = proposal(
            Location::Board(1),
            queen,
            Location::King(0),
            Some(c(Suit::Hearts, Rank::King)),
        );
        assert_eq!(MoveValidator::check(&p), Ok(()));

        p.deck_open = true;
        assert_eq!(MoveValidator::check(&p), Err(Rejection::StillDealing));

        p.dest = Location::Board(4);
        assert_eq!(MoveValidator::check(&p), Err(Rejection::StillDealing));

        p.dest = Location::Deck;
        assert_eq!(MoveValidator::check(&p), Err(Rejection::WrongRankForDeck));
    }

    #[test]
    fn test_board_is_never_a_destination() {
        let p = proposal(
            Location::Hand(0),
            c(Suit::Clubs, Rank::Five),
            Location::Board(5),
            None,
        );
        assert_eq!(MoveValidator::check(&p), Err(Rejection::CannotPlaceOnBoard));
    }

    #[test]
    fn test_deck_return_gate() {
        let six = c(Suit::Spades, Rank::Six);

        let mut p = proposal(Location::Board(5), six, Location::Deck, None);
        assert_eq!(MoveValidator::check(&p), Err(Rejection::DeckClosed));

        p.deck_open = true;
        assert_eq!(MoveValidator::check(&p), Ok(()));

        p.source = Location::Board(6);
        assert_eq!(MoveValidator::check(&p), Err(Rejection::WrongRankForDeck));

        p.source = Location::Hand(0);
        assert_eq!(MoveValidator::check(&p), Err(Rejection::CannotReturnToDeck));
    }
}
