//! Pack composition for the deal.
//!
//! Each foundation is seeded with its suit's King or Ace before the
//! shuffle. The pack that gets shuffled is everything else: every card of
//! every pack, minus one King and one Ace per suit.
//!
//! The shuffled pack is then fanned out in rounds: one card to each board
//! pile, then one card to the deck. Another round follows while more than
//! [`BOARD_PILES`] cards remain undealt; the rest go to the deck. With a
//! single pack that is three rounds (39 board cards, 5 in the deck).

use crate::core::{Card, Rank, Suit, BOARD_PILES};

/// Cards seeded onto foundations: one King and one Ace per suit.
pub const SEED_CARDS: usize = 2 * Suit::COUNT;

/// Build the unshuffled pack for `packs` packs, without the seed cards.
#[must_use]
pub fn build_pack(packs: u8) -> Vec<Card> {
    let mut pack = Vec::with_capacity(usize::from(packs) * Suit::COUNT * Rank::COUNT - SEED_CARDS);
    for suit in Suit::ALL {
        for copy in 0..packs {
            for rank in Rank::ALL {
                if copy == 0 && matches!(rank, Rank::King | Rank::Ace) {
                    continue;
                }
                pack.push(Card::new(suit, rank));
            }
        }
    }
    pack
}

/// Whether the undealt stock is large enough for another round.
#[must_use]
pub fn has_another_round(undealt: usize) -> bool {
    undealt > BOARD_PILES
}
