//! The table and everything that changes it.
//!
//! `GameState` owns every pile and is the single writer: piles change only
//! through a deal, a finalized move, a draw from the deck, or an undo.
//! Each of those completes synchronously and leaves the table consistent;
//! readers that need a view across threads take a [`GameSnapshot`] (see
//! also [`SharedGame`](super::SharedGame)).
//!
//! ## Moves
//!
//! ```
//! use kings_aces::{GameConfig, GameState, Location, Layout, Card, Rank, Suit};
//!
//! let mut layout = Layout::seeded();
//! layout.board[3].push(Card::new(Suit::Hearts, Rank::Queen));
//! let mut game = GameState::from_layout(GameConfig::default(), layout);
//!
//! let mut mv = game.begin_move(Location::Board(3)).unwrap();
//! game.finalize_move(&mut mv, Location::King(0)).unwrap();
//! assert_eq!(game.king_pile(0).len(), 2);
//!
//! assert!(game.undo());
//! assert_eq!(game.king_pile(0).len(), 1);
//! assert!(!game.undo());
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument, warn};

use super::deal;
use super::layout::Layout;
use super::snapshot::{GameSnapshot, HandView};
use super::stats::{GameStats, StatsSink};
use crate::core::{
    Card, GameConfig, GameRng, Location, Rank, BOARD_PILES, FOUNDATIONS, FOUNDATION_SUITS, FULL_RUN,
};
use crate::error::{EngineError, InvariantViolation, SourceFault};
use crate::moves::{History, MoveRecord, MoveStatus, PendingMove};
use crate::piles::{Hand, Pile};
use crate::rules::{MoveValidator, Proposal, Rejection};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing dealt yet.
    Idle,
    /// Paused after dealing `round` rounds; board cards may go back to the deck.
    Dealing { round: usize },
    /// Dealing finished.
    Playing,
}

impl Phase {
    #[must_use]
    pub fn is_dealing(self) -> bool {
        matches!(self, Phase::Dealing { .. })
    }

    /// Rounds dealt so far in the current deal (0 outside dealing).
    #[must_use]
    pub fn round(self) -> usize {
        match self {
            Phase::Dealing { round } => round,
            Phase::Idle | Phase::Playing => 0,
        }
    }
}

/// Complete game state.
pub struct GameState {
    config: GameConfig,

    board: Vec<Pile>,
    kings: Vec<Pile>,
    aces: Vec<Pile>,
    deck: Pile,
    hand: Hand,
    /// Shuffled cards not yet dealt.
    stock: Pile,

    phase: Phase,
    history: History,

    /// Ticket of the one outstanding pending move.
    pending: Option<u64>,
    next_ticket: u64,

    seed: Option<u64>,
    /// Card total fixed at deal (or layout) time.
    expected_cards: usize,
    /// Bumped by every mutation.
    version: u64,

    started: Option<Instant>,
    win_reported: bool,
    stats_sink: Option<Box<dyn StatsSink>>,
}

impl GameState {
    /// Create an empty table. Call [`GameState::deal_new_game`] to play.
    ///
    /// Panics if `config` does not validate.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("{err}");
        }

        Self {
            config,
            board: vec![Pile::new(); BOARD_PILES],
            kings: vec![Pile::new(); FOUNDATIONS],
            aces: vec![Pile::new(); FOUNDATIONS],
            deck: Pile::new(),
            hand: Hand::new(),
            stock: Pile::new(),
            phase: Phase::Idle,
            history: History::new(),
            pending: None,
            next_ticket: 0,
            seed: None,
            expected_cards: 0,
            version: 0,
            started: None,
            win_reported: false,
            stats_sink: None,
        }
    }

    /// Start from a constructed position, already in [`Phase::Playing`].
    ///
    /// The layout need not be reachable from a deal; its card total becomes
    /// the total that moves must conserve. Panics on a wrongly shaped
    /// layout, a hand that holds cards without an origin slot, or a hand
    /// bound to a board slot that still holds cards.
    #[must_use]
    pub fn from_layout(config: GameConfig, layout: Layout) -> Self {
        assert_eq!(layout.board.len(), BOARD_PILES, "Layout needs {BOARD_PILES} board piles");
        assert_eq!(layout.king_piles.len(), FOUNDATIONS, "Layout needs {FOUNDATIONS} king piles");
        assert_eq!(layout.ace_piles.len(), FOUNDATIONS, "Layout needs {FOUNDATIONS} ace piles");

        let mut state = Self::new(config);
        state.board = layout.board.into_iter().map(Pile::from).collect();
        state.kings = layout.king_piles.into_iter().map(Pile::from).collect();
        state.aces = layout.ace_piles.into_iter().map(Pile::from).collect();
        state.deck = Pile::from(layout.deck);
        state.hand = match layout.hand_origin {
            Some(origin) => {
                assert!(origin < BOARD_PILES, "Hand origin {origin} out of range");
                assert!(
                    state.board[origin].is_empty(),
                    "Hand origin {origin} must be an empty board slot"
                );
                Hand::bound(origin, Pile::from(layout.hand))
            }
            None => {
                assert!(layout.hand.is_empty(), "An unbound hand must be empty");
                Hand::new()
            }
        };
        state.phase = Phase::Playing;
        state.expected_cards = state.card_count();
        state.started = Some(Instant::now());
        state
    }

    /// Register the collaborator that receives statistics on a win.
    pub fn set_stats_sink(&mut self, sink: impl StatsSink + 'static) {
        self.stats_sink = Some(Box::new(sink));
    }

    // === Dealing ===

    /// Seed the foundations, shuffle the rest and deal it out.
    ///
    /// With `seed` the layout is fully determined; without one a seed is
    /// drawn from the process-wide random source. Returns the seed used.
    /// Clears history and discards any pending move.
    ///
    /// When the config pauses between rounds, this stops after the first
    /// round; see [`GameState::continue_deal`].
    #[instrument(skip(self))]
    pub fn deal_new_game(&mut self, seed: Option<u64>) -> u64 {
        let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        self.clear_table();

        for (i, &suit) in FOUNDATION_SUITS.iter().enumerate() {
            self.kings[i] = Pile::seeded(Card::new(suit, Rank::King));
            self.aces[i] = Pile::seeded(Card::new(suit, Rank::Ace));
        }

        let mut pack = deal::build_pack(self.config.packs);
        rng.shuffle(&mut pack);
        self.stock = Pile::from(pack);
        self.seed = Some(rng.seed());
        self.expected_cards = self.config.total_cards();

        self.deal_round();
        if !self.config.pause_between_rounds {
            while self.phase.is_dealing() {
                self.finish_round();
            }
        }
        self.touch();

        info!(seed = rng.seed(), phase = ?self.phase, "dealt new game");
        rng.seed()
    }

    /// Resume a paused deal: the round just dealt is committed (history is
    /// cleared) and the next round dealt, or dealing completes.
    #[instrument(skip(self))]
    pub fn continue_deal(&mut self) -> Result<(), EngineError> {
        if !self.phase.is_dealing() {
            return Err(EngineError::NotDealing);
        }
        self.discard_pending();
        self.finish_round();
        self.touch();
        debug!(phase = ?self.phase, undealt = self.stock.len(), "deal continued");
        Ok(())
    }

    /// Board cards may currently be returned to the deck.
    #[must_use]
    pub fn can_return_to_deck(&self) -> bool {
        self.phase.is_dealing()
    }

    fn clear_table(&mut self) {
        self.board = vec![Pile::new(); BOARD_PILES];
        self.kings = vec![Pile::new(); FOUNDATIONS];
        self.aces = vec![Pile::new(); FOUNDATIONS];
        self.deck.clear();
        self.stock.clear();
        self.hand = Hand::new();
        self.history.clear();
        self.discard_pending();
        self.phase = Phase::Idle;
        self.started = None;
        self.win_reported = false;
    }

    fn deal_round(&mut self) {
        for pile in &mut self.board {
            if let Some(card) = self.stock.pop() {
                pile.push(card);
            }
        }
        self.phase = Phase::Dealing {
            round: self.phase.round() + 1,
        };
    }

    fn finish_round(&mut self) {
        self.history.clear();
        if let Some(card) = self.stock.pop() {
            self.deck.push(card);
        }

        if deal::has_another_round(self.stock.len()) {
            self.deal_round();
        } else {
            while let Some(card) = self.stock.pop() {
                self.deck.push(card);
            }
            self.phase = Phase::Playing;
            self.started = Some(Instant::now());
        }
    }

    // === Moves ===

    /// Pick up the card at `source`.
    ///
    /// Ordered piles give up their top card; the hand gives up the card at
    /// the given slot. Nothing moves until [`GameState::finalize_move`].
    /// Beginning a move while another is pending discards the earlier one.
    ///
    /// Panics if `source` names a pile that does not exist.
    #[instrument(skip(self))]
    pub fn begin_move(&mut self, source: Location) -> Result<PendingMove, EngineError> {
        if source == Location::Deck {
            return Err(EngineError::InvalidSource {
                location: source,
                fault: SourceFault::NotASource,
            });
        }
        let card = self.card_at(source).ok_or(EngineError::InvalidSource {
            location: source,
            fault: SourceFault::Empty,
        })?;

        if let Some(ticket) = self.pending.take() {
            warn!(ticket, "pending move superseded by a new pick-up");
        }
        self.next_ticket += 1;
        self.pending = Some(self.next_ticket);
        Ok(PendingMove::new(self.next_ticket, source, card))
    }

    /// Drop a pending move at `dest`.
    ///
    /// On acceptance the card moves, the move is recorded in history and
    /// the record returned. On rejection nothing changes and the reason is
    /// returned; [`Rejection::SelfMove`] marks a drop onto the card itself.
    /// Either way the pending move is settled.
    ///
    /// Panics if the move was already settled, was superseded (by another
    /// pick-up, a draw, an undo or a deal step), or if `dest` does not exist.
    #[instrument(skip(self, pending), fields(source = %pending.source()))]
    pub fn finalize_move(
        &mut self,
        pending: &mut PendingMove,
        dest: Location,
    ) -> Result<MoveRecord, Rejection> {
        assert!(
            pending.is_pending(),
            "move from {} was already {:?}",
            pending.source(),
            pending.status()
        );
        assert_eq!(
            self.pending,
            Some(pending.ticket()),
            "move from {} was superseded",
            pending.source()
        );
        self.pending = None;

        let (source, card) = (pending.source(), pending.card());
        debug_assert_eq!(self.card_at(source), Some(card));

        if let Err(rejection) = MoveValidator::check(&self.proposal(source, card, dest)) {
            pending.settle(MoveStatus::Discarded);
            debug!(%card, %dest, %rejection, "move rejected");
            return Err(rejection);
        }

        let record = self.transfer(source, dest);
        pending.settle(MoveStatus::Finalized);
        self.history.push(record);
        self.touch();
        debug!(%card, %dest, "move accepted");

        debug_assert_eq!(self.card_count(), self.expected_cards);
        self.report_win_if_complete();
        Ok(record)
    }

    /// Give up on a pending move. The table is untouched.
    pub fn abandon_move(&mut self, pending: &mut PendingMove) {
        if self.pending == Some(pending.ticket()) {
            self.pending = None;
        }
        if pending.is_pending() {
            pending.settle(MoveStatus::Discarded);
        }
    }

    /// Pick up at `source` and drop at `dest` in one call.
    pub fn move_card(
        &mut self,
        source: Location,
        dest: Location,
    ) -> Result<MoveRecord, EngineError> {
        let mut pending = self.begin_move(source)?;
        Ok(self.finalize_move(&mut pending, dest)?)
    }

    /// Whether a pick-up is waiting for its drop.
    #[must_use]
    pub fn has_pending_move(&self) -> bool {
        self.pending.is_some()
    }

    /// Every destination that would accept the card at `source`.
    ///
    /// Self-moves are not included. Empty when `source` holds no card or
    /// is not a move source.
    #[must_use]
    pub fn legal_destinations(&self, source: Location) -> SmallVec<[Location; 8]> {
        let card = match source {
            Location::Deck => None,
            _ => self.card_at(source),
        };
        let Some(card) = card else {
            return SmallVec::new();
        };

        let hand_slots = match source {
            Location::Hand(_) => self.hand.len(),
            _ => 0,
        };
        (0..FOUNDATIONS)
            .map(Location::King)
            .chain((0..FOUNDATIONS).map(Location::Ace))
            .chain(std::iter::once(Location::Deck))
            .chain((0..hand_slots).map(Location::Hand))
            .filter(|&dest| MoveValidator::check(&self.proposal(source, card, dest)).is_ok())
            .collect()
    }

    fn proposal(&self, source: Location, card: Card, dest: Location) -> Proposal {
        Proposal {
            source,
            source_len: self.pile(source).len(),
            card,
            dest,
            dest_card: self.card_at(dest),
            deck_open: self.can_return_to_deck(),
        }
    }

    fn transfer(&mut self, source: Location, dest: Location) -> MoveRecord {
        let card = self.lift(source);
        let landed = self.put(dest, card);
        let dest = match dest {
            Location::Hand(_) => Location::Hand(landed),
            other => other,
        };
        MoveRecord::Transfer { source, dest, card }
    }

    // === Deck and hand ===

    /// Draw the deck's top card.
    ///
    /// The card goes onto the board slot matching its rank and that slot is
    /// lifted into the hand. A previously bound hand is first put back into
    /// its own slot. Recorded in history; a pending move is discarded.
    #[instrument(skip(self))]
    pub fn draw_from_deck(&mut self) -> Result<Card, Rejection> {
        if self.phase.is_dealing() {
            return Err(Rejection::StillDealing);
        }
        let card = self.deck.pop().ok_or(Rejection::DeckEmpty)?;
        self.discard_pending();

        let previous = self.restore_hand_slot();
        let slot = card.rank().ordinal();
        self.board[slot].push(card);
        self.lift_into_hand(slot);

        self.history.push(MoveRecord::Draw { card, slot, previous });
        self.touch();
        debug!(%card, slot, ?previous, "drew from deck");
        Ok(card)
    }

    /// Put the hand back into its board slot, returning that slot.
    fn restore_hand_slot(&mut self) -> Option<usize> {
        let (slot, cards) = self.hand.release()?;
        debug_assert!(self.board[slot].is_empty());
        self.board[slot] = cards;
        Some(slot)
    }

    fn lift_into_hand(&mut self, slot: usize) {
        let cards = self.board[slot].take_all();
        self.hand = Hand::bound(slot, cards);
    }

    // === Undo ===

    /// Reverse the most recent move exactly.
    ///
    /// Returns `false` (and does nothing) when history is empty. Discards
    /// any pending move.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };
        self.discard_pending();

        match record {
            MoveRecord::Transfer { source, dest, card } => {
                let back = self.lift(dest);
                debug_assert_eq!(back, card);
                self.put(source, back);
            }
            MoveRecord::Draw { card, slot, previous } => {
                let drawn = self.hand.cards_mut().pop();
                debug_assert_eq!(drawn, Some(card));
                self.deck.push(drawn.unwrap_or(card));

                let released = self.restore_hand_slot();
                debug_assert_eq!(released, Some(slot));
                if let Some(prev) = previous {
                    self.lift_into_hand(prev);
                }
            }
        }

        self.touch();
        debug!(?record, "undid move");
        true
    }

    // === Queries ===

    /// Every foundation holds a complete 13-card run.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.kings.iter().chain(&self.aces).all(|pile| pile.len() == FULL_RUN)
    }

    /// Immutable view of every pile.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            version: self.version,
            phase: self.phase,
            board: self.board.iter().map(|p| p.cards().clone()).collect(),
            king_piles: self.kings.iter().map(|p| p.cards().clone()).collect(),
            ace_piles: self.aces.iter().map(|p| p.cards().clone()).collect(),
            deck: self.deck.cards().clone(),
            hand: HandView {
                origin: self.hand.origin(),
                cards: self.hand.cards().cards().clone(),
            },
            undealt: self.stock.len(),
            move_count: self.history.len(),
        }
    }

    /// Pile contents as plain data.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.snapshot().layout()
    }

    /// Verify the table invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let found = self.card_count();
        if found != self.expected_cards {
            return Err(InvariantViolation::CardCount {
                expected: self.expected_cards,
                found,
            });
        }

        for (i, pile) in self.kings.iter().enumerate() {
            if !pile.is_descending_run() {
                return Err(InvariantViolation::FoundationOrder {
                    location: Location::King(i),
                });
            }
        }
        for (i, pile) in self.aces.iter().enumerate() {
            if !pile.is_ascending_run() {
                return Err(InvariantViolation::FoundationOrder {
                    location: Location::Ace(i),
                });
            }
        }

        let mut copies: FxHashMap<Card, usize> = FxHashMap::default();
        for card in self.all_piles().flat_map(|pile| pile.iter()) {
            *copies.entry(*card).or_default() += 1;
        }
        let allowed = usize::from(self.config.packs);
        if let Some((card, count)) = copies.into_iter().find(|&(_, n)| n > allowed) {
            return Err(InvariantViolation::TooManyCopies { card, count, allowed });
        }

        match self.hand.origin() {
            Some(slot) if !self.board[slot].is_empty() => {
                Err(InvariantViolation::HandSlotOccupied { slot })
            }
            None if !self.hand.is_empty() => Err(InvariantViolation::UnboundHand),
            _ => Ok(()),
        }
    }

    /// Cards on the table, including any still undealt.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.all_piles().map(Pile::len).sum()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Board pile `index`. Panics if out of range.
    #[must_use]
    pub fn board_pile(&self, index: usize) -> &Pile {
        self.pile(Location::Board(index))
    }

    /// King pile `index`. Panics if out of range.
    #[must_use]
    pub fn king_pile(&self, index: usize) -> &Pile {
        self.pile(Location::King(index))
    }

    /// Ace pile `index`. Panics if out of range.
    #[must_use]
    pub fn ace_pile(&self, index: usize) -> &Pile {
        self.pile(Location::Ace(index))
    }

    #[must_use]
    pub fn deck(&self) -> &Pile {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Cards not yet dealt.
    #[must_use]
    pub fn undealt(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Moves currently in history.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Seed of the current deal.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Version stamp; changes with every mutation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Time since dealing finished.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.map(|t| t.elapsed()).unwrap_or_default()
    }

    // === Internals ===

    fn all_piles(&self) -> impl Iterator<Item = &Pile> + '_ {
        self.board
            .iter()
            .chain(&self.kings)
            .chain(&self.aces)
            .chain([&self.deck, self.hand.cards(), &self.stock])
    }

    /// Card a location currently offers: the pile top, or the hand card
    /// at that slot.
    fn card_at(&self, location: Location) -> Option<Card> {
        match location {
            Location::Hand(i) => self.hand.cards().get(i),
            other => self.pile(other).top(),
        }
    }

    fn pile(&self, location: Location) -> &Pile {
        let pile = match location {
            Location::Board(i) => self.board.get(i),
            Location::King(i) => self.kings.get(i),
            Location::Ace(i) => self.aces.get(i),
            Location::Deck => Some(&self.deck),
            Location::Hand(_) => Some(self.hand.cards()),
        };
        pile.unwrap_or_else(|| panic!("{location} does not exist"))
    }

    fn pile_mut(&mut self, location: Location) -> &mut Pile {
        let pile = match location {
            Location::Board(i) => self.board.get_mut(i),
            Location::King(i) => self.kings.get_mut(i),
            Location::Ace(i) => self.aces.get_mut(i),
            Location::Deck => Some(&mut self.deck),
            Location::Hand(_) => Some(self.hand.cards_mut()),
        };
        pile.unwrap_or_else(|| panic!("{location} does not exist"))
    }

    /// Remove the card a location offers. Panics if there is none, which
    /// means history and table disagree.
    fn lift(&mut self, location: Location) -> Card {
        let card = match location {
            Location::Hand(i) => self.hand.cards_mut().take_at(i),
            other => self.pile_mut(other).pop(),
        };
        card.unwrap_or_else(|| panic!("{location} has no card to lift"))
    }

    /// Put a card at a location, returning the index it landed at.
    fn put(&mut self, location: Location, card: Card) -> usize {
        self.pile_mut(location).place(card, location.placement())
    }

    fn discard_pending(&mut self) {
        if let Some(ticket) = self.pending.take() {
            debug!(ticket, "pending move discarded");
        }
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    fn report_win_if_complete(&mut self) {
        if self.win_reported || !self.is_won() {
            return;
        }
        self.win_reported = true;

        let stats = GameStats {
            elapsed: self.elapsed(),
            move_count: self.history.len(),
        };
        info!(elapsed_ms = stats.elapsed_ms() as u64, moves = stats.move_count, "game won");
        if let Some(sink) = self.stats_sink.as_mut() {
            sink.record_win(stats);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("board", &self.board)
            .field("kings", &self.kings)
            .field("aces", &self.aces)
            .field("deck", &self.deck)
            .field("hand", &self.hand)
            .field("undealt", &self.stock.len())
            .field("moves", &self.history.len())
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn table(build: impl FnOnce(&mut Layout)) -> GameState {
        let mut layout = Layout::seeded();
        build(&mut layout);
        GameState::from_layout(GameConfig::default(), layout)
    }

    #[test]
    fn test_new_table_is_idle() {
        let game = GameState::default();
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.card_count(), 0);
        assert!(!game.is_won());
        assert_eq!(game.seed(), None);
    }

    #[test]
    fn test_deal_places_every_card() {
        let mut game = GameState::default();
        let seed = game.deal_new_game(Some(7));

        assert_eq!(seed, 7);
        assert_eq!(game.seed(), Some(7));
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.card_count(), 52);
        assert_eq!(game.undealt(), 0);
        assert_eq!(game.deck().len(), 5);
        for i in 0..BOARD_PILES {
            assert_eq!(game.board_pile(i).len(), 3);
        }
        for i in 0..FOUNDATIONS {
            assert_eq!(game.king_pile(i).top().map(|c| c.rank()), Some(Rank::King));
            assert_eq!(game.ace_pile(i).top().map(|c| c.rank()), Some(Rank::Ace));
        }
        game.check_invariants().unwrap();
    }

    #[test]
    fn test_paused_deal_rounds() {
        let mut game = GameState::new(GameConfig::new().paused_deal());
        game.deal_new_game(Some(3));

        assert_eq!(game.phase(), Phase::Dealing { round: 1 });
        assert!(game.can_return_to_deck());
        assert_eq!(game.undealt(), 44 - 13);
        assert_eq!(game.card_count(), 52);

        game.continue_deal().unwrap();
        assert_eq!(game.phase(), Phase::Dealing { round: 2 });
        assert_eq!(game.deck().len(), 1);

        game.continue_deal().unwrap();
        assert_eq!(game.phase(), Phase::Dealing { round: 3 });

        game.continue_deal().unwrap();
        assert_eq!(game.phase(), Phase::Playing);
        assert!(!game.can_return_to_deck());
        assert_eq!(game.deck().len(), 5);
        assert_eq!(game.continue_deal(), Err(EngineError::NotDealing));
        game.check_invariants().unwrap();
    }

    #[test]
    fn test_paused_deal_matches_straight_deal() {
        let mut straight = GameState::default();
        straight.deal_new_game(Some(99));

        let mut paused = GameState::new(GameConfig::new().paused_deal());
        paused.deal_new_game(Some(99));
        while paused.phase().is_dealing() {
            paused.continue_deal().unwrap();
        }

        assert_eq!(straight.layout(), paused.layout());
    }

    #[test]
    fn test_deck_is_not_a_source() {
        let mut game = GameState::default();
        game.deal_new_game(Some(1));
        assert_eq!(
            game.begin_move(Location::Deck),
            Err(EngineError::InvalidSource {
                location: Location::Deck,
                fault: SourceFault::NotASource,
            })
        );
    }

    #[test]
    fn test_empty_source() {
        let mut game = table(|_| {});
        assert_eq!(
            game.begin_move(Location::Board(2)),
            Err(EngineError::InvalidSource {
                location: Location::Board(2),
                fault: SourceFault::Empty,
            })
        );
        assert!(matches!(
            game.begin_move(Location::Hand(0)),
            Err(EngineError::InvalidSource { .. })
        ));
        assert!(!game.has_pending_move());
    }

    #[test]
    #[should_panic(expected = "board pile 13 does not exist")]
    fn test_out_of_range_source_panics() {
        let mut game = table(|_| {});
        let _ = game.begin_move(Location::Board(13));
    }

    #[test]
    fn test_rejection_leaves_table_alone() {
        let mut game = table(|l| l.board[0].push(card(Suit::Spades, Rank::Five)));
        let before = game.snapshot();

        let mut mv = game.begin_move(Location::Board(0)).unwrap();
        let result = game.finalize_move(&mut mv, Location::King(0));

        assert_eq!(result, Err(Rejection::WrongSuit));
        assert_eq!(mv.status(), MoveStatus::Discarded);
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_abandon_is_free() {
        let mut game = table(|l| l.board[0].push(card(Suit::Spades, Rank::Five)));
        let before = game.snapshot();

        let mut mv = game.begin_move(Location::Board(0)).unwrap();
        assert!(game.has_pending_move());
        game.abandon_move(&mut mv);

        assert!(!game.has_pending_move());
        assert_eq!(mv.status(), MoveStatus::Discarded);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    #[should_panic(expected = "already Finalized")]
    fn test_double_finalize_panics() {
        let mut game = table(|l| l.board[0].push(card(Suit::Hearts, Rank::Queen)));
        let mut mv = game.begin_move(Location::Board(0)).unwrap();
        game.finalize_move(&mut mv, Location::King(0)).unwrap();
        let _ = game.finalize_move(&mut mv, Location::King(0));
    }

    #[test]
    #[should_panic(expected = "superseded")]
    fn test_superseded_move_panics() {
        let mut game = table(|l| {
            l.board[0].push(card(Suit::Hearts, Rank::Queen));
            l.board[1].push(card(Suit::Hearts, Rank::Two));
        });
        let mut first = game.begin_move(Location::Board(0)).unwrap();
        let _second = game.begin_move(Location::Board(1)).unwrap();
        let _ = game.finalize_move(&mut first, Location::King(0));
    }

    #[test]
    fn test_legal_destinations() {
        let mut game = table(|l| {
            l.board[0].push(card(Suit::Hearts, Rank::Queen));
            l.board[1].push(card(Suit::Clubs, Rank::Two));
            l.board[2].push(card(Suit::Spades, Rank::Nine));
        });

        assert_eq!(game.legal_destinations(Location::Board(0)).as_slice(), &[Location::King(0)]);
        assert_eq!(game.legal_destinations(Location::Board(1)).as_slice(), &[Location::Ace(2)]);
        assert!(game.legal_destinations(Location::Board(2)).is_empty());
        assert!(game.legal_destinations(Location::Board(5)).is_empty());
        assert!(game.legal_destinations(Location::Deck).is_empty());

        // Legal destinations never mutate
        let before = game.snapshot();
        let _ = game.legal_destinations(Location::King(0));
        assert_eq!(game.snapshot(), before);
        assert!(game.move_card(Location::Board(0), Location::King(0)).is_ok());
    }

    #[test]
    fn test_version_moves_with_mutations() {
        let mut game = table(|l| l.board[0].push(card(Suit::Hearts, Rank::Queen)));
        let v0 = game.version();

        let _ = game.move_card(Location::Board(0), Location::Ace(0));
        assert_eq!(game.version(), v0);

        game.move_card(Location::Board(0), Location::King(0)).unwrap();
        let v1 = game.version();
        assert!(v1 > v0);

        assert!(game.undo());
        assert!(game.version() > v1);
    }

    #[test]
    fn test_invariant_checker_catches_bad_layouts() {
        let game = table(|l| l.king_piles[0].push(card(Suit::Hearts, Rank::Jack)));
        assert_eq!(
            game.check_invariants(),
            Err(InvariantViolation::FoundationOrder {
                location: Location::King(0)
            })
        );

        let game = table(|l| {
            l.board[0].push(card(Suit::Clubs, Rank::Six));
            l.board[1].push(card(Suit::Clubs, Rank::Six));
        });
        assert!(matches!(
            game.check_invariants(),
            Err(InvariantViolation::TooManyCopies { allowed: 1, count: 2, .. })
        ));

        let mut game = table(|l| {
            l.hand.push(card(Suit::Clubs, Rank::Five));
            l.hand_origin = Some(4);
        });
        game.check_invariants().unwrap();
        game.board[4].push(card(Suit::Clubs, Rank::Six));
        game.expected_cards += 1;
        assert_eq!(
            game.check_invariants(),
            Err(InvariantViolation::HandSlotOccupied { slot: 4 })
        );
    }

    #[test]
    #[should_panic(expected = "Hand origin 4 must be an empty board slot")]
    fn test_layout_with_hand_over_occupied_slot_panics() {
        let _ = table(|l| {
            l.board[4].push(card(Suit::Clubs, Rank::Six));
            l.hand.push(card(Suit::Clubs, Rank::Five));
            l.hand_origin = Some(4);
        });
    }

    #[test]
    #[should_panic(expected = "unbound hand must be empty")]
    fn test_layout_with_unbound_hand_panics() {
        let _ = table(|l| l.hand.push(card(Suit::Clubs, Rank::Five)));
    }
}
