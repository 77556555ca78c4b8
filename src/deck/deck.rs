//! The working deck a round is dealt from.
//!
//! A `Deck` exists only for the duration of one round's dealing. Hands are
//! extracted by swap-delete sampling: uniform draws without replacement with
//! O(1) removal. The order of the remainder is a working-buffer detail and is
//! never user-visible.

use smallvec::SmallVec;

use crate::core::GameRng;

use super::card::CardKind;

/// Cards drawn for one hand. Hands are small (at most `total_rounds + 1`).
pub type DrawnCards = SmallVec<[CardKind; 6]>;

/// A mutable deck consumed destructively while dealing one round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<CardKind>,
}

impl Deck {
    /// Build the deck for one round.
    ///
    /// Composition: exactly one Bad card, `player_count - goods_found` Good
    /// cards, and Blank padding up to `player_count * cards_per_hand`.
    #[must_use]
    pub fn for_round(player_count: usize, goods_found: usize, cards_per_hand: usize) -> Self {
        let total = player_count * cards_per_hand;
        let goods = player_count - goods_found;

        let mut cards = Vec::with_capacity(total);
        cards.push(CardKind::Bad);
        cards.resize(1 + goods, CardKind::Good);
        cards.resize(total, CardKind::Blank);

        Self { cards }
    }

    /// Build a deck from explicit cards (tests, variants).
    #[must_use]
    pub fn from_cards(cards: Vec<CardKind>) -> Self {
        Self { cards }
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Count cards of one kind still in the deck.
    #[must_use]
    pub fn count_of(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|&&c| c == kind).count()
    }

    /// Draw `count` cards uniformly at random without replacement.
    ///
    /// Swap-delete sampling: pick a random index into the live deck, swap the
    /// last live card into that slot, shrink by one. The drawn sequence is a
    /// uniform random permutation-prefix over the deck's multiset.
    ///
    /// `count == 0` returns an empty draw without touching the deck.
    ///
    /// Panics if `count` exceeds the cards remaining.
    pub fn extract_hand(&mut self, count: usize, rng: &mut GameRng) -> DrawnCards {
        assert!(
            count <= self.cards.len(),
            "cannot draw {} cards from a deck of {}",
            count,
            self.cards.len()
        );

        let mut hand = DrawnCards::new();
        for _ in 0..count {
            let index = rng.gen_range_usize(0..self.cards.len());
            let drawn = self.cards.swap_remove(index);
            hand.push(drawn);
        }
        hand
    }
}
