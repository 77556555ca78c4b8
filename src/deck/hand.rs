//! A player's hand for the current round.
//!
//! A hand is an ordered run of cards plus a hidden cursor: the first `hidden`
//! cards are face down, the rest have been revealed. Reveals pop off the back
//! of the hidden prefix, so the rendered row keeps its shape: a run of hidden
//! glyphs followed by the revealed cards in place.

use super::card::CardKind;
use super::deck::DrawnCards;

/// Per-player cards with a hidden-prefix cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    cards: DrawnCards,
    hidden: usize,
}

impl Hand {
    /// Create a hand with every card hidden.
    #[must_use]
    pub fn new(cards: DrawnCards) -> Self {
        let hidden = cards.len();
        Self { cards, hidden }
    }

    /// Number of cards still hidden. Always in `0..=len`.
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.hidden
    }

    /// Total cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True for an empty hand.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, hidden prefix first.
    #[must_use]
    pub fn cards(&self) -> &[CardKind] {
        &self.cards
    }

    /// The revealed suffix, in original deal order.
    #[must_use]
    pub fn revealed(&self) -> &[CardKind] {
        &self.cards[self.hidden..]
    }

    /// The card the next reveal will turn over, if any cards remain hidden.
    #[must_use]
    pub fn peek_next(&self) -> Option<CardKind> {
        if self.hidden == 0 {
            None
        } else {
            Some(self.cards[self.hidden - 1])
        }
    }

    /// Reveal the card at the hidden cursor and decrement the cursor.
    ///
    /// Returns `None` if the whole hand is already revealed.
    pub fn reveal_next(&mut self) -> Option<CardKind> {
        if self.hidden == 0 {
            return None;
        }
        self.hidden -= 1;
        Some(self.cards[self.hidden])
    }

    /// Count cards of one kind across the whole hand.
    #[must_use]
    pub fn count_of(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|&&c| c == kind).count()
    }
}
