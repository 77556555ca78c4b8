//! Deck and hand bookkeeping: card kinds, round decks, hidden-prefix hands.

pub mod card;
#[allow(clippy::module_inception)]
pub mod deck;
pub mod hand;

pub use card::CardKind;
pub use deck::{Deck, DrawnCards};
pub use hand::Hand;
