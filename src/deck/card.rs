//! Card kinds.
//!
//! The engine only distinguishes win-relevant, loss-relevant, and neutral
//! cards. Labels and emoji are cosmetic and live in the game skin, so kinds
//! are compared by value, never by identity.

use serde::{Deserialize, Serialize};

/// The three card kinds of the investigation deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Win-condition card: the investigators need every one in circulation.
    Good,
    /// Loss-condition card: exactly one exists in the whole deck pool.
    Bad,
    /// Neutral padding.
    Blank,
}

impl CardKind {
    /// Display/summary ordering: Good, Bad, Blank.
    pub const SUMMARY_ORDER: [CardKind; 3] = [CardKind::Good, CardKind::Bad, CardKind::Blank];
}
