//! Grammatical list joining for user-facing messages.
//!
//! Turns `["A", "B", "C"]` into `"A, B, and C"` (or `"A, B, or C"`).
//! Used for private hand summaries and command hints.

use serde::{Deserialize, Serialize};

/// Conjunction used to join the final item of a list phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    /// The English word for this conjunction.
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Conjunction::And => "and",
            Conjunction::Or => "or",
        }
    }
}

/// Join items into an English list phrase with an Oxford comma.
///
/// - 0 items: empty string (callers normally guarantee non-empty input)
/// - 1 item: the item itself
/// - 2 items: `"A and B"`
/// - 3+ items: `"A, B, and C"`
///
/// The input slice is never mutated.
///
/// ```
/// use partybot::core::{list_phrase, Conjunction};
///
/// let items = ["`!to`".to_string(), "`!pass`".to_string(), "`!investigate`".to_string()];
/// assert_eq!(list_phrase(&items, Conjunction::Or), "`!to`, `!pass`, or `!investigate`");
/// ```
#[must_use]
pub fn list_phrase(items: &[String], conjunction: Conjunction) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} {} {}", first, conjunction.word(), second),
        [rest @ .., last] => {
            format!("{}, {} {}", rest.join(", "), conjunction.word(), last)
        }
    }
}
