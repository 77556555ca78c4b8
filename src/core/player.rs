//! Player identity as seen by the game engine.
//!
//! ## PlayerId
//!
//! Opaque, platform-assigned player identifier. The engine never interprets
//! it beyond equality.
//!
//! ## Player
//!
//! A cheap copy of the platform's view of a user: display handle, mention
//! string, and whether the account is automated. The platform owns the real
//! user object; sessions only keep these copies.

use serde::{Deserialize, Serialize};

/// Opaque player identifier assigned by the chat platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Engine-side view of a chat platform user.
///
/// ## Example
///
/// ```
/// use partybot::core::{Player, PlayerId};
///
/// let alice = Player::new(PlayerId::new(1), "alice");
/// assert_eq!(alice.mention, "@alice");
/// assert!(!alice.is_automated);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable platform identity.
    pub id: PlayerId,

    /// Display handle (no mention decoration).
    pub handle: String,

    /// Mention string as the platform renders it (e.g. `@alice`).
    pub mention: String,

    /// True for bot accounts; they are rejected as game players.
    pub is_automated: bool,
}

impl Player {
    /// Create a player with the default `@handle` mention string.
    pub fn new(id: PlayerId, handle: impl Into<String>) -> Self {
        let handle = handle.into();
        let mention = format!("@{handle}");
        Self {
            id,
            handle,
            mention,
            is_automated: false,
        }
    }

    /// Mark this player as an automated account.
    #[must_use]
    pub fn automated(mut self) -> Self {
        self.is_automated = true;
        self
    }

    /// Override the mention string.
    #[must_use]
    pub fn with_mention(mut self, mention: impl Into<String>) -> Self {
        self.mention = mention.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let id = PlayerId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Player(7)");
    }

    #[test]
    fn test_player_defaults() {
        let player = Player::new(PlayerId::new(1), "alice");
        assert_eq!(player.handle, "alice");
        assert_eq!(player.mention, "@alice");
        assert!(!player.is_automated);
    }

    #[test]
    fn test_player_builders() {
        let bot = Player::new(PlayerId::new(2), "dealer")
            .automated()
            .with_mention("<@2>");

        assert!(bot.is_automated);
        assert_eq!(bot.mention, "<@2>");
        assert_eq!(bot.handle, "dealer");
    }

    #[test]
    fn test_player_serde() {
        let player = Player::new(PlayerId::new(3), "carol");
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, back);
    }
}
