//! Error taxonomy for command handling.
//!
//! Every rejection is a value, never a panic or an escape past the
//! command-handling boundary: `Display` renders the exact one-line message
//! posted to the channel, and the session always continues (for
//! `UserInputError`) or is simply never created (for `ConfigError`).
//! Transport failures belong to the `Messenger` implementation, not here.

use thiserror::Error;

/// A rejected command during an active session.
///
/// Game state is guaranteed unchanged when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UserInputError {
    /// The acting player is in the roster but it is another player's turn.
    #[error("{mention} it is not your turn yet")]
    NotYourTurn { mention: String },

    /// The acting player is not in the roster at all.
    #[error("{mention}, you are not playing this game")]
    NotPlaying { mention: String },

    /// The command must mention exactly one player.
    #[error("{mention}, you must investigate one `@player`")]
    WrongMentionCount { mention: String },

    /// The mentioned target is the acting player.
    #[error("{mention}, you cannot investigate yourself")]
    SelfTarget { mention: String },

    /// The mentioned target is not in the roster.
    #[error("{mention}, that person is not currently playing in this channel")]
    UnknownTarget { mention: String },

    /// The mentioned target has no face-down cards left this round.
    #[error("{mention}, that player has no face-down cards left this round")]
    NoHiddenCards { mention: String },
}

/// A rejected start command; the session is never constructed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than the minimum mentioned players.
    #[error("{title} needs at least {minimum} @players to start")]
    NotEnoughPlayers { title: String, minimum: usize },

    /// An automated account was mentioned as a player.
    #[error("{mention} is a bot and cannot play")]
    AutomatedPlayer { mention: String },

    /// The requested cultist count leaves no room for the other role.
    #[error("a {player_count}-player game cannot have {requested} {role_label}")]
    TooManyRoles {
        player_count: usize,
        requested: usize,
        role_label: String,
    },

    /// A skin from external config is missing command synonyms.
    #[error("{title} must define at least one start command and one investigate command")]
    IncompleteSkin { title: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_input_messages() {
        let err = UserInputError::NotYourTurn {
            mention: "@alice".to_string(),
        };
        assert_eq!(err.to_string(), "@alice it is not your turn yet");

        let err = UserInputError::SelfTarget {
            mention: "@bob".to_string(),
        };
        assert_eq!(err.to_string(), "@bob, you cannot investigate yourself");
    }

    #[test]
    fn test_config_messages() {
        let err = ConfigError::NotEnoughPlayers {
            title: "__Don't Mess with Cthulhu__".to_string(),
            minimum: 3,
        };
        assert_eq!(
            err.to_string(),
            "__Don't Mess with Cthulhu__ needs at least 3 @players to start"
        );

        let err = ConfigError::TooManyRoles {
            player_count: 4,
            requested: 4,
            role_label: "cultists".to_string(),
        };
        assert_eq!(err.to_string(), "a 4-player game cannot have 4 cultists");
    }
}
