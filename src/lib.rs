//! # partybot
//!
//! A turn-based social-deduction game engine for chat-platform bots.
//!
//! ## Design Principles
//!
//! 1. **Platform-Agnostic**: No chat SDK types anywhere in the engine.
//!    Platform glue implements [`Messenger`] and feeds in [`ChatCommand`]s.
//!
//! 2. **One Game per Channel**: The dispatcher holds at most one active
//!    session per channel; everything else is stateless catalog entries.
//!
//! 3. **Skins Over Forks**: Rule sets are written once; every player-visible
//!    name, emoji, and command alias comes from a [`GameSkin`].
//!
//! ## Modules
//!
//! - `core`: Player identity, RNG, errors, phrase helpers
//! - `deck`: Card kinds, round decks, per-player hands
//! - `chat`: Command parsing and the outbound `Messenger` trait
//! - `dispatch`: Per-channel session routing, `!help`, `!endgame`
//! - `games`: The game catalog (investigation game, coin flip)

pub mod chat;
pub mod core;
pub mod deck;
pub mod dispatch;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Conjunction, GameRng, Player, PlayerId, UserInputError,
};

pub use crate::deck::{CardKind, Deck, DrawnCards, Hand};

pub use crate::chat::{
    ChannelId, ChatCommand, MessageId, Messenger, Outbound, RecordingMessenger, COMMAND_PREFIX,
};

pub use crate::dispatch::{
    ActiveSession, Dispatcher, GameEntry, SessionStatus, StartOutcome, ENDGAME_KEYWORD,
    HELP_KEYWORD,
};

pub use crate::games::{
    CoinFlipGame, GameSkin, InvestigationGame, InvestigationSession, RolePlan,
};
