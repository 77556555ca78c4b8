//! Capability traits games implement to plug into the dispatcher.
//!
//! A registered game is a [`GameEntry`]: it can describe its rules and decide
//! whether a command in an idle channel starts one of its sessions. A running
//! game is an [`ActiveSession`]: it resolves one command at a time and says
//! whether it keeps going.

use async_trait::async_trait;

use crate::chat::{ChannelId, ChatCommand, Messenger};

/// Whether a session keeps running after handling a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// Session stays active; more commands expected.
    Continue,
    /// Session is over; the dispatcher removes it.
    Finished,
}

/// Result of offering a command to a catalog entry.
pub enum StartOutcome {
    /// The keyword is not one of this game's start commands.
    NotMine,
    /// The command was handled in one shot; no session was created.
    /// Covers immediately-resolved games and rejected start attempts.
    Resolved,
    /// A new session was created and takes over the channel.
    Started(Box<dyn ActiveSession>),
}

impl StartOutcome {
    /// True if the entry declined the command.
    #[must_use]
    pub fn is_not_mine(&self) -> bool {
        matches!(self, StartOutcome::NotMine)
    }

    /// True if the command was handled without creating a session.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, StartOutcome::Resolved)
    }

    /// True if a session was created.
    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, StartOutcome::Started(_))
    }
}

impl std::fmt::Debug for StartOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartOutcome::NotMine => write!(f, "NotMine"),
            StartOutcome::Resolved => write!(f, "Resolved"),
            StartOutcome::Started(_) => write!(f, "Started(..)"),
        }
    }
}

/// One in-progress game, exclusively owned by the dispatcher's channel table.
#[async_trait]
pub trait ActiveSession: Send {
    /// Resolve one command.
    ///
    /// Commands the session does not recognize must leave state unchanged
    /// and return [`SessionStatus::Continue`]; rejections are surfaced as
    /// channel messages, never as panics or errors crossing this boundary.
    async fn handle_command(
        &mut self,
        command: &ChatCommand,
        messenger: &dyn Messenger,
    ) -> SessionStatus;
}

/// A game type registered with the dispatcher.
#[async_trait]
pub trait GameEntry: Send {
    /// The primary start keyword, used by help listings.
    fn command_keyword(&self) -> &str;

    /// Post this game's rules to a channel.
    async fn describe_rules(&self, channel: ChannelId, messenger: &dyn Messenger);

    /// Offer a command observed in an idle channel to this game.
    async fn try_start(
        &mut self,
        command: &ChatCommand,
        messenger: &dyn Messenger,
    ) -> StartOutcome;
}
