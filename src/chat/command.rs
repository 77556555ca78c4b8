//! Inbound command representation.
//!
//! The platform glue turns a raw chat message into a `ChatCommand`: channel
//! and message ids, the author, the prefix-stripped keyword, remaining
//! arguments, and the platform-resolved mentions. Everything downstream
//! (dispatcher, catalog entries, sessions) works on this type only.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Prefix shared by every bot command.
pub const COMMAND_PREFIX: char = '!';

/// Opaque channel identifier assigned by the chat platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub u64);

impl ChannelId {
    /// Create a new channel ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Channel({})", self.0)
    }
}

/// Opaque message identifier assigned by the chat platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Create a new message ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// A parsed command message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatCommand {
    /// Channel the message arrived in.
    pub channel: ChannelId,

    /// The triggering message (reaction target).
    pub message: MessageId,

    /// Message author.
    pub author: Player,

    /// Command keyword, prefix stripped and lowercased.
    pub keyword: String,

    /// Remaining whitespace-separated tokens, verbatim.
    pub args: Vec<String>,

    /// Players mentioned in the message, in message order.
    pub mentions: Vec<Player>,
}

impl ChatCommand {
    /// Parse a raw message into a command.
    ///
    /// Returns `None` for messages that do not start with [`COMMAND_PREFIX`]
    /// or carry no keyword after it.
    #[must_use]
    pub fn parse(
        channel: ChannelId,
        message: MessageId,
        author: Player,
        content: &str,
        mentions: Vec<Player>,
    ) -> Option<Self> {
        let content = content.trim();
        let rest = content.strip_prefix(COMMAND_PREFIX)?;

        let mut tokens = rest.split_whitespace();
        let keyword = tokens.next()?.to_ascii_lowercase();
        if keyword.is_empty() {
            return None;
        }
        let args = tokens.map(str::to_string).collect();

        Some(Self {
            channel,
            message,
            author,
            keyword,
            args,
            mentions,
        })
    }
}
