//! The outbound messaging boundary.
//!
//! The engine never talks to a chat platform directly: it is handed a
//! [`Messenger`] at construction and awaits each send in sequence, which is
//! the only suspension point in command processing. Transport failures and
//! retries are the implementation's concern; from the engine's side every
//! call succeeds.

use async_trait::async_trait;

use crate::core::Player;

use super::command::{ChannelId, MessageId};

/// Outbound messaging sink injected into the dispatcher and sessions.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Post a message to a channel, returning its id for later deletion.
    async fn send_to_channel(&self, channel: ChannelId, text: &str) -> MessageId;

    /// Send a private message to one player.
    async fn send_direct(&self, player: &Player, text: &str);

    /// Attach an emoji reaction to an existing message.
    async fn react(&self, message: MessageId, emoji: &str);

    /// Delete a previously posted channel message.
    async fn delete_message(&self, channel: ChannelId, message: MessageId);
}
