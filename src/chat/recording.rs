//! In-memory messenger that records outbound traffic.
//!
//! Used throughout the test suites; also handy as a local dry-run sink when
//! wiring a new platform adapter.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::{Player, PlayerId};

use super::command::{ChannelId, MessageId};
use super::messenger::Messenger;

/// One recorded outbound action, in send order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outbound {
    Channel {
        channel: ChannelId,
        message: MessageId,
        text: String,
    },
    Direct {
        player: PlayerId,
        text: String,
    },
    Reaction {
        message: MessageId,
        emoji: String,
    },
    Deletion {
        channel: ChannelId,
        message: MessageId,
    },
}

#[derive(Debug, Default)]
struct Recording {
    next_message: u64,
    events: Vec<Outbound>,
}

/// A [`Messenger`] that stores everything it is asked to send.
///
/// Message ids are allocated sequentially starting at 1.
#[derive(Debug, Default)]
pub struct RecordingMessenger {
    state: Mutex<Recording>,
}

impl RecordingMessenger {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in send order.
    #[must_use]
    pub fn events(&self) -> Vec<Outbound> {
        self.state.lock().unwrap().events.clone()
    }

    /// Texts posted to one channel, in send order (deleted ones included).
    #[must_use]
    pub fn channel_texts(&self, channel: ChannelId) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .events
            .iter()
            .filter_map(|e| match e {
                Outbound::Channel { channel: c, text, .. } if *c == channel => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recent text posted to one channel.
    #[must_use]
    pub fn last_channel_text(&self, channel: ChannelId) -> Option<String> {
        self.channel_texts(channel).pop()
    }

    /// Private messages sent to one player, in send order.
    #[must_use]
    pub fn direct_texts(&self, player: PlayerId) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .events
            .iter()
            .filter_map(|e| match e {
                Outbound::Direct { player: p, text } if *p == player => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Emoji reactions recorded so far.
    #[must_use]
    pub fn reactions(&self) -> Vec<(MessageId, String)> {
        self.state
            .lock()
            .unwrap()
            .events
            .iter()
            .filter_map(|e| match e {
                Outbound::Reaction { message, emoji } => Some((*message, emoji.clone())),
                _ => None,
            })
            .collect()
    }

    /// Channel messages deleted so far.
    #[must_use]
    pub fn deletions(&self) -> Vec<(ChannelId, MessageId)> {
        self.state
            .lock()
            .unwrap()
            .events
            .iter()
            .filter_map(|e| match e {
                Outbound::Deletion { channel, message } => Some((*channel, *message)),
                _ => None,
            })
            .collect()
    }

    /// Drop all recorded events (id allocation continues).
    pub fn clear(&self) {
        self.state.lock().unwrap().events.clear();
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_to_channel(&self, channel: ChannelId, text: &str) -> MessageId {
        let mut state = self.state.lock().unwrap();
        state.next_message += 1;
        let message = MessageId::new(state.next_message);
        state.events.push(Outbound::Channel {
            channel,
            message,
            text: text.to_string(),
        });
        message
    }

    async fn send_direct(&self, player: &Player, text: &str) {
        self.state.lock().unwrap().events.push(Outbound::Direct {
            player: player.id,
            text: text.to_string(),
        });
    }

    async fn react(&self, message: MessageId, emoji: &str) {
        self.state.lock().unwrap().events.push(Outbound::Reaction {
            message,
            emoji: emoji.to_string(),
        });
    }

    async fn delete_message(&self, channel: ChannelId, message: MessageId) {
        self.state
            .lock()
            .unwrap()
            .events
            .push(Outbound::Deletion { channel, message });
    }
}
