//! The chat platform boundary: parsed commands in, messenger trait out.

pub mod command;
pub mod messenger;
pub mod recording;

pub use command::{ChannelId, ChatCommand, MessageId, COMMAND_PREFIX};
pub use messenger::Messenger;
pub use recording::{Outbound, RecordingMessenger};
