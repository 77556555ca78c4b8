//! Per-channel command routing.
//!
//! Each channel is either idle or owns exactly one active session. The
//! dispatcher forwards commands to the active session, or offers them to the
//! registered games in registration order, and owns the generic `endgame`
//! and `help` commands.

pub mod entry;

pub use entry::{ActiveSession, GameEntry, SessionStatus, StartOutcome};

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::chat::{ChannelId, ChatCommand, Messenger, COMMAND_PREFIX};
use crate::core::{list_phrase, Conjunction};

/// Forces the channel's active session to terminate.
pub const ENDGAME_KEYWORD: &str = "endgame";

/// Lists registered games, or one game's rules.
pub const HELP_KEYWORD: &str = "help";

/// Routes commands to at most one active session per channel.
///
/// Commands are processed one at a time; every outbound send completes before
/// the next command is accepted, so sessions need no internal locking.
pub struct Dispatcher {
    messenger: Arc<dyn Messenger>,
    entries: Vec<Box<dyn GameEntry>>,
    active: FxHashMap<ChannelId, Box<dyn ActiveSession>>,
}

impl Dispatcher {
    /// Create a dispatcher with no registered games.
    #[must_use]
    pub fn new(messenger: Arc<dyn Messenger>) -> Self {
        Self {
            messenger,
            entries: Vec::new(),
            active: FxHashMap::default(),
        }
    }

    /// Register a game. Offer order follows registration order.
    pub fn register(&mut self, entry: Box<dyn GameEntry>) {
        info!(keyword = entry.command_keyword(), "registered game");
        self.entries.push(entry);
    }

    /// True if a session is running in the channel.
    #[must_use]
    pub fn is_active(&self, channel: ChannelId) -> bool {
        self.active.contains_key(&channel)
    }

    /// Route one inbound command.
    pub async fn dispatch(&mut self, command: &ChatCommand) {
        if command.keyword == HELP_KEYWORD {
            self.help(command).await;
            return;
        }

        if self.active.contains_key(&command.channel) {
            self.forward(command).await;
        } else {
            self.offer(command).await;
        }
    }

    /// Forward a command to the channel's active session.
    async fn forward(&mut self, command: &ChatCommand) {
        let finished = match self.active.get_mut(&command.channel) {
            Some(_) if command.keyword == ENDGAME_KEYWORD => true,
            Some(session) => matches!(
                session.handle_command(command, self.messenger.as_ref()).await,
                SessionStatus::Finished
            ),
            None => return,
        };

        if finished {
            // Remove before announcing so no further command can reach it.
            self.active.remove(&command.channel);
            self.messenger
                .send_to_channel(command.channel, "Game concluded.")
                .await;
            info!(channel = %command.channel, "session ended");
        }
    }

    /// Offer a command in an idle channel to each registered game in order.
    async fn offer(&mut self, command: &ChatCommand) {
        let messenger = Arc::clone(&self.messenger);

        for entry in self.entries.iter_mut() {
            match entry.try_start(command, messenger.as_ref()).await {
                StartOutcome::NotMine => continue,
                StartOutcome::Resolved => {
                    debug!(
                        channel = %command.channel,
                        keyword = command.keyword,
                        "command resolved without session"
                    );
                    return;
                }
                StartOutcome::Started(session) => {
                    info!(
                        channel = %command.channel,
                        keyword = command.keyword,
                        "session started"
                    );
                    self.active.insert(command.channel, session);
                    return;
                }
            }
        }

        debug!(
            channel = %command.channel,
            keyword = command.keyword,
            "no game claimed command"
        );
    }

    /// `!help` lists games; `!help <game>` posts that game's rules.
    async fn help(&self, command: &ChatCommand) {
        if let Some(arg) = command.args.first() {
            let wanted = arg
                .trim_start_matches(COMMAND_PREFIX)
                .to_ascii_lowercase();
            match self
                .entries
                .iter()
                .find(|e| e.command_keyword() == wanted)
            {
                Some(entry) => {
                    entry
                        .describe_rules(command.channel, self.messenger.as_ref())
                        .await;
                }
                None => {
                    self.messenger
                        .send_to_channel(
                            command.channel,
                            &format!("No game answers to `{COMMAND_PREFIX}{wanted}`"),
                        )
                        .await;
                }
            }
            return;
        }

        let names: Vec<String> = self
            .entries
            .iter()
            .map(|e| format!("`{}{}`", COMMAND_PREFIX, e.command_keyword()))
            .collect();
        let text = if names.is_empty() {
            "No games are registered".to_string()
        } else {
            format!(
                "Available games: {}. Use `{}{} <game>` for rules",
                list_phrase(&names, Conjunction::And),
                COMMAND_PREFIX,
                HELP_KEYWORD
            )
        };
        self.messenger.send_to_channel(command.channel, &text).await;
    }
}
