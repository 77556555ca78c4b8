//! A one-command coin flip, the smallest game the catalog hosts.
//!
//! `!coin heads` resolves on the spot; a bare `!coin` opens a session that
//! waits for the caller's `!heads` or `!tails`.

use async_trait::async_trait;

use crate::chat::{ChannelId, ChatCommand, Messenger};
use crate::core::GameRng;
use crate::dispatch::{ActiveSession, GameEntry, SessionStatus, StartOutcome};

const KEYWORD: &str = "coin";

/// Catalog entry for coin flips.
pub struct CoinFlipGame {
    rng: GameRng,
}

impl CoinFlipGame {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

fn call_from(keyword: &str) -> Option<bool> {
    if keyword.eq_ignore_ascii_case("heads") {
        Some(true)
    } else if keyword.eq_ignore_ascii_case("tails") {
        Some(false)
    } else {
        None
    }
}

fn flip_text(rng: &mut GameRng, called_heads: bool) -> String {
    let heads = rng.gen_bool(0.5);
    format!(
        "Result: {}. You {}",
        if heads { "heads" } else { "tails" },
        if heads == called_heads { "win!" } else { "lose." },
    )
}

#[async_trait]
impl GameEntry for CoinFlipGame {
    fn command_keyword(&self) -> &str {
        KEYWORD
    }

    async fn describe_rules(&self, channel: ChannelId, messenger: &dyn Messenger) {
        messenger
            .send_to_channel(
                channel,
                "Call the toss with `!coin heads` or `!coin tails`, or `!coin` to call after.",
            )
            .await;
    }

    async fn try_start(
        &mut self,
        command: &ChatCommand,
        messenger: &dyn Messenger,
    ) -> StartOutcome {
        if command.keyword != KEYWORD {
            return StartOutcome::NotMine;
        }

        if let Some(called_heads) = command.args.first().and_then(|arg| call_from(arg)) {
            messenger
                .send_to_channel(command.channel, &flip_text(&mut self.rng, called_heads))
                .await;
            return StartOutcome::Resolved;
        }

        messenger
            .send_to_channel(command.channel, "`!heads` or `!tails`?")
            .await;
        StartOutcome::Started(Box::new(CoinFlipSession {
            rng: self.rng.fork(),
        }))
    }
}

/// Waits for the pending call.
pub struct CoinFlipSession {
    rng: GameRng,
}

#[async_trait]
impl ActiveSession for CoinFlipSession {
    async fn handle_command(
        &mut self,
        command: &ChatCommand,
        messenger: &dyn Messenger,
    ) -> SessionStatus {
        let Some(called_heads) = call_from(&command.keyword) else {
            return SessionStatus::Continue;
        };
        messenger
            .send_to_channel(command.channel, &flip_text(&mut self.rng, called_heads))
            .await;
        SessionStatus::Finished
    }
}
