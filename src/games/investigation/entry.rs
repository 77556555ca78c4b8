//! Catalog entry that starts investigation games.
//!
//! The entry owns a skin and a master rng; each started session gets a fork
//! of the rng so concurrent games in different channels stay independent.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::chat::{ChannelId, ChatCommand, Messenger};
use crate::core::{ConfigError, GameRng, Player};
use crate::dispatch::{GameEntry, StartOutcome};

use super::session::{InvestigationSession, TOTAL_ROUNDS};
use super::skin::GameSkin;

/// How many bad roles a game gets, and how that is announced.
///
/// With six or more players the count is exact when the player count divides
/// evenly by three, otherwise one extra role is shuffled in so nobody can
/// deduce the exact split. Three-player games get two extra roles to keep
/// the count genuinely uncertain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RolePlan {
    /// Expected number of bad roles.
    pub cultists: usize,
    /// Extra roles mixed into the assignment pool.
    pub extra_roles: usize,
    /// How the count is described in the start announcement.
    pub announced: String,
}

impl RolePlan {
    /// Plan the bad-role count for a given table size.
    #[must_use]
    pub fn for_players(player_count: usize) -> Self {
        let cultists = ((player_count + 2) / 3).max(2);
        if player_count == 3 {
            Self {
                cultists,
                extra_roles: 2,
                announced: "0-2".to_string(),
            }
        } else if player_count % 3 == 0 {
            Self {
                cultists,
                extra_roles: 0,
                announced: cultists.to_string(),
            }
        } else {
            Self {
                cultists,
                extra_roles: 1,
                announced: format!("{} or {}", cultists - 1, cultists),
            }
        }
    }
}

/// The investigation game's slot in the dispatcher's catalog.
pub struct InvestigationGame {
    skin: Arc<GameSkin>,
    rng: GameRng,
}

impl InvestigationGame {
    /// Entry for the cosmic-horror skin.
    #[must_use]
    pub fn cthulhu(rng: GameRng) -> Self {
        Self {
            skin: Arc::new(GameSkin::cthulhu()),
            rng,
        }
    }

    /// Entry for the kitten skin.
    #[must_use]
    pub fn kitten(rng: GameRng) -> Self {
        Self {
            skin: Arc::new(GameSkin::kitten()),
            rng,
        }
    }

    /// Entry for an arbitrary skin, e.g. one deserialized from config.
    ///
    /// Rejects skins without start or investigate synonyms; such an entry
    /// could never match a command.
    pub fn with_skin(skin: GameSkin, rng: GameRng) -> Result<Self, ConfigError> {
        skin.validate()?;
        Ok(Self {
            skin: Arc::new(skin),
            rng,
        })
    }

    /// Mentioned players with duplicates removed, first occurrence wins.
    fn roster(mentions: &[Player]) -> Vec<Player> {
        let mut roster: Vec<Player> = Vec::with_capacity(mentions.len());
        for player in mentions {
            if !roster.iter().any(|p| p.id == player.id) {
                roster.push(player.clone());
            }
        }
        roster
    }
}

#[async_trait]
impl GameEntry for InvestigationGame {
    fn command_keyword(&self) -> &str {
        &self.skin.start_keywords[0]
    }

    async fn describe_rules(&self, channel: ChannelId, messenger: &dyn Messenger) {
        let skin = &self.skin;
        let rules = [
            skin.title.clone(),
            format!(
                "Start a game with `!{} @player1 @player2 ...` (at least three players).",
                skin.start_keywords[0]
            ),
            format!(
                "Each player is secretly {} or {}.",
                skin.good_team.role_with_article(),
                skin.bad_team.role_with_article()
            ),
            format!(
                "On your turn, flip one of another player's face-down cards with {}.",
                skin.investigate_hints()
            ),
            format!(
                "{} win by finding every {} within {} rounds; {} win by the {} being flipped, or by time running out.",
                skin.good_team.text(),
                skin.good.text(),
                TOTAL_ROUNDS,
                skin.bad_team.text(),
                skin.bad.text(),
            ),
        ];
        messenger.send_to_channel(channel, &rules.join("\n")).await;
    }

    async fn try_start(
        &mut self,
        command: &ChatCommand,
        messenger: &dyn Messenger,
    ) -> StartOutcome {
        if !self.skin.is_start_keyword(&command.keyword) {
            return StartOutcome::NotMine;
        }

        let roster = Self::roster(&command.mentions);

        if roster.len() < 3 {
            let rejection = ConfigError::NotEnoughPlayers {
                title: self.skin.title.clone(),
                minimum: 3,
            };
            messenger
                .send_to_channel(command.channel, &rejection.to_string())
                .await;
            return StartOutcome::Resolved;
        }
        if let Some(bot) = roster.iter().find(|p| p.is_automated) {
            let rejection = ConfigError::AutomatedPlayer {
                mention: bot.mention.clone(),
            };
            messenger
                .send_to_channel(command.channel, &rejection.to_string())
                .await;
            return StartOutcome::Resolved;
        }

        let plan = RolePlan::for_players(roster.len());
        let player_count = roster.len();
        let mut session = match InvestigationSession::new(
            command.channel,
            roster,
            plan.cultists,
            plan.extra_roles,
            Arc::clone(&self.skin),
            self.rng.fork(),
        ) {
            Ok(session) => session,
            Err(rejection) => {
                messenger
                    .send_to_channel(command.channel, &rejection.to_string())
                    .await;
                return StartOutcome::Resolved;
            }
        };

        info!(
            channel = %command.channel,
            players = player_count,
            game = self.skin.title.as_str(),
            "starting game"
        );
        messenger
            .send_to_channel(
                command.channel,
                &format!(
                    "Beginning a {}-player game of {} with {} {}.",
                    player_count,
                    self.skin.title,
                    plan.announced,
                    self.skin.bad_team.label.to_lowercase(),
                ),
            )
            .await;
        session.begin(messenger).await;

        StartOutcome::Started(Box::new(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{MessageId, RecordingMessenger};
    use crate::core::PlayerId;

    const CHANNEL: ChannelId = ChannelId::new(7);

    fn mentions(count: usize) -> Vec<Player> {
        (0..count)
            .map(|i| Player::new(PlayerId::new(i as u64 + 1), format!("p{i}")))
            .collect()
    }

    fn start_command(keyword: &str, mentions: Vec<Player>) -> ChatCommand {
        ChatCommand {
            channel: CHANNEL,
            message: MessageId::new(1),
            author: Player::new(PlayerId::new(50), "host"),
            keyword: keyword.to_string(),
            args: mentions.iter().map(|p| p.mention.clone()).collect(),
            mentions,
        }
    }

    #[test]
    fn test_role_plan_three_players() {
        let plan = RolePlan::for_players(3);
        assert_eq!(plan.cultists, 2);
        assert_eq!(plan.extra_roles, 2);
        assert_eq!(plan.announced, "0-2");
    }

    #[test]
    fn test_role_plan_exact_for_multiples_of_three() {
        let plan = RolePlan::for_players(6);
        assert_eq!(plan.cultists, 2);
        assert_eq!(plan.extra_roles, 0);
        assert_eq!(plan.announced, "2");

        let plan = RolePlan::for_players(9);
        assert_eq!(plan.cultists, 3);
        assert_eq!(plan.extra_roles, 0);
        assert_eq!(plan.announced, "3");
    }

    #[test]
    fn test_role_plan_fuzzy_otherwise() {
        let plan = RolePlan::for_players(4);
        assert_eq!(plan.cultists, 2);
        assert_eq!(plan.extra_roles, 1);
        assert_eq!(plan.announced, "1 or 2");

        let plan = RolePlan::for_players(7);
        assert_eq!(plan.cultists, 3);
        assert_eq!(plan.extra_roles, 1);
        assert_eq!(plan.announced, "2 or 3");
    }

    #[tokio::test]
    async fn test_unrelated_keyword_is_not_mine() {
        let messenger = RecordingMessenger::new();
        let mut entry = InvestigationGame::cthulhu(GameRng::new(1));

        let outcome = entry
            .try_start(&start_command("poker", mentions(4)), &messenger)
            .await;

        assert!(outcome.is_not_mine());
        assert!(messenger.events().is_empty());
    }

    #[tokio::test]
    async fn test_misspelled_alias_starts_too() {
        let messenger = RecordingMessenger::new();
        let mut entry = InvestigationGame::cthulhu(GameRng::new(1));

        let outcome = entry
            .try_start(&start_command("cthulu", mentions(4)), &messenger)
            .await;

        assert!(outcome.is_started());
    }

    #[tokio::test]
    async fn test_too_few_players_resolved_with_message() {
        let messenger = RecordingMessenger::new();
        let mut entry = InvestigationGame::cthulhu(GameRng::new(1));

        let outcome = entry
            .try_start(&start_command("cthulhu", mentions(2)), &messenger)
            .await;

        assert!(outcome.is_resolved());
        let text = messenger.last_channel_text(CHANNEL).unwrap();
        assert_eq!(
            text,
            "__Don't Mess with Cthulhu__ needs at least 3 @players to start"
        );
    }

    #[tokio::test]
    async fn test_duplicate_mentions_collapse() {
        let messenger = RecordingMessenger::new();
        let mut entry = InvestigationGame::cthulhu(GameRng::new(1));

        let mut listed = mentions(2);
        listed.push(listed[0].clone());
        let outcome = entry
            .try_start(&start_command("cthulhu", listed), &messenger)
            .await;

        // Two unique players is below the minimum.
        assert!(outcome.is_resolved());
    }

    #[tokio::test]
    async fn test_automated_player_rejected() {
        let messenger = RecordingMessenger::new();
        let mut entry = InvestigationGame::cthulhu(GameRng::new(1));

        let mut listed = mentions(3);
        listed.push(Player::new(PlayerId::new(40), "beepboop").automated());
        let outcome = entry
            .try_start(&start_command("cthulhu", listed), &messenger)
            .await;

        assert!(outcome.is_resolved());
        let text = messenger.last_channel_text(CHANNEL).unwrap();
        assert_eq!(text, "@beepboop is a bot and cannot play");
    }

    #[tokio::test]
    async fn test_start_announces_and_deals() {
        let messenger = RecordingMessenger::new();
        let mut entry = InvestigationGame::cthulhu(GameRng::new(1));
        let listed = mentions(4);

        let outcome = entry
            .try_start(&start_command("cthulhu", listed.clone()), &messenger)
            .await;

        assert!(outcome.is_started());
        let texts = messenger.channel_texts(CHANNEL);
        assert_eq!(
            texts[0],
            "Beginning a 4-player game of __Don't Mess with Cthulhu__ with 1 or 2 cultists."
        );
        assert!(texts[1].contains("Round 1/4"));
        for player in &listed {
            // A role DM plus a hand summary.
            assert_eq!(messenger.direct_texts(player.id).len(), 2);
        }
    }

    #[tokio::test]
    async fn test_kitten_skin_announcement() {
        let messenger = RecordingMessenger::new();
        let mut entry = InvestigationGame::kitten(GameRng::new(1));

        let outcome = entry
            .try_start(&start_command("kittens", mentions(6)), &messenger)
            .await;

        assert!(outcome.is_started());
        let texts = messenger.channel_texts(CHANNEL);
        assert_eq!(
            texts[0],
            "Beginning a 6-player game of __Don't Wake the Kitten__ with 2 tricksters."
        );
    }

    #[tokio::test]
    async fn test_entry_starts_repeated_games() {
        // One catalog entry serves game after game.
        let messenger = RecordingMessenger::new();
        let mut entry = InvestigationGame::cthulhu(GameRng::new(9));

        let first = entry
            .try_start(&start_command("cthulhu", mentions(4)), &messenger)
            .await;
        messenger.clear();
        let second = entry
            .try_start(&start_command("cthulhu", mentions(4)), &messenger)
            .await;

        assert!(first.is_started());
        assert!(second.is_started());
    }

    #[test]
    fn test_with_skin_rejects_commandless_skins() {
        let mut skin = GameSkin::cthulhu();
        skin.start_keywords.clear();
        let err = InvestigationGame::with_skin(skin, GameRng::new(1)).err().unwrap();
        assert!(matches!(err, ConfigError::IncompleteSkin { .. }));

        assert!(InvestigationGame::with_skin(GameSkin::kitten(), GameRng::new(1)).is_ok());
    }

    #[tokio::test]
    async fn test_describe_rules_mentions_commands() {
        let messenger = RecordingMessenger::new();
        let entry = InvestigationGame::cthulhu(GameRng::new(1));

        entry.describe_rules(CHANNEL, &messenger).await;

        let text = messenger.last_channel_text(CHANNEL).unwrap();
        assert!(text.contains("`!cthulhu"));
        assert!(text.contains("at least three players"));
    }
}
