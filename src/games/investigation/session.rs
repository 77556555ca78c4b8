//! The investigation game session state machine.
//!
//! One session owns a channel's game from start to finish: the fixed role
//! partition, per-round hands, turn progression, and win detection. All
//! mutation happens inside `handle_command`; rejected commands leave state
//! untouched and keep the session alive.
//!
//! ## Round lifecycle
//!
//! Hands shrink by one card each round (`total_rounds + 2 - current_round`
//! cards per hand). Every round's deck holds exactly one Bad card and as many
//! Good cards as are still unfound, padded with Blanks. Revealing the Bad
//! card ends the game for the cultists; revealing the last Good card ends it
//! for the investigators; running out of rounds ends it for the cultists.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use async_trait::async_trait;

use crate::chat::{ChannelId, ChatCommand, MessageId, Messenger};
use crate::core::{list_phrase, ConfigError, Conjunction, GameRng, Player, PlayerId, UserInputError};
use crate::deck::{CardKind, Deck, Hand};
use crate::dispatch::{ActiveSession, SessionStatus};

use super::skin::GameSkin;

/// Default number of rounds in a game.
pub const TOTAL_ROUNDS: u32 = 4;

/// One in-progress investigation game, scoped to a channel.
#[derive(Debug)]
pub struct InvestigationSession {
    channel: ChannelId,
    skin: Arc<GameSkin>,
    players: Vec<Player>,
    investigators: Vec<Player>,
    cultists: Vec<Player>,
    hands: FxHashMap<PlayerId, Hand>,
    /// Who investigates next; `None` once the game is decided.
    next_player: Option<PlayerId>,
    goods_found: usize,
    round_progress: usize,
    current_round: u32,
    total_rounds: u32,
    status_message: Option<MessageId>,
    rng: GameRng,
}

impl InvestigationSession {
    /// Create a session and compute the fixed role partition.
    ///
    /// Each player in input order becomes a cultist with probability
    /// `remaining_cultists / remaining_pool`, where the pool starts at
    /// `player_count + extra_roles` and shrinks by one per player. The
    /// expected cultist count is `cultist_count`; the actual count lands in
    /// `[cultist_count - extra_roles, cultist_count]`, so callers must
    /// announce it as a range whenever `extra_roles > 0`.
    ///
    /// The starting player is chosen uniformly at random here; later turns
    /// pass to whoever was just investigated.
    pub fn new(
        channel: ChannelId,
        players: Vec<Player>,
        cultist_count: usize,
        extra_roles: usize,
        skin: Arc<GameSkin>,
        mut rng: GameRng,
    ) -> Result<Self, ConfigError> {
        if players.len() < 3 {
            return Err(ConfigError::NotEnoughPlayers {
                title: skin.title.clone(),
                minimum: 3,
            });
        }
        if cultist_count >= players.len() {
            return Err(ConfigError::TooManyRoles {
                player_count: players.len(),
                requested: cultist_count,
                role_label: skin.bad_team.label.to_lowercase(),
            });
        }

        let mut investigators = Vec::new();
        let mut cultists = Vec::new();
        let mut remaining_cultists = cultist_count;
        let mut pool = players.len() + extra_roles;
        for player in &players {
            // With extra_roles == 0 the probability reaches 1 once the pool
            // shrinks to the remaining cultists, forcing an exact count.
            let probability = (remaining_cultists as f64 / pool as f64).min(1.0);
            if rng.gen_bool(probability) {
                cultists.push(player.clone());
                remaining_cultists = remaining_cultists.saturating_sub(1);
            } else {
                investigators.push(player.clone());
            }
            pool -= 1;
        }

        let start = rng
            .choose(&players)
            .map(|p| p.id)
            .ok_or(ConfigError::NotEnoughPlayers {
                title: skin.title.clone(),
                minimum: 3,
            })?;

        Ok(Self {
            channel,
            skin,
            players,
            investigators,
            cultists,
            hands: FxHashMap::default(),
            next_player: Some(start),
            goods_found: 0,
            round_progress: 0,
            current_round: 0,
            total_rounds: TOTAL_ROUNDS,
            status_message: None,
            rng,
        })
    }

    /// Announce roles privately and deal the first round.
    pub async fn begin(&mut self, messenger: &dyn Messenger) {
        for investigator in &self.investigators {
            messenger
                .send_direct(
                    investigator,
                    &format!(
                        "{}: You are {}",
                        self.skin.title,
                        self.skin.good_team.role_with_article()
                    ),
                )
                .await;
        }
        for cultist in &self.cultists {
            messenger
                .send_direct(
                    cultist,
                    &format!(
                        "{}: You are {}",
                        self.skin.title,
                        self.skin.bad_team.role_with_article()
                    ),
                )
                .await;
        }
        self.advance_round(messenger).await;
    }

    /// The channel this session owns.
    #[must_use]
    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    /// Roster, in start-command order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players assigned the good team.
    #[must_use]
    pub fn investigators(&self) -> &[Player] {
        &self.investigators
    }

    /// Players assigned the bad team.
    #[must_use]
    pub fn cultists(&self) -> &[Player] {
        &self.cultists
    }

    /// Whose turn it is, if the game is still running.
    #[must_use]
    pub fn next_player(&self) -> Option<PlayerId> {
        self.next_player
    }

    /// Current round, `1..=total_rounds` once begun.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Cards flipped so far this round, `0..=player_count`.
    #[must_use]
    pub fn round_progress(&self) -> usize {
        self.round_progress
    }

    /// Good cards found across all rounds.
    #[must_use]
    pub fn goods_found(&self) -> usize {
        self.goods_found
    }

    /// A player's current hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&Hand> {
        self.hands.get(&player)
    }

    /// Deal the next round: fresh deck, fresh hands, private summaries.
    async fn advance_round(&mut self, messenger: &dyn Messenger) {
        self.current_round += 1;
        self.round_progress = 0;
        // The previous round's concluded status stays in the transcript.
        self.status_message = None;

        let player_count = self.players.len();
        let cards_per_hand = (self.total_rounds + 2 - self.current_round) as usize;
        let mut deck = Deck::for_round(player_count, self.goods_found, cards_per_hand);
        debug!(
            round = self.current_round,
            cards_per_hand, "dealing round"
        );

        for player in self.players.clone() {
            let hand = Hand::new(deck.extract_hand(cards_per_hand, &mut self.rng));

            let mut summary = Vec::new();
            for kind in CardKind::SUMMARY_ORDER {
                let count = hand.count_of(kind);
                if count > 0 {
                    summary.push(format!("**{}**x {}", count, self.skin.face(kind).text()));
                }
            }
            messenger
                .send_direct(
                    &player,
                    &format!(
                        "Round {}/{}: You have {}",
                        self.current_round,
                        self.total_rounds,
                        list_phrase(&summary, Conjunction::And)
                    ),
                )
                .await;

            self.hands.insert(player.id, hand);
        }

        self.post_game_state(None, messenger).await;
    }

    /// Delete-and-repost the public status message.
    async fn post_game_state(&mut self, last_found: Option<CardKind>, messenger: &dyn Messenger) {
        let player_count = self.players.len();
        let round_over = self.round_progress == player_count;

        let mut state = vec![format!(
            "Round {}/{}{}: {}/{} cards flipped, **{}**x {} found total, **{}** left",
            self.current_round,
            self.total_rounds,
            if round_over { " concluded" } else { "" },
            self.round_progress,
            player_count,
            self.goods_found,
            self.skin.good_plural_text(),
            player_count - self.goods_found,
        )];

        if let Some(kind) = last_found {
            state.insert(
                0,
                format!("You found {}\n", self.skin.face(kind).text_with_article()),
            );
        }

        if !round_over {
            if let Some(next) = self.roster_player(self.next_player) {
                state.push(format!(
                    "{}, you investigate next. To investigate a player, use {}",
                    next.mention,
                    self.skin.investigate_hints()
                ));
            }
        }

        for player in &self.players {
            if let Some(hand) = self.hands.get(&player.id) {
                let mut row: Vec<String> = vec![self.skin.hidden_glyph.clone(); hand.hidden()];
                row.push(" ".to_string());
                row.extend(hand.revealed().iter().map(|&c| self.skin.face(c).emoji.clone()));
                row.push(": ".to_string());
                row.push(player.mention.clone());
                state.push(row.join(" "));
            }
        }

        if let Some(prior) = self.status_message.take() {
            messenger.delete_message(self.channel, prior).await;
        }
        self.status_message = Some(
            messenger
                .send_to_channel(self.channel, &state.join("\n"))
                .await,
        );
    }

    /// Final status plus winner declaration and team rosters.
    async fn post_end_game_state(
        &mut self,
        revealed: CardKind,
        good_team_won: bool,
        messenger: &dyn Messenger,
    ) {
        self.next_player = None;
        self.post_game_state(Some(revealed), messenger).await;

        let good = self.skin.good_team.text();
        let bad = self.skin.bad_team.text();
        let winner = if good_team_won { &good } else { &bad };
        let state = [
            format!("Game over. {winner} win!"),
            format!("{}: {}", good, Self::mention_list(&self.investigators)),
            format!("{}: {}", bad, Self::mention_list(&self.cultists)),
        ];
        messenger
            .send_to_channel(self.channel, &state.join("\n"))
            .await;
        info!(
            channel = %self.channel,
            round = self.current_round,
            good_team_won,
            "game over"
        );
    }

    fn mention_list(players: &[Player]) -> String {
        players
            .iter()
            .map(|p| p.mention.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn roster_player(&self, id: Option<PlayerId>) -> Option<&Player> {
        let id = id?;
        self.players.iter().find(|p| p.id == id)
    }

    /// Validate a turn command without touching state.
    fn validate_turn(&self, command: &ChatCommand) -> Result<Player, UserInputError> {
        let author = &command.author;

        if self.next_player != Some(author.id) {
            return if self.players.iter().any(|p| p.id == author.id) {
                Err(UserInputError::NotYourTurn {
                    mention: author.mention.clone(),
                })
            } else {
                Err(UserInputError::NotPlaying {
                    mention: author.mention.clone(),
                })
            };
        }

        if command.mentions.len() != 1 {
            return Err(UserInputError::WrongMentionCount {
                mention: author.mention.clone(),
            });
        }
        let mentioned = &command.mentions[0];

        if mentioned.id == author.id {
            return Err(UserInputError::SelfTarget {
                mention: author.mention.clone(),
            });
        }

        let target = self
            .players
            .iter()
            .find(|p| p.id == mentioned.id)
            .ok_or_else(|| UserInputError::UnknownTarget {
                mention: author.mention.clone(),
            })?;

        let exhausted = self
            .hands
            .get(&target.id)
            .map_or(true, |hand| hand.hidden() == 0);
        if exhausted {
            return Err(UserInputError::NoHiddenCards {
                mention: author.mention.clone(),
            });
        }

        Ok(target.clone())
    }

    /// Resolve one investigate command end to end.
    async fn resolve_turn(
        &mut self,
        command: &ChatCommand,
        messenger: &dyn Messenger,
    ) -> SessionStatus {
        // Unrelated chatter keeps the game going.
        if !self.skin.is_investigate_keyword(&command.keyword) {
            return SessionStatus::Continue;
        }

        let target = match self.validate_turn(command) {
            Ok(target) => target,
            Err(rejection) => {
                messenger
                    .send_to_channel(self.channel, &rejection.to_string())
                    .await;
                return SessionStatus::Continue;
            }
        };

        // Reveal before touching turn state: a command that cannot flip a
        // card must leave the session exactly as it found it.
        let Some(revealed) = self
            .hands
            .get_mut(&target.id)
            .and_then(Hand::reveal_next)
        else {
            debug_assert!(false, "validated target must have a hidden card");
            return SessionStatus::Continue;
        };
        self.next_player = Some(target.id);
        self.round_progress += 1;
        if revealed == CardKind::Good {
            self.goods_found += 1;
        }
        messenger
            .react(command.message, &self.skin.face(revealed).emoji)
            .await;

        let player_count = self.players.len();
        if revealed == CardKind::Bad {
            // Bad card beats everything, including a simultaneous last Good.
            self.post_end_game_state(revealed, false, messenger).await;
            SessionStatus::Finished
        } else if self.goods_found == player_count {
            self.post_end_game_state(revealed, true, messenger).await;
            SessionStatus::Finished
        } else if self.round_progress < player_count {
            self.post_game_state(Some(revealed), messenger).await;
            SessionStatus::Continue
        } else if self.current_round < self.total_rounds {
            self.post_game_state(Some(revealed), messenger).await;
            self.advance_round(messenger).await;
            SessionStatus::Continue
        } else {
            // Out of rounds with Good cards still hidden.
            self.post_end_game_state(revealed, false, messenger).await;
            SessionStatus::Finished
        }
    }
}

#[async_trait]
impl ActiveSession for InvestigationSession {
    async fn handle_command(
        &mut self,
        command: &ChatCommand,
        messenger: &dyn Messenger,
    ) -> SessionStatus {
        self.resolve_turn(command, messenger).await
    }
}
