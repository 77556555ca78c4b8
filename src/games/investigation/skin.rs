//! Cosmetic configuration for the investigation game.
//!
//! All labels, emoji, and command synonyms live here, supplied at
//! construction time. Reskinning the game is creating another `GameSkin`,
//! never mutating a shared template. Skins serialize, so a composition root
//! can also load custom ones from a config file.

use serde::{Deserialize, Serialize};

use crate::chat::COMMAND_PREFIX;
use crate::core::{list_phrase, ConfigError, Conjunction};
use crate::deck::CardKind;

/// Rendering for one card kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    /// Emoji shown in status rows and reactions.
    pub emoji: String,
    /// Bold label shown in summaries.
    pub label: String,
    /// Indefinite article for "You found …"; `None` for proper names.
    pub article: Option<String>,
}

impl CardFace {
    /// Create a card face.
    pub fn new(emoji: impl Into<String>, label: impl Into<String>, article: Option<&str>) -> Self {
        Self {
            emoji: emoji.into(),
            label: label.into(),
            article: article.map(str::to_string),
        }
    }

    /// `"🟨 **Elder Sign**"`
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} **{}**", self.emoji, self.label)
    }

    /// `"an 🟨 **Elder Sign**"`, or just the text when no article applies.
    #[must_use]
    pub fn text_with_article(&self) -> String {
        match &self.article {
            Some(article) => format!("{article} {}", self.text()),
            None => self.text(),
        }
    }
}

/// Rendering for one team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamFace {
    /// Team emoji.
    pub emoji: String,
    /// Plural team name ("Investigators").
    pub label: String,
    /// Singular role name ("Investigator").
    pub role: String,
    /// Indefinite article for the role name.
    pub article: String,
}

impl TeamFace {
    /// Create a team face.
    pub fn new(
        emoji: impl Into<String>,
        label: impl Into<String>,
        role: impl Into<String>,
        article: impl Into<String>,
    ) -> Self {
        Self {
            emoji: emoji.into(),
            label: label.into(),
            role: role.into(),
            article: article.into(),
        }
    }

    /// `":blue_square: **Investigators**"`
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} **{}**", self.emoji, self.label)
    }

    /// `"an :blue_square: **Investigator**"` for role announcement DMs.
    #[must_use]
    pub fn role_with_article(&self) -> String {
        format!("{} {} **{}**", self.article, self.emoji, self.role)
    }
}

/// Full cosmetic configuration for one investigation variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSkin {
    /// Decorated game title.
    pub title: String,
    /// Keywords that start the game (first one is canonical).
    pub start_keywords: Vec<String>,
    /// Keywords that resolve a turn.
    pub investigate_keywords: Vec<String>,
    /// Glyph for a face-down card in status rows.
    pub hidden_glyph: String,
    /// Face for [`CardKind::Good`].
    pub good: CardFace,
    /// Face for [`CardKind::Bad`].
    pub bad: CardFace,
    /// Face for [`CardKind::Blank`].
    pub blank: CardFace,
    /// Plural label for the good card ("Elder Signs").
    pub good_plural: String,
    /// The team hunting the good cards.
    pub good_team: TeamFace,
    /// The opposing team.
    pub bad_team: TeamFace,
}

impl GameSkin {
    /// The classic variant.
    #[must_use]
    pub fn cthulhu() -> Self {
        Self {
            title: "__Don't Mess with Cthulhu__".to_string(),
            start_keywords: vec!["cthulhu".to_string(), "cthulu".to_string()],
            investigate_keywords: vec![
                "to".to_string(),
                "pass".to_string(),
                "investigate".to_string(),
            ],
            hidden_glyph: ":purple_square:".to_string(),
            good: CardFace::new("🟨", "Elder Sign", Some("an")),
            bad: CardFace::new("🟩", "Cthulhu", None),
            blank: CardFace::new("🟦", "blank card", Some("a")),
            good_plural: "Elder Signs".to_string(),
            good_team: TeamFace::new(":blue_square:", "Investigators", "Investigator", "an"),
            bad_team: TeamFace::new(":red_square:", "Cultists", "Cultist", "a"),
        }
    }

    /// The family-friendly reskin. Same engine, different dressing.
    #[must_use]
    pub fn kitten() -> Self {
        Self {
            title: "__Don't Wake the Kitten__".to_string(),
            start_keywords: vec!["kitten".to_string(), "kittens".to_string()],
            investigate_keywords: vec!["to".to_string(), "pass".to_string(), "pet".to_string()],
            hidden_glyph: ":brown_square:".to_string(),
            good: CardFace::new("🧶", "Ball of Yarn", Some("a")),
            bad: CardFace::new("🐈", "Kitten", Some("the")),
            blank: CardFace::new("📦", "empty box", Some("an")),
            good_plural: "Balls of Yarn".to_string(),
            good_team: TeamFace::new(":green_square:", "Caretakers", "Caretaker", "a"),
            bad_team: TeamFace::new(":orange_square:", "Tricksters", "Trickster", "a"),
        }
    }

    /// Check that the skin can actually be played.
    ///
    /// Built-in skins always pass; skins deserialized from external config
    /// must be validated before a catalog entry is built from them, since a
    /// skin with no start or investigate synonyms can never be commanded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_keywords.is_empty() || self.investigate_keywords.is_empty() {
            return Err(ConfigError::IncompleteSkin {
                title: self.title.clone(),
            });
        }
        Ok(())
    }

    /// The face for a card kind.
    #[must_use]
    pub fn face(&self, kind: CardKind) -> &CardFace {
        match kind {
            CardKind::Good => &self.good,
            CardKind::Bad => &self.bad,
            CardKind::Blank => &self.blank,
        }
    }

    /// `"🟨 **Elder Signs**"` for the status header.
    #[must_use]
    pub fn good_plural_text(&self) -> String {
        format!("{} **{}**", self.good.emoji, self.good_plural)
    }

    /// True if the keyword starts this variant.
    #[must_use]
    pub fn is_start_keyword(&self, keyword: &str) -> bool {
        self.start_keywords.iter().any(|k| k == keyword)
    }

    /// True if the keyword is an investigate synonym.
    #[must_use]
    pub fn is_investigate_keyword(&self, keyword: &str) -> bool {
        self.investigate_keywords.iter().any(|k| k == keyword)
    }

    /// `` "`!to @player`, `!pass @player`, or `!investigate @player`" ``
    #[must_use]
    pub fn investigate_hints(&self) -> String {
        let hints: Vec<String> = self
            .investigate_keywords
            .iter()
            .map(|k| format!("`{COMMAND_PREFIX}{k} @player`"))
            .collect();
        list_phrase(&hints, Conjunction::Or)
    }
}
