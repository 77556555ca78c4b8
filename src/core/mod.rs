//! Core engine types: players, RNG, phrase formatting, error taxonomy.
//!
//! This module contains the fundamental building blocks that are game-agnostic.
//! Games build their sessions on top of these rather than modifying them.

pub mod error;
pub mod phrase;
pub mod player;
pub mod rng;

pub use error::{ConfigError, UserInputError};
pub use phrase::{list_phrase, Conjunction};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
