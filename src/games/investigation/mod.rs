//! The hidden-role investigation game.
//!
//! A fixed secret role partition, four rounds of shrinking hands, and
//! turn-by-turn card flips until one team's win condition fires. The rules
//! are skin-agnostic; [`GameSkin`] supplies every player-visible name.

pub mod entry;
pub mod session;
pub mod skin;

pub use entry::{InvestigationGame, RolePlan};
pub use session::{InvestigationSession, TOTAL_ROUNDS};
pub use skin::{CardFace, GameSkin, TeamFace};
