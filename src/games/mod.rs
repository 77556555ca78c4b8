//! The game catalog.
//!
//! Every game ships a [`GameEntry`](crate::dispatch::GameEntry) here; the
//! dispatcher offers unclaimed commands to each in registration order.

pub mod coin;
pub mod investigation;

pub use coin::{CoinFlipGame, CoinFlipSession};
pub use investigation::{GameSkin, InvestigationGame, InvestigationSession, RolePlan};
