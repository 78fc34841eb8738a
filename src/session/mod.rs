//! Level progression across a campaign.
//!
//! ## Key Types
//!
//! - `GameSession<G>`: current level, live puzzle, retry / next / reset
//! - `SessionConfig`: campaign length, seed, id scheme
//! - `CampaignStatus`: playing or completed

pub mod config;
pub mod progression;

pub use config::{SessionConfig, DEFAULT_MAX_LEVEL};
pub use progression::{CampaignStatus, GameSession};
