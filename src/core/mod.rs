//! Core building blocks: card identity and randomness.
//!
//! Both are injected into level generation so tests can pin every card id
//! and every random draw.

pub mod id;
pub mod rng;

pub use id::{CardId, IdSource, RandomIds, SequentialIds};
pub use rng::GameRng;
