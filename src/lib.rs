//! # card-arith
//!
//! Puzzle engine for arithmetic card games: reach a target number by
//! playing cards from a hand onto a running value.
//!
//! ## Design Principles
//!
//! 1. **Always Solvable**: Levels are generated by walking a correct path
//!    forward from the start, so the target is reachable by construction.
//!
//! 2. **One Engine, Two Rule Sets**: The additive (fractions) and
//!    multiplicative (× / ÷ factors) variants share the puzzle state
//!    machine and differ only in their `Rules` implementation.
//!
//! 3. **Derived, Never Stored**: The running value is recomputed from the
//!    play history, so `undo` is exact.
//!
//! ## Architecture
//!
//! - **Injected Randomness**: Generators take a `GameRng` and an
//!   `IdSource`, so a seed reproduces every puzzle and card id.
//!
//! - **Persistent Data Structures**: O(1) snapshots via `im-rs` for
//!   `PuzzleView`.
//!
//! ## Modules
//!
//! - `core`: Card ids and RNG
//! - `cards`: Cards, fraction faces, factor faces
//! - `rules`: `Rules` trait, status, feedback
//! - `levels`: Level tables and solvable puzzle generation
//! - `puzzle`: Puzzle state machine, snapshots, solution reveal
//! - `session`: Level progression across a campaign
//! - `error`: Shared error type

pub mod core;
pub mod cards;
pub mod rules;
pub mod levels;
pub mod puzzle;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{CardId, GameRng, IdSource, RandomIds, SequentialIds};

pub use crate::cards::{Card, Face, Factor, Fraction, Operation};

pub use crate::rules::{Additive, Feedback, Multiplicative, Rules, Status};

pub use crate::levels::{
    FactorGenerator, FactorLevel, FractionGenerator, FractionLevel,
    LevelConfig, LevelGenerator, LevelLookup, LevelTable, PuzzleData,
};

pub use crate::puzzle::{Puzzle, PuzzleView, Solution};

pub use crate::session::{CampaignStatus, GameSession, SessionConfig};

pub use crate::error::{PuzzleError, Result};
