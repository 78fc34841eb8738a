//! Level generation and the per-level difficulty tables.
//!
//! ## Key Types
//!
//! - `LevelTable<C>`: level number → config entry, clamped past the end
//! - `LevelGenerator`: builds a solvable `PuzzleData` for a level
//! - `FractionGenerator` / `FractionLevel`: additive engine
//! - `FactorGenerator` / `FactorLevel`: multiplicative engine

pub mod additive;
pub mod generator;
pub mod multiplicative;
pub mod table;

pub use additive::{default_fraction_levels, FractionGenerator, FractionLevel};
pub use generator::{LevelGenerator, PuzzleData, SolutionCards, MAX_GENERATION_ATTEMPTS};
pub use multiplicative::{default_factor_levels, FactorGenerator, FactorLevel};
pub use table::{LevelConfig, LevelLookup, LevelTable};
