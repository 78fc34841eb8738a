//! One attempt at one level: hand, history, status.
//!
//! `Puzzle<R>` is the aggregate root. It is seeded from generated
//! `PuzzleData`, mutated only through `apply` and `undo`, and read through
//! accessors or an immutable `PuzzleView` snapshot.

pub mod solution;
pub mod state;

pub use solution::Solution;
pub use state::{Puzzle, PuzzleView};
