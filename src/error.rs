//! Error type shared by the whole engine.
//!
//! Every error here is local and recoverable: a rejected action leaves the
//! puzzle exactly as it was, and generation problems are limited to bad
//! level lookups or malformed level tables.

use thiserror::Error;

use crate::rules::Status;

/// Errors raised by cards, level tables, puzzles and sessions.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    /// `apply` was called with an index outside the hand.
    #[error("card index {index} is out of range for a hand of {hand_size}")]
    InvalidCardIndex { index: usize, hand_size: usize },

    /// `undo` was called with nothing played.
    #[error("nothing to undo")]
    EmptyHistoryUndo,

    /// `apply` was called after the puzzle reached a terminal status.
    #[error("puzzle is no longer in progress (status: {0})")]
    PuzzleFinished(Status),

    /// Levels are numbered from 1 up to the campaign maximum.
    #[error("level {0} is not a playable level")]
    InvalidLevel(u32),

    /// A level table needs at least one entry to clamp to.
    #[error("level table has no entries")]
    EmptyLevelTable,

    /// A level entry cannot produce a puzzle.
    #[error("level {level} is misconfigured: {reason}")]
    InvalidLevelConfig { level: u32, reason: &'static str },

    /// Fraction cards need a nonzero denominator.
    #[error("fraction denominator must be nonzero")]
    ZeroDenominator,

    /// Moving the sign to the numerator would overflow `i64`.
    #[error("fraction {numerator}/{denominator} is out of range")]
    FractionOutOfRange { numerator: i64, denominator: i64 },

    /// Factor cards need a nonzero magnitude.
    #[error("factor magnitude must be nonzero")]
    ZeroFactor,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PuzzleError>;
